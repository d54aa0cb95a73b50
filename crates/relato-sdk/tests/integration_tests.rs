//! Integration tests for relato-sdk
//!
//! These tests verify SDK functionality without going through the CLI layer.
//! They use the SDK's public API directly for faster, type-safe testing.

mod scenarios {
    mod composer_save;
    mod feed_interactions;
    mod profile;
    mod report_edit;
    mod section_order;
}
