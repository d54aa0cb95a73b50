//! Type re-exports for the SDK.
//!
//! SDK consumers (like the CLI) import domain and view types from here so the
//! internal crates can move around without breaking them.

// Domain types (from relato-types)
pub use relato_types::{
    Author, AuthUser, Country, CurrentUser, Month, Report, ReportId, ReportWithAuthor,
    SavedReport, Season, Section, SectionKey, SectionOrder, SectionSet, UserId, UserProfile,
    SUMMARY_KEY,
};

// Formatting helpers
pub use relato_types::{flag_emoji, format_age_months, format_count, season_badge, truncate};

// Editing model and feed computations (from relato-engine)
pub use relato_engine::{
    AgeUnit, CardState, ComposerProgress, FeedQuery, FeedStats, IgnoreReason, OrderRow,
    OrderView, Outcome, ReadableSection, ReportIntent, ReportList, UploadState, card_images, cover_image,
    has_summary, placeholder, readable_sections,
};

// Runtime services and configuration
pub use relato_runtime::{Composer, Config, ReportDetail, resolve_data_dir};
