// Engine module - report editing model and feed computations
// Pure functions over relato-types; no I/O, no gateway access

pub mod detail;
pub mod editor;
mod error;
pub mod feed;
pub mod fields;
pub mod intent;
pub mod order;
pub mod section;
pub mod template;
pub mod validate;

pub use detail::{ReadableSection, readable_sections};
pub use editor::{EditorStates, SectionEditor, UploadState, upload_file_name};
pub use error::{Error, MIN_COMPLETED_SECTIONS, Result, ValidationError};
pub use feed::{CardState, FeedQuery, FeedStats, card_images, cover_image, filter_reports, has_summary};
pub use fields::{AgeUnit, ReportList};
pub use intent::{IgnoreReason, Outcome, ReportIntent, apply};
pub use order::{OrderRow, OrderView, drag, order_view};
pub use section::{is_completed, is_filled, reconcile_order};
pub use template::{new_draft, placeholder};
pub use validate::{ComposerProgress, validate_for_save};
