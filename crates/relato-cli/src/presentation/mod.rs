//! # Presentation Layer
//!
//! Console output for the CLI, organised as presenters, view models, views
//! and a renderer.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (SDK calls)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//! ```
//!
//! ## Rules
//!
//! ### 1. ViewModels carry raw data
//! Counts stay numbers and timestamps stay timestamps. Views format them
//! (`format_count`, relative times, flags). `--format json` prints the
//! view model as-is, so it is the stable scripting interface.
//!
//! ### 2. `ViewMode` is density, not shape
//! * **Minimal:** IDs only, no badge or tips.
//! * **Compact:** One line per report.
//! * **Standard:** Cards with metadata (default).
//! * **Verbose:** Full IDs, places and image URLs.
//!
//! ### 3. Handlers never print
//! Everything goes through [`ConsoleRenderer`].

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{OutputFormat, ViewMode};
