//! relato-sdk: the travel journal as a library.
//!
//! # Overview
//!
//! `relato-sdk` is the stable API the `relato` CLI is built on. It opens a
//! data directory (config, local store, signed-in session) and exposes
//! authentication, the report composer, the feed and the profile.
//!
//! # Quickstart
//!
//! ```no_run
//! use relato_sdk::{Client, types::{FeedQuery, ReportIntent, SectionKey}};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::connect("/tmp/relato")?;
//! client.auth().sign_in("ana@example.com", "segredo1")?;
//!
//! let mut composer = client.reports().compose()?;
//! composer.apply(ReportIntent::SetTitle("Lisboa".to_string()))?;
//! for key in ["resumo", "hospedagem", "alimentacao"] {
//!     composer.apply(ReportIntent::SetSectionVisible { key: SectionKey::from(key), visible: true })?;
//!     composer.apply(ReportIntent::EditSectionContent {
//!         key: SectionKey::from(key),
//!         content: "...".to_string(),
//!     })?;
//! }
//! composer.save()?;
//!
//! let page = client.feed().list(FeedQuery::new(Some("lisboa".to_string()), None))?;
//! println!("{} of {} reports", page.stats.results, page.stats.total_reports);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `relato-types`: report aggregate, sections, users
//! - `relato-engine`: section model, intent reducer, validation, feed filter
//! - `relato-runtime`: gateway seam, local gateway, session manager, services

pub mod client;
pub mod draft;
pub mod error;
pub mod types;

pub use client::{
    AuthClient, Client, DraftResult, FeedClient, FeedPage, ProfileClient, ProfileSummary,
    ReportClient, ReportTemplate, TemplateSection,
};
pub use draft::DraftFile;
pub use error::{Error, Result};
