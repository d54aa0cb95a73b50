// Runtime module - gateway seam, session state and the composer/feed/profile services
// Everything that touches the backend goes through `gateway::Gateway`

pub mod client;
pub mod config;
mod error;
pub mod gateway;
pub mod services;
pub mod session;

pub use client::Relato;
pub use config::{ComposerConfig, Config, StorageConfig, resolve_data_dir};
pub use error::{AuthError, Error, Result};
pub use gateway::{
    AuthGateway, Gateway, IMAGE_CONTENT_TYPE, LocalGateway, ReportGateway, StorageGateway,
};
pub use services::{
    Composer, DetailOps, FeedOps, FeedView, ProfileOps, ReportDetail, avatar_file_name,
};
pub use session::SessionManager;
