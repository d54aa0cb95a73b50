pub mod auth;
mod context;
pub mod feed;
pub mod profile;
pub mod report;

pub use context::HandlerContext;
