mod auth;
mod feed;
mod profile;
mod report;

pub use auth::*;
pub use feed::*;
pub use profile::*;
pub use report::*;
