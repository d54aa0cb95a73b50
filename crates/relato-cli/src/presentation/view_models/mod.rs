mod auth;
mod common;
mod feed;
mod profile;
mod report;
mod result;

pub use auth::*;
pub use common::*;
pub use feed::*;
pub use profile::*;
pub use report::*;
pub use result::*;

use std::fmt;

/// Text rendering of a view model at a given density
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
