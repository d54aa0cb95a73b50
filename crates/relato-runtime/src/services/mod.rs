pub mod composer;
pub mod detail;
pub mod feed;
pub mod profile;

pub use composer::Composer;
pub use detail::{DetailOps, ReportDetail};
pub use feed::{FeedOps, FeedView};
pub use profile::{ProfileOps, avatar_file_name};
