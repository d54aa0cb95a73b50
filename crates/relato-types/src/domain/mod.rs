pub mod ids;
pub mod report;
pub mod section;
pub mod user;

pub use ids::*;
pub use report::*;
pub use section::*;
pub use user::*;
