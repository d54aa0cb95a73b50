pub mod style;
pub mod text;
pub mod time;
