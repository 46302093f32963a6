pub mod date;
pub mod title;

pub use date::normalize_added_on;
pub use title::normalize_title;
