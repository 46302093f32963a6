pub mod clippings;
pub mod utility;
