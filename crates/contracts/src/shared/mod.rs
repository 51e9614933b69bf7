pub mod constants;
pub mod format;
pub mod parsers;
pub mod validators;
