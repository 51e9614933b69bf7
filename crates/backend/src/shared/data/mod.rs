pub mod line_file;
pub mod session;
