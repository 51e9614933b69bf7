pub mod csv_handler;
pub mod order_grid;
pub mod service;
