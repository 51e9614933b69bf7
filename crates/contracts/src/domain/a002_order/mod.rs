pub mod aggregate;
pub mod grid;

pub use aggregate::{Order, OrderLine, OrderLineJson};
pub use grid::{GridRowView, OrderColumn, OrderRow, RowTag};
