// Агрегаты предметной области
pub mod a001_product;
pub mod a002_order;
pub mod a004_agent;
