//! Общие типы и чистая логика Delivery Manager
//!
//! Крейт не знает ничего о файлах и HTTP: только модели заказов,
//! парсинг поля товаров, валидаторы и форматирование сумм.

pub mod domain;
pub mod enums;
pub mod shared;
