//! Статические константы приложения

use crate::enums::OrderStatus;

/// Суффикс валюты (ариари)
pub const CURRENCY_SUFFIX: &str = "Ar";

pub const DEFAULT_STATUS: OrderStatus = OrderStatus::Pending;

/// Варианты стоимости доставки; первый подставляется в новую строку
pub const DELIVERY_FEE_OPTIONS: [&str; 2] = ["3000", "4000"];

/// Цвет строки, не прошедшей валидацию
pub const INVALID_ROW_COLOR: &str = "#fff2b2";

pub const PHONE_MIN_LENGTH: usize = 8;
pub const PHONE_MAX_LENGTH: usize = 15;

/// Максимальный размер истории адресов
pub const MAX_ADDRESS_HISTORY: usize = 200;

pub const DEFAULT_AGENTS: [&str; 5] = ["Jean", "Hery", "Mamy", "Rado", "External Courier"];

/// Первая ячейка, по которой узнаём строку-заголовок в каталоге товаров
pub const PRODUCT_HEADER_TOKENS: [&str; 3] = ["code", "product", "sku"];

/// Заголовок каталога товаров
pub const PRODUCT_CSV_HEADER: [&str; 4] = ["Code", "Name", "Price", "Unit"];

/// Каталог-пример, создаётся если файла товаров нет
pub const SAMPLE_PRODUCTS: [[&str; 4]; 6] = [
    ["CA", "Creme Affinante", "25000", "unit"],
    ["TA", "Tisane Affinante", "25000", "unit"],
    ["CG", "Creme Galbante", "25000", "unit"],
    ["SG", "SAVON GALBANT", "15000", "unit"],
    ["BS", "Base de Savon", "50", "g"],
    ["G", "Gaine", "10000", "unit"],
];
