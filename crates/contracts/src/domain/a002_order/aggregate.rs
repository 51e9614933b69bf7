use serde::{Deserialize, Serialize};

use crate::enums::OrderStatus;

// ============================================================================
// Order line
// ============================================================================

/// Позиция заказа. Сумма строки всегда вычисляется из количества и цены.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "OrderLineJson", into = "OrderLineJson")]
pub struct OrderLine {
    pub product_code: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn new(product_code: impl Into<String>, quantity: i64, unit_price: f64) -> Self {
        Self {
            product_code: product_code.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

/// Запись позиции в колонке OrderLinesJSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineJson {
    pub product_code: String,
    pub quantity: i64,
    pub unit_price: f64,
    #[serde(default)]
    pub line_total: f64,
}

impl From<OrderLine> for OrderLineJson {
    fn from(line: OrderLine) -> Self {
        let line_total = line.line_total();
        Self {
            product_code: line.product_code,
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total,
        }
    }
}

// Сохранённый line_total игнорируется: пересчитываем из количества и цены
impl From<OrderLineJson> for OrderLine {
    fn from(json: OrderLineJson) -> Self {
        OrderLine::new(json.product_code, json.quantity, json.unit_price)
    }
}

// ============================================================================
// Order
// ============================================================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub client_name: String,
    /// Один или несколько номеров через "/"
    pub phone: String,
    pub address: String,
    pub delivery_fee: f64,
    /// Текст поля товаров, например "CA x 2, TA:3"
    pub products: String,
    pub total_price: f64,
    /// Текст статуса как в ячейке таблицы
    pub status: String,
    pub agent: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub order_lines: Vec<OrderLine>,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            phone: String::new(),
            address: String::new(),
            delivery_fee: 0.0,
            products: String::new(),
            total_price: 0.0,
            status: OrderStatus::default().label().to_string(),
            agent: String::new(),
            notes: String::new(),
            order_lines: Vec::new(),
        }
    }
}

impl Order {
    /// Заполнены имя, телефон и адрес, стоимость доставки не отрицательная
    pub fn is_valid(&self) -> bool {
        !self.client_name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.address.trim().is_empty()
            && self.delivery_fee >= 0.0
    }

    /// Сумма позиций плюс доставка
    pub fn calculate_total(&self) -> f64 {
        let products_total: f64 = self.order_lines.iter().map(OrderLine::line_total).sum();
        products_total + self.delivery_fee
    }

    pub fn status_kind(&self) -> Option<OrderStatus> {
        OrderStatus::from_label(&self.status)
    }
}
