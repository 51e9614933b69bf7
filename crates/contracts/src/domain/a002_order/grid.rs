//! Строки таблицы заказов: ячейки, колонки и цветовая метка строки

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::OrderStatus;
use crate::shared::constants::{DEFAULT_STATUS, DELIVERY_FEE_OPTIONS, INVALID_ROW_COLOR};
use crate::shared::validators::{validate_address, validate_delivery_fee, validate_phone};

/// Колонки таблицы в порядке отображения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderColumn {
    #[serde(rename = "Client Name")]
    ClientName,
    #[serde(rename = "Phone")]
    Phone,
    #[serde(rename = "Address")]
    Address,
    #[serde(rename = "Delivery Fee")]
    DeliveryFee,
    #[serde(rename = "Product(s)")]
    Products,
    #[serde(rename = "Total Price")]
    TotalPrice,
    #[serde(rename = "Status")]
    Status,
    #[serde(rename = "Agent")]
    Agent,
    #[serde(rename = "Notes")]
    Notes,
}

impl OrderColumn {
    pub fn label(&self) -> &'static str {
        match self {
            OrderColumn::ClientName => "Client Name",
            OrderColumn::Phone => "Phone",
            OrderColumn::Address => "Address",
            OrderColumn::DeliveryFee => "Delivery Fee",
            OrderColumn::Products => "Product(s)",
            OrderColumn::TotalPrice => "Total Price",
            OrderColumn::Status => "Status",
            OrderColumn::Agent => "Agent",
            OrderColumn::Notes => "Notes",
        }
    }

    pub fn all() -> [OrderColumn; 9] {
        [
            OrderColumn::ClientName,
            OrderColumn::Phone,
            OrderColumn::Address,
            OrderColumn::DeliveryFee,
            OrderColumn::Products,
            OrderColumn::TotalPrice,
            OrderColumn::Status,
            OrderColumn::Agent,
            OrderColumn::Notes,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.label() == label)
    }
}

/// Ячейки одной строки таблицы (всё хранится текстом, как в сетке)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRow {
    pub client_name: String,
    pub phone: String,
    pub address: String,
    pub delivery_fee: String,
    pub products: String,
    pub total_price: String,
    pub status: String,
    pub agent: String,
    pub notes: String,
}

impl OrderRow {
    /// Пустая строка для кнопки "Add Row"
    pub fn empty() -> Self {
        Self {
            status: DEFAULT_STATUS.label().to_string(),
            delivery_fee: DELIVERY_FEE_OPTIONS[0].to_string(),
            ..Self::default()
        }
    }

    pub fn get(&self, column: OrderColumn) -> &str {
        match column {
            OrderColumn::ClientName => &self.client_name,
            OrderColumn::Phone => &self.phone,
            OrderColumn::Address => &self.address,
            OrderColumn::DeliveryFee => &self.delivery_fee,
            OrderColumn::Products => &self.products,
            OrderColumn::TotalPrice => &self.total_price,
            OrderColumn::Status => &self.status,
            OrderColumn::Agent => &self.agent,
            OrderColumn::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, column: OrderColumn, value: impl Into<String>) {
        let value = value.into();
        match column {
            OrderColumn::ClientName => self.client_name = value,
            OrderColumn::Phone => self.phone = value,
            OrderColumn::Address => self.address = value,
            OrderColumn::DeliveryFee => self.delivery_fee = value,
            OrderColumn::Products => self.products = value,
            OrderColumn::TotalPrice => self.total_price = value,
            OrderColumn::Status => self.status = value,
            OrderColumn::Agent => self.agent = value,
            OrderColumn::Notes => self.notes = value,
        }
    }

    pub fn status_kind(&self) -> Option<OrderStatus> {
        OrderStatus::from_label(&self.status)
    }

    /// Сообщения валидаторов, которые не прошли
    pub fn issues(&self) -> Vec<String> {
        [
            validate_phone(&self.phone),
            validate_address(&self.address),
            validate_delivery_fee(&self.delivery_fee),
        ]
        .into_iter()
        .filter(|r| !r.is_valid)
        .map(|r| r.message)
        .collect()
    }
}

/// Цветовая метка строки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "status", rename_all = "snake_case")]
pub enum RowTag {
    Invalid,
    Status(OrderStatus),
    /// Статус не из списка: строка без подсветки
    Plain,
}

impl RowTag {
    /// Ошибки валидации важнее цвета статуса
    pub fn evaluate(row: &OrderRow) -> Self {
        let is_valid = validate_phone(&row.phone).is_valid
            && validate_address(&row.address).is_valid
            && validate_delivery_fee(&row.delivery_fee).is_valid;

        if !is_valid {
            return RowTag::Invalid;
        }
        match row.status_kind() {
            Some(status) => RowTag::Status(status),
            None => RowTag::Plain,
        }
    }

    pub fn background(&self) -> Option<&'static str> {
        match self {
            RowTag::Invalid => Some(INVALID_ROW_COLOR),
            RowTag::Status(status) => Some(status.color()),
            RowTag::Plain => None,
        }
    }
}

/// Строка для отдачи наружу (API)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRowView {
    pub id: Uuid,
    pub cells: OrderRow,
    pub tag: RowTag,
    pub background: Option<String>,
    pub issues: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_row() -> OrderRow {
        OrderRow {
            client_name: "Hery".into(),
            phone: "034 12 345 67".into(),
            address: "Ankorondrano".into(),
            ..OrderRow::empty()
        }
    }

    #[test]
    fn test_empty_row_defaults() {
        let row = OrderRow::empty();
        assert_eq!(row.status, "Pending");
        assert_eq!(row.delivery_fee, "3000");
        assert!(row.client_name.is_empty());
    }

    #[test]
    fn test_column_get_set() {
        let mut row = OrderRow::default();
        for column in OrderColumn::all() {
            row.set(column, column.label());
        }
        for column in OrderColumn::all() {
            assert_eq!(row.get(column), column.label());
            assert_eq!(OrderColumn::from_label(column.label()), Some(column));
        }
        assert_eq!(OrderColumn::from_label("OrderLinesJSON"), None);
    }

    #[test]
    fn test_row_tag() {
        let row = valid_row();
        assert_eq!(RowTag::evaluate(&row), RowTag::Status(OrderStatus::Pending));
        assert_eq!(RowTag::evaluate(&row).background(), Some("#fffce6"));

        let mut invalid = row.clone();
        invalid.phone = "abc".into();
        assert_eq!(RowTag::evaluate(&invalid), RowTag::Invalid);
        assert_eq!(RowTag::Invalid.background(), Some("#fff2b2"));

        let mut unknown = row;
        unknown.status = "Lost".into();
        assert_eq!(RowTag::evaluate(&unknown), RowTag::Plain);
        assert_eq!(RowTag::Plain.background(), None);
    }

    #[test]
    fn test_issues() {
        assert!(valid_row().issues().is_empty());
        let issues = OrderRow::empty().issues();
        assert_eq!(
            issues,
            vec!["Empty phone field".to_string(), "Address cannot be empty".to_string()]
        );
    }
}
