//! Экспорт/импорт заказов в CSV
//!
//! Позиции заказа пишутся JSON-массивом в последнюю колонку `OrderLinesJSON`.

use std::path::Path;

use contracts::domain::a002_order::{Order, OrderLine, OrderRow};
use contracts::shared::constants::DEFAULT_STATUS;
use contracts::shared::format::{format_currency_text, parse_numeric};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvHandlerError {
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Order lines encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Строка файла заказов; порядок полей задаёт порядок колонок
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCsvRecord {
    #[serde(rename = "Client Name", default)]
    pub client_name: String,
    #[serde(rename = "Phone", default)]
    pub phone: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Delivery Fee", default)]
    pub delivery_fee: String,
    #[serde(rename = "Product(s)", default)]
    pub products: String,
    #[serde(rename = "Total Price", default)]
    pub total_price: String,
    #[serde(rename = "Status", default)]
    pub status: String,
    #[serde(rename = "Agent", default)]
    pub agent: String,
    #[serde(rename = "Notes", default)]
    pub notes: String,
    #[serde(rename = "OrderLinesJSON", default)]
    pub order_lines_json: String,
}

/// Импортированная запись: ячейки строки и разобранные позиции
#[derive(Debug, Clone)]
pub struct ImportedOrder {
    pub row: OrderRow,
    pub order_lines: Vec<OrderLine>,
}

impl ImportedOrder {
    pub fn into_order(self) -> Order {
        let row = self.row;
        Order {
            delivery_fee: parse_amount(&row.delivery_fee),
            total_price: parse_amount(&row.total_price),
            client_name: row.client_name,
            phone: row.phone,
            address: row.address,
            products: row.products,
            status: row.status,
            agent: row.agent,
            notes: row.notes,
            order_lines: self.order_lines,
        }
    }
}

fn parse_amount(value: &str) -> f64 {
    parse_numeric(value, true).map(|n| n.as_f64()).unwrap_or(0.0)
}

impl OrderCsvRecord {
    fn from_order(order: &Order) -> Result<Self, CsvHandlerError> {
        let order_lines_json = if order.order_lines.is_empty() {
            String::new()
        } else {
            serde_json::to_string(&order.order_lines)?
        };

        Ok(Self {
            client_name: order.client_name.clone(),
            phone: order.phone.clone(),
            address: order.address.clone(),
            delivery_fee: order.delivery_fee.to_string(),
            products: order.products.clone(),
            total_price: order.total_price.to_string(),
            status: order.status.clone(),
            agent: order.agent.clone(),
            notes: order.notes.clone(),
            order_lines_json,
        })
    }

    /// Без колонки `Status` строка получает статус по умолчанию;
    /// пустая ячейка остаётся пустой
    fn into_imported(self, has_status_column: bool) -> ImportedOrder {
        let order_lines = parse_order_lines(&self.order_lines_json);
        let status = if has_status_column {
            self.status
        } else {
            DEFAULT_STATUS.label().to_string()
        };
        ImportedOrder {
            row: OrderRow {
                client_name: self.client_name,
                phone: self.phone,
                address: self.address,
                delivery_fee: self.delivery_fee,
                products: self.products,
                total_price: format_currency_text(&self.total_price),
                status,
                agent: self.agent,
                notes: self.notes,
            },
            order_lines,
        }
    }
}

// Битый JSON не мешает импорту: позиций просто нет
fn parse_order_lines(json: &str) -> Vec<OrderLine> {
    if json.trim().is_empty() {
        return Vec::new();
    }
    match serde_json::from_str::<Vec<OrderLine>>(json) {
        Ok(lines) => lines,
        Err(e) => {
            tracing::warn!("Malformed OrderLinesJSON ignored: {}", e);
            Vec::new()
        }
    }
}

/// Записывает все заказы в файл (перезаписывая его)
pub fn export_orders(orders: &[Order], path: &Path) -> Result<(), CsvHandlerError> {
    let mut writer = csv::Writer::from_path(path)?;
    for order in orders {
        writer.serialize(OrderCsvRecord::from_order(order)?)?;
    }
    if orders.is_empty() {
        writer.write_record(CSV_HEADER)?;
    }
    writer.flush()?;

    tracing::info!("Exported {} orders to {}", orders.len(), path.display());
    Ok(())
}

const CSV_HEADER: [&str; 10] = [
    "Client Name",
    "Phone",
    "Address",
    "Delivery Fee",
    "Product(s)",
    "Total Price",
    "Status",
    "Agent",
    "Notes",
    "OrderLinesJSON",
];

/// Читает файл заказов по заголовкам колонок
pub fn import_orders(path: &Path) -> Result<Vec<ImportedOrder>, CsvHandlerError> {
    let text = std::fs::read_to_string(path)?;
    // Strip UTF-8 BOM if present
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let has_status_column = reader.headers()?.iter().any(|h| h == "Status");

    let mut orders = Vec::new();
    for record in reader.deserialize::<OrderCsvRecord>() {
        orders.push(record?.into_imported(has_status_column));
    }

    tracing::info!("Imported {} orders from {}", orders.len(), path.display());
    Ok(orders)
}
