//! DeliveryApp: связывает действия пользователя с таблицей и файлами данных

use std::path::Path;

use contracts::domain::a001_product::Product;
use contracts::domain::a002_order::{GridRowView, Order, OrderColumn, OrderLine, OrderRow};
use contracts::domain::a004_agent::AgentRoster;
use contracts::enums::OrderStatus;
use contracts::shared::format::{capitalize_name, format_currency, parse_numeric};
use contracts::shared::parsers::parse_product_field;
use contracts::shared::validators::parse_delivery_fee;
use uuid::Uuid;

use super::csv_handler;
use super::order_grid::{GridError, OrderGrid};
use crate::domain::a001_product::repository::{self as product_repository, ProductCatalog};
use crate::domain::a003_address::repository::AddressManager;
use crate::domain::a004_agent::repository::AgentManager;
use crate::shared::config::{resolve_data_path, Config};

pub struct DeliveryApp {
    grid: OrderGrid,
    catalog: ProductCatalog,
    agents: Vec<String>,
    agent_manager: AgentManager,
    address_manager: AddressManager,
}

impl DeliveryApp {
    /// Загружает каталог и курьеров по путям из конфигурации
    pub fn from_config(config: &Config) -> Self {
        let catalog = product_repository::load_products(&resolve_data_path(&config.files.products));
        Self::new(
            catalog,
            AgentManager::new(resolve_data_path(&config.files.agents)),
            AddressManager::new(resolve_data_path(&config.files.addresses)),
        )
    }

    pub fn new(
        catalog: ProductCatalog,
        agent_manager: AgentManager,
        address_manager: AddressManager,
    ) -> Self {
        let agents = agent_manager.load_agents();
        tracing::info!(
            "Delivery app ready: {} products, {} agents",
            catalog.len(),
            agents.len()
        );
        Self {
            grid: OrderGrid::new(),
            catalog,
            agents,
            agent_manager,
            address_manager,
        }
    }

    // ------------------------------------------------------------------
    // Таблица
    // ------------------------------------------------------------------

    pub fn add_row(&mut self) -> Uuid {
        self.grid.add_empty_row()
    }

    pub fn rows(&self, include_hidden: bool) -> Vec<GridRowView> {
        if include_hidden {
            self.grid.all_rows()
        } else {
            self.grid.visible_rows()
        }
    }

    /// Правка ячейки. Имя клиента нормализуется, адрес уходит в историю,
    /// товары и доставка пересчитывают итог.
    pub fn edit_cell(
        &mut self,
        id: Uuid,
        column: &str,
        value: &str,
    ) -> Result<GridRowView, GridError> {
        let column = OrderColumn::from_label(column)
            .ok_or_else(|| GridError::UnknownColumn(column.to_string()))?;
        match column {
            OrderColumn::ClientName => {
                self.grid.edit_cell(id, column, capitalize_name(value))?;
                return self.grid.view(id);
            }
            _ => self.grid.edit_cell(id, column, value)?,
        }

        match column {
            OrderColumn::Address if !value.trim().is_empty() => {
                self.address_manager.save_address(value);
            }
            OrderColumn::Products | OrderColumn::DeliveryFee => {
                self.recalculate_total(id)?;
            }
            _ => {}
        }

        self.grid.view(id)
    }

    /// Итог = сумма (цена × количество) по каталогу + доставка
    pub fn recalculate_total(&mut self, id: Uuid) -> Result<f64, GridError> {
        let row = self.grid.row(id)?;
        let products_total: f64 = parse_product_field(&row.products)
            .iter()
            .map(|p| self.catalog.price_of(&p.code) * p.qty as f64)
            .sum();
        let delivery_fee = parse_delivery_fee(&row.delivery_fee).unwrap_or(0.0);

        let total = products_total + delivery_fee;
        self.grid
            .edit_cell(id, OrderColumn::TotalPrice, format_currency(total))?;
        tracing::debug!("Row {} total recalculated: {}", id, total);
        Ok(total)
    }

    pub fn delete_selected(&mut self, ids: &[Uuid]) -> Result<usize, GridError> {
        let deleted = self.grid.delete(ids)?;
        tracing::info!("Deleted {} row(s)", deleted);
        Ok(deleted)
    }

    pub fn set_status(&mut self, ids: &[Uuid], status: OrderStatus) -> Result<usize, GridError> {
        let updated = self.grid.set_status(ids, status)?;
        tracing::info!("Status '{}' set on {} row(s)", status, updated);
        Ok(updated)
    }

    pub fn set_filter(&mut self, statuses: Vec<OrderStatus>) -> Vec<OrderStatus> {
        self.grid.set_filter(statuses);
        self.grid.active_statuses()
    }

    pub fn active_statuses(&self) -> Vec<OrderStatus> {
        self.grid.active_statuses()
    }

    pub fn clear_all(&mut self) {
        self.grid.clear();
    }

    // ------------------------------------------------------------------
    // CSV
    // ------------------------------------------------------------------

    /// Строки таблицы как заказы с позициями по ценам каталога
    pub fn orders(&self) -> Vec<Order> {
        self.grid.cells().map(|row| self.row_to_order(row)).collect()
    }

    fn row_to_order(&self, row: &OrderRow) -> Order {
        let order_lines = parse_product_field(&row.products)
            .into_iter()
            .map(|p| {
                let price = self.catalog.price_of(&p.code);
                OrderLine::new(p.code, p.qty, price)
            })
            .collect();

        Order {
            client_name: row.client_name.clone(),
            phone: row.phone.clone(),
            address: row.address.clone(),
            delivery_fee: parse_delivery_fee(&row.delivery_fee)
                .unwrap_or_else(|| amount(&row.delivery_fee)),
            products: row.products.clone(),
            total_price: amount(&row.total_price),
            status: row.status.clone(),
            agent: row.agent.clone(),
            notes: row.notes.clone(),
            order_lines,
        }
    }

    pub fn save_csv(&self, path: &Path) -> anyhow::Result<usize> {
        let orders = self.orders();
        csv_handler::export_orders(&orders, path)?;
        Ok(orders.len())
    }

    /// Заменяет содержимое таблицы строками из файла
    pub fn load_csv(&mut self, path: &Path) -> anyhow::Result<usize> {
        let imported = csv_handler::import_orders(path)?;
        self.grid.clear();
        for order in &imported {
            self.grid.insert_row(order.row.clone());
        }
        Ok(imported.len())
    }

    // ------------------------------------------------------------------
    // Справочники
    // ------------------------------------------------------------------

    pub fn agents(&self) -> &[String] {
        &self.agents
    }

    pub fn save_agents(&mut self, roster: AgentRoster) -> anyhow::Result<Vec<String>> {
        roster.validate_for_save()?;
        self.agents = roster.into_agents();
        self.agent_manager.save_agents(&self.agents);
        tracing::info!("Agents updated: {}", self.agents.len());
        Ok(self.agents.clone())
    }

    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    pub fn address_suggestions(&self, query: &str, limit: usize) -> Vec<String> {
        self.address_manager.suggest(query, limit)
    }

    pub fn clear_address_history(&self) {
        self.address_manager.clear_history();
    }
}

fn amount(value: &str) -> f64 {
    parse_numeric(value, true).map(|n| n.as_f64()).unwrap_or(0.0)
}
