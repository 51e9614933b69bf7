//! Состояние таблицы заказов в памяти

use std::collections::HashSet;

use contracts::domain::a002_order::{GridRowView, OrderColumn, OrderRow, RowTag};
use contracts::enums::OrderStatus;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Please select rows first.")]
    NoSelection,

    #[error("Row {0} not found")]
    RowNotFound(Uuid),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

#[derive(Debug, Clone)]
struct GridRow {
    id: Uuid,
    cells: OrderRow,
    tag: RowTag,
}

impl GridRow {
    fn recolor(&mut self) {
        self.tag = RowTag::evaluate(&self.cells);
    }

    fn view(&self) -> GridRowView {
        GridRowView {
            id: self.id,
            cells: self.cells.clone(),
            tag: self.tag,
            background: self.tag.background().map(str::to_string),
            issues: self.cells.issues(),
        }
    }
}

/// Строки в порядке вставки плюс фильтр по статусам
#[derive(Debug, Clone)]
pub struct OrderGrid {
    rows: Vec<GridRow>,
    active_statuses: HashSet<OrderStatus>,
}

impl Default for OrderGrid {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            active_statuses: OrderStatus::all().into_iter().collect(),
        }
    }
}

impl OrderGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn insert_row(&mut self, cells: OrderRow) -> Uuid {
        let mut row = GridRow {
            id: Uuid::new_v4(),
            cells,
            tag: RowTag::Plain,
        };
        row.recolor();
        let id = row.id;
        self.rows.push(row);
        id
    }

    /// Новая пустая строка: статус Pending, доставка 3000
    pub fn add_empty_row(&mut self) -> Uuid {
        self.insert_row(OrderRow::empty())
    }

    pub fn row(&self, id: Uuid) -> Result<&OrderRow, GridError> {
        self.find(id).map(|r| &r.cells)
    }

    pub fn view(&self, id: Uuid) -> Result<GridRowView, GridError> {
        self.find(id).map(GridRow::view)
    }

    /// Меняет ячейку и пересчитывает цвет строки
    pub fn edit_cell(
        &mut self,
        id: Uuid,
        column: OrderColumn,
        value: impl Into<String>,
    ) -> Result<(), GridError> {
        let row = self.find_mut(id)?;
        row.cells.set(column, value);
        row.recolor();
        Ok(())
    }

    pub fn delete(&mut self, ids: &[Uuid]) -> Result<usize, GridError> {
        self.check_selection(ids)?;
        let before = self.rows.len();
        self.rows.retain(|r| !ids.contains(&r.id));
        Ok(before - self.rows.len())
    }

    /// Массовая смена статуса выделенных строк
    pub fn set_status(&mut self, ids: &[Uuid], status: OrderStatus) -> Result<usize, GridError> {
        self.check_selection(ids)?;
        for id in ids {
            let row = self.find_mut(*id)?;
            row.cells.status = status.label().to_string();
            row.recolor();
        }
        Ok(ids.len())
    }

    pub fn set_filter(&mut self, statuses: impl IntoIterator<Item = OrderStatus>) {
        self.active_statuses = statuses.into_iter().collect();
    }

    pub fn active_statuses(&self) -> Vec<OrderStatus> {
        OrderStatus::all()
            .into_iter()
            .filter(|s| self.active_statuses.contains(s))
            .collect()
    }

    /// Строки, прошедшие фильтр. Строка с нестандартным статусом видна всегда.
    pub fn visible_rows(&self) -> Vec<GridRowView> {
        self.rows
            .iter()
            .filter(|r| match r.cells.status_kind() {
                Some(status) => self.active_statuses.contains(&status),
                None => true,
            })
            .map(GridRow::view)
            .collect()
    }

    pub fn all_rows(&self) -> Vec<GridRowView> {
        self.rows.iter().map(GridRow::view).collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = &OrderRow> {
        self.rows.iter().map(|r| &r.cells)
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    // Все id должны существовать, иначе ничего не меняем
    fn check_selection(&self, ids: &[Uuid]) -> Result<(), GridError> {
        if ids.is_empty() {
            return Err(GridError::NoSelection);
        }
        match ids.iter().find(|id| self.find(**id).is_err()) {
            Some(missing) => Err(GridError::RowNotFound(*missing)),
            None => Ok(()),
        }
    }

    fn find(&self, id: Uuid) -> Result<&GridRow, GridError> {
        self.rows
            .iter()
            .find(|r| r.id == id)
            .ok_or(GridError::RowNotFound(id))
    }

    fn find_mut(&mut self, id: Uuid) -> Result<&mut GridRow, GridError> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(GridError::RowNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_row(status: &str) -> OrderRow {
        OrderRow {
            client_name: "Soa".into(),
            phone: "0331234567".into(),
            address: "Isotry".into(),
            status: status.into(),
            ..OrderRow::empty()
        }
    }

    #[test]
    fn test_add_empty_row_is_invalid() {
        let mut grid = OrderGrid::new();
        let id = grid.add_empty_row();
        let view = grid.view(id).unwrap();
        assert_eq!(view.tag, RowTag::Invalid);
        assert_eq!(view.cells.delivery_fee, "3000");
        assert_eq!(view.background.as_deref(), Some("#fff2b2"));
    }

    #[test]
    fn test_edit_cell_recolors() {
        let mut grid = OrderGrid::new();
        let id = grid.insert_row(filled_row("Ok"));
        assert_eq!(grid.view(id).unwrap().tag, RowTag::Status(OrderStatus::Ok));

        grid.edit_cell(id, OrderColumn::DeliveryFee, "-5").unwrap();
        let view = grid.view(id).unwrap();
        assert_eq!(view.tag, RowTag::Invalid);
        assert_eq!(view.issues, vec!["Delivery fee cannot be negative".to_string()]);

        grid.edit_cell(id, OrderColumn::DeliveryFee, "4000").unwrap();
        assert_eq!(grid.view(id).unwrap().tag, RowTag::Status(OrderStatus::Ok));

        let missing = Uuid::new_v4();
        assert_eq!(
            grid.edit_cell(missing, OrderColumn::Notes, "x"),
            Err(GridError::RowNotFound(missing))
        );
    }

    #[test]
    fn test_bulk_status_and_delete() {
        let mut grid = OrderGrid::new();
        let a = grid.insert_row(filled_row("Pending"));
        let b = grid.insert_row(filled_row("Pending"));
        let c = grid.insert_row(filled_row("Pending"));

        assert_eq!(grid.set_status(&[], OrderStatus::Ok), Err(GridError::NoSelection));
        assert_eq!(grid.set_status(&[a, c], OrderStatus::Cancelled), Ok(2));
        assert_eq!(grid.row(a).unwrap().status, "Cancelled");
        assert_eq!(grid.row(b).unwrap().status, "Pending");
        assert_eq!(
            grid.view(c).unwrap().tag,
            RowTag::Status(OrderStatus::Cancelled)
        );

        let unknown = Uuid::new_v4();
        assert_eq!(grid.delete(&[b, unknown]), Err(GridError::RowNotFound(unknown)));
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.delete(&[b]), Ok(1));
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.delete(&[]), Err(GridError::NoSelection));
    }

    #[test]
    fn test_filter_by_status() {
        let mut grid = OrderGrid::new();
        grid.insert_row(filled_row("Ok"));
        grid.insert_row(filled_row("Cancelled"));
        grid.insert_row(filled_row("Lost"));
        assert_eq!(grid.visible_rows().len(), 3);

        grid.set_filter([OrderStatus::Ok]);
        let visible: Vec<String> = grid
            .visible_rows()
            .into_iter()
            .map(|r| r.cells.status)
            .collect();
        assert_eq!(visible, vec!["Ok".to_string(), "Lost".to_string()]);
        assert_eq!(grid.active_statuses(), vec![OrderStatus::Ok]);
        assert_eq!(grid.all_rows().len(), 3);

        grid.clear();
        assert!(grid.is_empty());
    }
}
