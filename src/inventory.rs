//! In-memory inventory table and its draft editor.
//!
//! The session owns the saved [`InventoryTable`]. Edits happen on an
//! [`InventoryEditor`] draft and only reach the session on "Save & Sync",
//! which replaces the table wholesale.

use crate::error::{BizOsError, Result};
use crate::profile::Rupees;
use serde::{Deserialize, Serialize};

/// Shown after every save. No external sync happens, so it never varies.
pub const SYNC_SUCCESS_MESSAGE: &str = "Successfully synced across all digital platforms!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRow {
    pub product: String,
    pub stock: u32,
    pub price: Rupees,
}

impl InventoryRow {
    pub fn new(product: impl Into<String>, stock: u32, price: u64) -> Self {
        Self {
            product: product.into(),
            stock,
            price: Rupees(price),
        }
    }

    fn empty() -> Self {
        Self::new("", 0, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryTable {
    rows: Vec<InventoryRow>,
}

impl InventoryTable {
    pub fn new(rows: Vec<InventoryRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for InventoryTable {
    fn default() -> Self {
        Self::new(vec![
            InventoryRow::new("Masala Chai Mix", 50, 120),
            InventoryRow::new("Organic Honey", 15, 350),
        ])
    }
}

impl From<Vec<InventoryRow>> for InventoryTable {
    fn from(rows: Vec<InventoryRow>) -> Self {
        Self::new(rows)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Product,
    Stock,
    Price,
}

impl Column {
    pub fn all() -> &'static [Column] {
        &[Column::Product, Column::Stock, Column::Price]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Column::Product => "Product",
            Column::Stock => "Stock",
            Column::Price => "Price",
        }
    }

    fn index(&self) -> usize {
        match self {
            Column::Product => 0,
            Column::Stock => 1,
            Column::Price => 2,
        }
    }
}

/// Draft copy of the inventory with a cell cursor and an optional edit buffer.
#[derive(Debug, Clone)]
pub struct InventoryEditor {
    rows: Vec<InventoryRow>,
    row: usize,
    column: Column,
    /// Text being typed into the selected cell, if an edit is in progress
    buffer: Option<String>,
}

impl InventoryEditor {
    pub fn new(table: &InventoryTable) -> Self {
        Self {
            rows: table.rows().to_vec(),
            row: 0,
            column: Column::Product,
            buffer: None,
        }
    }

    pub fn rows(&self) -> &[InventoryRow] {
        &self.rows
    }

    /// Snapshot of the draft, used as the replacement table on save.
    pub fn to_rows(&self) -> Vec<InventoryRow> {
        self.rows.clone()
    }

    pub fn cursor(&self) -> (usize, Column) {
        (self.row, self.column)
    }

    pub fn edit_buffer(&self) -> Option<&str> {
        self.buffer.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.buffer.is_some()
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.rows.len() {
            self.row += 1;
        }
    }

    pub fn move_left(&mut self) {
        let idx = self.column.index().saturating_sub(1);
        self.column = Column::all()[idx];
    }

    pub fn move_right(&mut self) {
        let idx = (self.column.index() + 1).min(Column::all().len() - 1);
        self.column = Column::all()[idx];
    }

    /// Append an empty row and move the cursor onto it.
    pub fn add_row(&mut self) {
        self.buffer = None;
        self.rows.push(InventoryRow::empty());
        self.row = self.rows.len() - 1;
        self.column = Column::Product;
    }

    /// Remove the row under the cursor. Returns the removed row.
    pub fn delete_row(&mut self) -> Option<InventoryRow> {
        if self.rows.is_empty() {
            return None;
        }
        self.buffer = None;
        let removed = self.rows.remove(self.row);
        if self.row >= self.rows.len() {
            self.row = self.rows.len().saturating_sub(1);
        }
        Some(removed)
    }

    /// Start editing the selected cell, seeding the buffer with its value.
    pub fn begin_edit(&mut self) {
        let Some(row) = self.rows.get(self.row) else {
            return;
        };
        let current = match self.column {
            Column::Product => row.product.clone(),
            Column::Stock => row.stock.to_string(),
            Column::Price => row.price.amount().to_string(),
        };
        self.buffer = Some(current);
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(buffer) = self.buffer.as_mut() {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.buffer = None;
    }

    /// Parse the buffer into the selected cell.
    ///
    /// On a parse failure the edit stays open and the cell keeps its previous
    /// value, so the user can correct the input.
    pub fn commit_edit(&mut self) -> Result<()> {
        let Some(buffer) = self.buffer.as_ref() else {
            return Ok(());
        };
        let Some(row) = self.rows.get_mut(self.row) else {
            self.buffer = None;
            return Ok(());
        };

        let value = buffer.trim();
        match self.column {
            Column::Product => row.product = value.to_string(),
            Column::Stock => row.stock = parse_cell(Column::Stock, value)?,
            Column::Price => row.price = Rupees(parse_cell(Column::Price, value)?),
        }
        self.buffer = None;
        Ok(())
    }
}

fn parse_cell<T: std::str::FromStr>(column: Column, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| BizOsError::InvalidInventoryValue {
            column: column.name(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = InventoryTable::default();
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0], InventoryRow::new("Masala Chai Mix", 50, 120));
        assert_eq!(table.rows()[1], InventoryRow::new("Organic Honey", 15, 350));
    }

    #[test]
    fn test_edit_stock_cell() {
        let mut editor = InventoryEditor::new(&InventoryTable::default());
        editor.move_right();
        editor.begin_edit();
        assert_eq!(editor.edit_buffer(), Some("50"));

        editor.pop_char();
        editor.push_char('5');
        editor.commit_edit().unwrap();

        assert!(!editor.is_editing());
        assert_eq!(editor.rows()[0].stock, 55);
    }

    #[test]
    fn test_negative_stock_is_rejected() {
        let mut editor = InventoryEditor::new(&InventoryTable::default());
        editor.move_right();
        editor.begin_edit();
        while editor.edit_buffer().is_some_and(|b| !b.is_empty()) {
            editor.pop_char();
        }
        editor.push_char('-');
        editor.push_char('3');

        let err = editor.commit_edit().unwrap_err();
        assert!(matches!(
            err,
            BizOsError::InvalidInventoryValue { column: "Stock", .. }
        ));
        assert!(editor.is_editing());
        assert_eq!(editor.rows()[0].stock, 50);
    }

    #[test]
    fn test_price_edit_on_second_row() {
        let mut editor = InventoryEditor::new(&InventoryTable::default());
        editor.move_down();
        editor.move_right();
        editor.move_right();
        editor.move_right();
        assert_eq!(editor.cursor(), (1, Column::Price));

        editor.begin_edit();
        editor.push_char('0');
        editor.commit_edit().unwrap();
        assert_eq!(editor.rows()[1].price, Rupees(3500));
    }

    #[test]
    fn test_add_and_delete_rows() {
        let mut editor = InventoryEditor::new(&InventoryTable::default());
        editor.add_row();
        assert_eq!(editor.rows().len(), 3);
        assert_eq!(editor.cursor(), (2, Column::Product));

        editor.begin_edit();
        for c in "Jaggery".chars() {
            editor.push_char(c);
        }
        editor.commit_edit().unwrap();
        assert_eq!(editor.rows()[2].product, "Jaggery");

        let removed = editor.delete_row().unwrap();
        assert_eq!(removed.product, "Jaggery");
        assert_eq!(editor.rows().len(), 2);
        assert_eq!(editor.cursor().0, 1);
    }

    #[test]
    fn test_delete_on_empty_table() {
        let mut editor = InventoryEditor::new(&InventoryTable::new(Vec::new()));
        assert!(editor.delete_row().is_none());
        editor.begin_edit();
        assert!(!editor.is_editing());
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut editor = InventoryEditor::new(&InventoryTable::default());
        editor.move_up();
        editor.move_left();
        assert_eq!(editor.cursor(), (0, Column::Product));
        for _ in 0..5 {
            editor.move_down();
            editor.move_right();
        }
        assert_eq!(editor.cursor(), (1, Column::Price));
    }
}
