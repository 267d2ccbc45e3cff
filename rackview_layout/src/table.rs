// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tabular view of a single platform: one column per stack, rows top to bottom.

use crate::types::{PlatformId, TrayId};
use crate::warehouse::Warehouse;

/// Grid of a platform's trays as a table a UI can render directly.
///
/// The table is as tall as the platform's tallest stack. Row 0 is the top shelf
/// position; shorter stacks leave empty cells at the top of their column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShelfTable {
    rows: Vec<Vec<Option<TrayId>>>,
}

impl ShelfTable {
    /// Tabulate `platform`. `None` if the platform is unknown.
    pub fn for_platform(warehouse: &Warehouse, platform: PlatformId) -> Option<Self> {
        let stacks: Vec<&[TrayId]> = warehouse
            .platform(platform)?
            .stacks()
            .iter()
            .filter_map(|s| warehouse.stack(*s).map(|s| s.trays()))
            .collect();
        let height = stacks.iter().map(|t| t.len()).max().unwrap_or(0);
        let rows = (0..height)
            .map(|r| {
                let level = height - 1 - r;
                stacks.iter().map(|t| t.get(level).copied()).collect()
            })
            .collect();
        Some(Self { rows })
    }

    /// Number of rows (the tallest stack's tray count).
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (stacks).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> &[Vec<Option<TrayId>>] {
        &self.rows
    }

    /// The tray at `row` (from the top) and `column`, if any.
    pub fn cell(&self, row: usize, column: usize) -> Option<TrayId> {
        self.rows.get(row)?.get(column).copied().flatten()
    }

    /// Display text for a cell: `"<expiry> <category> <weight>"`, or `"-"` when empty.
    pub fn cell_text(&self, warehouse: &Warehouse, row: usize, column: usize) -> String {
        let Some(tray) = self.cell(row, column).and_then(|t| warehouse.tray(t)) else {
            return "-".into();
        };
        let expiry = tray.expiry().map_or("", |e| e.label.as_str());
        format!(
            "{expiry} {} {}",
            tray.category_label(),
            tray.weight_label()
        )
        .trim_start()
        .to_string()
    }
}
