// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Synthetic warehouse generation.
//!
//! Each zone is a wall of racking: rows are shelf levels stacked along +y (row 0 lowest),
//! columns run along +x, and zones are spaced along +z. Tray contents are deterministic
//! sample data derived from the tray's position in flattening order.

use chrono::NaiveDate;
use glam::{Mat4, Vec3};

use crate::builder::WarehouseBuilder;
use crate::types::{ExpiryRange, PlatformId, PlatformSpec, TraySize, TraySpec};
use crate::warehouse::Warehouse;

const CATEGORIES: [&str; 5] = ["Frozen", "Chilled", "Ambient", "Dry Goods", "Hazmat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EXPIRY_YEAR: i32 = 2026;

/// Parameters for [`generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Number of zones.
    pub zones: usize,
    /// Shelf levels per zone. Ignored when [`row_lengths`](Self::row_lengths) is set.
    pub rows: usize,
    /// Platforms per level. Ignored when [`row_lengths`](Self::row_lengths) is set.
    pub columns: usize,
    /// Explicit platforms-per-level, bottom to top, for ragged grids.
    pub row_lengths: Option<Vec<usize>>,
    /// Stacks on each platform.
    pub stacks_per_platform: usize,
    /// Trays placed on each stack (never more than `max_stack_height`).
    pub trays_per_stack: usize,
    /// Stack capacity in trays.
    pub max_stack_height: u32,
    /// Size of a single tray.
    pub tray_size: TraySize,
    /// Distance between neighboring columns along x.
    pub column_pitch: f32,
    /// Distance between neighboring levels along y.
    pub row_pitch: f32,
    /// Distance between neighboring zones along z.
    pub zone_pitch: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            zones: 3,
            rows: 5,
            columns: 5,
            row_lengths: None,
            stacks_per_platform: 4,
            trays_per_stack: 3,
            max_stack_height: 6,
            tray_size: TraySize::default(),
            column_pitch: 3.0,
            row_pitch: 1.25,
            zone_pitch: 4.0,
        }
    }
}

impl LayoutConfig {
    /// Replace the rectangular grid with explicit (possibly unequal) row lengths.
    #[must_use]
    pub fn with_row_lengths(mut self, lengths: impl Into<Vec<usize>>) -> Self {
        self.row_lengths = Some(lengths.into());
        self
    }

    /// Platforms per level, bottom to top.
    pub fn row_lengths(&self) -> Vec<usize> {
        self.row_lengths
            .clone()
            .unwrap_or_else(|| vec![self.columns; self.rows])
    }
}

/// Build a warehouse from `config`, with all navigation links wired.
pub fn generate(config: &LayoutConfig) -> Warehouse {
    let mut b = WarehouseBuilder::new(config.tray_size);
    let rows = config.row_lengths();
    let trays_per_stack = config
        .trays_per_stack
        .min(usize::try_from(config.max_stack_height).unwrap_or(usize::MAX));
    let mut tray_count = 0_usize;

    for z in 0..config.zones {
        let letter = zone_letter(z);
        let zone = b.add_zone(format!("Zone {letter}"));
        #[allow(clippy::cast_precision_loss, reason = "Grid indices are small.")]
        let zone_offset = Mat4::from_translation(Vec3::new(0.0, 0.0, z as f32 * config.zone_pitch));

        let mut grid: Vec<Vec<PlatformId>> = Vec::with_capacity(rows.len());
        for (r, &columns) in rows.iter().enumerate() {
            let is_lateral = r % 2 == 1;
            let kind = if is_lateral { "Carton Flow" } else { "Static Shelving" };
            let mut row = Vec::with_capacity(columns);
            for c in 0..columns {
                #[allow(clippy::cast_precision_loss, reason = "Grid indices are small.")]
                let placement = Mat4::from_translation(Vec3::new(
                    c as f32 * config.column_pitch,
                    r as f32 * config.row_pitch,
                    0.0,
                ));
                let platform = b.add_platform(
                    zone,
                    PlatformSpec {
                        label: format!("{letter}-{}-{}", r + 1, c + 1),
                        kind: kind.into(),
                        is_lateral,
                        transform: zone_offset * placement,
                    },
                );
                for s in 0..config.stacks_per_platform {
                    let stack = b.add_stack(platform, config.max_stack_height);
                    for t in 0..trays_per_stack {
                        b.add_tray(stack, sample_tray(tray_count, s, t, config.tray_size));
                        tray_count += 1;
                    }
                }
                b.link_stacks(platform);
                row.push(platform);
            }
            grid.push(row);
        }
        b.link_grid(&grid);
    }

    tracing::debug!(
        zones = config.zones,
        rows = ?rows,
        stacks_per_platform = config.stacks_per_platform,
        trays_per_stack,
        "generated warehouse"
    );
    b.build()
}

fn zone_letter(z: usize) -> String {
    match u8::try_from(z) {
        Ok(z) if z < 26 => char::from(b'A' + z).to_string(),
        _ => format!("Z{z}"),
    }
}

fn sample_tray(n: usize, stack: usize, level: usize, size: TraySize) -> TraySpec {
    #[allow(clippy::cast_precision_loss, reason = "Grid indices are small.")]
    let local_transform = Mat4::from_translation(Vec3::new(
        stack as f32 * size.width,
        level as f32 * size.height,
        0.0,
    ));
    let category = (n % 7 != 6).then(|| CATEGORIES[n % CATEGORIES.len()].to_string());
    #[allow(clippy::cast_precision_loss, reason = "Sample weights are small.")]
    let weight = (n % 11 != 10).then(|| ((n * 37) % 200) as f32 / 4.0 + 5.0);
    let expiry = if n % 3 == 0 {
        month_window(EXPIRY_YEAR, (n / 3) % 12)
    } else {
        None
    };
    TraySpec {
        local_transform,
        category,
        expiry,
        weight,
    }
}

/// The whole calendar month `month0` (0-based) of `year`.
fn month_window(year: i32, month0: usize) -> Option<ExpiryRange> {
    let month = u32::try_from(month0).ok()? + 1;
    let from = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some(ExpiryRange {
        from,
        to: next.pred_opt()?,
        label: format!("{} {year}", MONTHS.get(month0)?),
    })
}
