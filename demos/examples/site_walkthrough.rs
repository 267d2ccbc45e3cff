// Copyright 2025 the Rackview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk the generated site the way the control panel does.
//!
//! Generates the default three-zone warehouse, prints the floor plan bounds, then steps
//! around the first zone and prints each platform as a shelf table.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p rackview_demos --example site_walkthrough`

use rackview_camera::{Aspect, CameraConfig, Focus, Viewer};
use rackview_layout::{Direction, LayoutConfig, ShelfTable, Warehouse, generate};
use tracing_subscriber::EnvFilter;

fn print_table(warehouse: &Warehouse, focus: Focus) {
    let Some(platform) = focus.platform() else {
        println!("== {} ==", focus.label(warehouse));
        return;
    };
    let Some(table) = ShelfTable::for_platform(warehouse, platform) else {
        return;
    };
    let directions = warehouse.platform_directions(platform);
    println!("== {} ({:?}) ==", focus.label(warehouse), directions);
    for row in 0..table.height() {
        let cells: Vec<String> = (0..table.width())
            .map(|column| format!("{:<24}", table.cell_text(warehouse, row, column)))
            .collect();
        println!("  {}", cells.join("|"));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let warehouse = generate(&LayoutConfig::default());
    warehouse.verify_links()?;
    println!(
        "{} zones, {} platforms, {} stacks, {} trays",
        warehouse.zones().count(),
        warehouse.platforms().count(),
        warehouse.stacks().count(),
        warehouse.trays().count()
    );
    if let Some(site) = warehouse.site_footprint() {
        println!("site footprint (x, z): {site:?}");
    }

    let config = CameraConfig::framed(&warehouse);
    let aspect = Aspect::from_viewport(1280, 720)?;
    let start = warehouse
        .zone_platform(0, 0)
        .ok_or("generated site has no platforms")?;
    let mut viewer = Viewer::new(Focus::Plan, config);
    let mut now = 0.0;
    viewer.frame(&warehouse, aspect, now)?;
    print_table(&warehouse, viewer.focus());

    viewer.set_focus(Focus::Platform(start), now);
    let route = [
        Direction::Left,
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
    for direction in route {
        while viewer.needs_redraw() {
            now += 1000.0 / 60.0;
            viewer.frame(&warehouse, aspect, now)?;
        }
        print_table(&warehouse, viewer.focus());
        if !viewer.step(&warehouse, direction, now) {
            println!("  no platform {direction:?}");
        }
    }
    while viewer.needs_redraw() {
        now += 1000.0 / 60.0;
        viewer.frame(&warehouse, aspect, now)?;
    }
    print_table(&warehouse, viewer.focus());
    Ok(())
}
