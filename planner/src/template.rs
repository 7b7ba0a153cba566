//! Venue templates: a table layout plus floorplan that can replace the current
//! tables while keeping the participant list.

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use serde::{Deserialize, Serialize};

use crate::doc::{Assignments, Table};
use crate::geometry::Bounds;

/// Floorplan tag for the Studio 1 venue.
pub const STUDIO1_FLOORPLAN: &str = "studio1";

/// Outer walls of the Studio 1 hall.
pub const STUDIO1_HALL: Bounds = Bounds { x: 100.0, y: 100.0, width: 1300.0, height: 1000.0 };

/// The wall splitting the Studio 1 hall in two.
pub const STUDIO1_DIVIDER: Bounds = Bounds { x: 600.0, y: 100.0, width: 40.0, height: 1000.0 };

/// Tables, assignments, and floorplan applied by LOAD_TEMPLATE.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub tables: Vec<Table>,
    #[serde(default)]
    pub assignments: Assignments,
    #[serde(default)]
    pub floorplan: Option<String>,
}

/// Look up a built-in template by name (`"studio1"`).
#[must_use]
pub fn builtin(name: &str) -> Option<Template> {
    match name {
        STUDIO1_FLOORPLAN => Some(studio1()),
        _ => None,
    }
}

/// Names accepted by [`builtin`].
#[must_use]
pub fn builtin_names() -> &'static [&'static str] {
    &[STUDIO1_FLOORPLAN]
}

/// Studio 1: two rows of four banquet tables inside the 1300 x 1000 hall,
/// two columns on each side of the central divider.
#[must_use]
pub fn studio1() -> Template {
    const COLUMNS: [f64; 4] = [240.0, 440.0, 780.0, 1100.0];
    const ROWS: [f64; 2] = [220.0, 680.0];

    let mut tables = Vec::with_capacity(COLUMNS.len() * ROWS.len());
    for (row, y) in ROWS.iter().enumerate() {
        for (col, x) in COLUMNS.iter().enumerate() {
            let n = row * COLUMNS.len() + col + 1;
            tables.push(Table {
                id: format!("studio1_t{n}"),
                name: format!("Table {n}"),
                x: *x,
                y: *y,
                width: 80.0,
                height: 204.0,
                rotation: 0.0,
                chair_count: 8,
            });
        }
    }

    Template { tables, assignments: Assignments::new(), floorplan: Some(STUDIO1_FLOORPLAN.to_owned()) }
}
