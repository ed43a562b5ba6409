use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

use awssume_core::fs::FileSystem;
use awssume_infrastructure::ConfigStore;

const HEADER: [&str; 3] = ["ALIAS", "ARN", "SESSION_NAME"];

/// Spaces between the widest cell of a column and the next column.
const COLUMN_PADDING: usize = 4;

/// Prints the configured Roles as a table, in stored order.
pub fn run<F: FileSystem>(store: &ConfigStore<F>, path: &Path, out: &mut impl Write) -> Result<()> {
    let config = store.load(path)?;

    let mut rows = vec![HEADER.map(String::from)];
    rows.extend(config.roles.iter().map(|role| {
        [
            role.alias().to_string(),
            role.arn().to_string(),
            role.session_name().to_string(),
        ]
    }));

    write_table(out, &rows)?;
    Ok(())
}

/// Left-aligns every column but the last to its widest cell plus padding.
fn write_table<const N: usize>(out: &mut impl Write, rows: &[[String; N]]) -> io::Result<()> {
    let mut widths = [0usize; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 < N {
                line.push_str(&format!("{cell:<width$}", width = widths[i] + COLUMN_PADDING));
            } else {
                line.push_str(cell);
            }
        }
        writeln!(out, "{line}")?;
    }

    out.flush()
}
