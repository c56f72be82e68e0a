//! Table output formatting for CLI commands
//!
//! Formats controller/VM mappings using comfy-table.

use std::env;

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};

use crate::domain::models::ControllerMapping;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Formatter honoring `NO_COLOR` and dumb terminals
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Formatter with explicit color and width settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format controller mappings, one row each in file order
    pub fn format_controllers(&self, controllers: &[ControllerMapping]) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Desired Address").add_attribute(Attribute::Bold),
            Cell::new("VM").add_attribute(Attribute::Bold),
        ]);

        for controller in controllers {
            let name_cell = if self.use_colors {
                Cell::new(&controller.name).fg(Color::Cyan)
            } else {
                Cell::new(&controller.name)
            };

            table.add_row(vec![
                name_cell,
                Cell::new(or_dash(&controller.task_definition_address)),
                Cell::new(or_dash(&controller.vm_name)),
            ]);
        }

        table.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }

    !matches!(env::var("TERM").as_deref(), Ok("dumb"))
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}
