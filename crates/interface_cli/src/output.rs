//! Output formatting utilities.

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// A value that can be shown as aligned `label: value` lines
pub trait TableRow {
    fn cells(&self) -> Vec<(&'static str, String)>;
}

/// Renders a list of rows
pub fn render_list<T: Serialize + TableRow>(rows: &[T], format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Table => {
            if rows.is_empty() {
                return Ok("No results.".to_string());
            }
            let lines: Vec<String> = rows
                .iter()
                .map(|row| {
                    row.cells()
                        .into_iter()
                        .map(|(_, value)| value)
                        .collect::<Vec<_>>()
                        .join("  ")
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

/// Renders a single record
pub fn render_single<T: Serialize + TableRow>(row: &T, format: OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(row)?),
        OutputFormat::Table => {
            let cells = row.cells();
            let width = cells.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
            Ok(cells
                .into_iter()
                .map(|(label, value)| format!("{:<width$}  {}", label, value, width = width))
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Pair {
        code: i32,
        name: &'static str,
    }

    impl TableRow for Pair {
        fn cells(&self) -> Vec<(&'static str, String)> {
            vec![("code", self.code.to_string()), ("name", self.name.to_string())]
        }
    }

    #[test]
    fn test_table_list() {
        let rows = [Pair { code: 1, name: "a" }, Pair { code: 2, name: "b" }];
        assert_eq!(render_list(&rows, OutputFormat::Table).unwrap(), "1  a\n2  b");
    }

    #[test]
    fn test_empty_list() {
        let rows: [Pair; 0] = [];
        assert_eq!(render_list(&rows, OutputFormat::Table).unwrap(), "No results.");
    }

    #[test]
    fn test_single_aligns_labels() {
        let row = Pair { code: 7, name: "x" };
        assert_eq!(render_single(&row, OutputFormat::Table).unwrap(), "code  7\nname  x");
    }

    #[test]
    fn test_json_single() {
        let row = Pair { code: 7, name: "x" };
        let json: serde_json::Value =
            serde_json::from_str(&render_single(&row, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["code"], 7);
    }
}
