//! Terminal rendering of reports and function listings.

use comfy_table::{presets::ASCII_FULL, ContentArrangement, Table};

use crate::logical_function::RegulatoryFunction;

/// Renders `headers` and `rows` as a bordered grid, one `+===+` rule under the header.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(headers.to_vec());
    for row in rows {
        table.add_row(row.clone());
    }
    table.to_string()
}

/// Listing of every function, each followed by a blank line.
pub fn describe_functions(functions: &[RegulatoryFunction]) -> String {
    functions
        .iter()
        .map(|f| format!("{}\n", f.describe(f.index())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_render_table() {
        let headers = strings(&["Function", "Gene1"]);
        let rows = vec![strings(&["Function 64", "1"]), strings(&["Function 200", "0"])];
        let text = render_table(&headers, &rows);
        let lines: Vec<&str> = text.lines().collect();

        // top border, header, header rule, then a row and a rule per row
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with('+') && lines[0].ends_with('+'));
        assert!(lines[0].contains('-'));
        assert!(lines[1].starts_with("| Function "));
        assert!(lines[1].contains("| Gene1 |"));
        assert!(lines[2].starts_with('+') && lines[2].contains('='));
        assert!(lines[3].starts_with("| Function 64 "));
        assert!(lines[5].starts_with("| Function 200 | 0 "));
        assert!(lines[6].starts_with('+') && lines[6].ends_with('+'));

        let width = lines[0].chars().count();
        assert!(lines.iter().all(|line| line.chars().count() == width));
    }

    #[test]
    fn test_render_empty_table() {
        let headers = strings(&["Function", "Gene1"]);
        let text = render_table(&headers, &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.len() >= 3);
        assert!(lines[0].starts_with('+'));
        assert_eq!(lines[1], "| Function | Gene1 |");
        assert!(lines.last().is_some_and(|line| line.starts_with('+') && line.ends_with('+')));
    }

    #[test]
    fn test_describe_functions() {
        let functions = vec![
            RegulatoryFunction::from_fn(0, |_| true),
            RegulatoryFunction::from_fn(511, |_| false),
        ];
        let text = describe_functions(&functions);
        assert!(text.starts_with("Function 0:\n  (None, None) -> 1\n"));
        assert!(text.contains("\n\nFunction 511:\n"));
        assert!(text.ends_with("  (All, All) -> 0\n\n"));
    }
}
