//! Console rendering of tables and query results.

/// Shortest round-trip form, keeping `.0` on integral values (`80.0`, `346.34`).
pub fn format_float(v: f64) -> String {
    format!("{v:?}")
}

/// Renders rows under a header with a leading zero-based index column.
/// Every column is right-aligned to its widest cell.
pub fn render_table(columns: &[String], rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return format!("Empty table\nColumns: [{}]\n", columns.join(", "));
    }

    let index_width = (rows.len() - 1).to_string().len();
    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .chain(std::iter::once(col.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&" ".repeat(index_width));
    for (col, width) in columns.iter().zip(&widths) {
        out.push_str(&format!("  {col:>width$}"));
    }
    out.push('\n');

    for (idx, row) in rows.iter().enumerate() {
        out.push_str(&format!("{idx:<index_width$}"));
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            out.push_str(&format!("  {cell:>width$}"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(80.0), "80.0");
        assert_eq!(format_float(346.34), "346.34");
        assert_eq!(format_float(35910.71), "35910.71");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let columns = vec!["Name".to_string()];
        let rows = vec![vec!["JPMorgan Chase".to_string()], vec!["HSBC".to_string()]];
        let out = render_table(&columns, &rows);
        assert_eq!(
            out,
            "             Name\n0  JPMorgan Chase\n1            HSBC\n"
        );
    }

    #[test]
    fn test_render_empty_table() {
        let out = render_table(&["Name".to_string(), "MC_USD_Billion".to_string()], &[]);
        assert_eq!(out, "Empty table\nColumns: [Name, MC_USD_Billion]\n");
    }
}
