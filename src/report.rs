//! Plain-text rendering of query results for the terminal.

use crate::config::{combine_criteria, ReportQuery};
use crate::error::Result;
use crate::model::Field;
use crate::query::ValueDistribution;
use crate::table::RecipeTable;
use log::debug;

/// Longer cells are cut and end in "..."
const MAX_CELL_WIDTH: usize = 50;

/// Run one configured query and render its section of the report
pub fn run_query(table: &RecipeTable, query: &ReportQuery, preview_rows: usize) -> Result<String> {
    match query {
        ReportQuery::Distribution { label, field } => {
            let dist = ValueDistribution::of(table, field.parse()?)?;
            debug!("{}: {} distinct values", label, dist.len());
            Ok(format!("[{}]\n{}", label, render_distribution(&dist)))
        }
        ReportQuery::Filter {
            label,
            criteria,
            columns,
            limit,
            show_all,
        } => {
            let predicate = combine_criteria(label, criteria)?;
            let columns = columns
                .iter()
                .map(|name| name.parse())
                .collect::<Result<Vec<Field>>>()?;

            let found = table.filter(&predicate)?;
            debug!("{}: {} of {} rows matched", label, found.len(), table.len());

            let shown = if *show_all {
                found.len()
            } else {
                limit.unwrap_or(preview_rows)
            };

            Ok(format!(
                "[{}] {} recipes\n{}",
                label,
                found.len(),
                render_table(&found, &columns, shown)
            ))
        }
    }
}

/// Header printed once after loading
pub fn render_summary(table: &RecipeTable, preview_rows: usize) -> String {
    format!(
        "--- Loaded {} recipes ---\n{}",
        table.len(),
        render_table(
            table,
            &[Field::Title, Field::TotalTimeRaw, Field::TotalTimeClean],
            preview_rows
        )
    )
}

/// Render up to `limit` rows as left-aligned columns
pub fn render_table(table: &RecipeTable, columns: &[Field], limit: usize) -> String {
    if table.is_empty() {
        return "(no matching recipes)\n".to_string();
    }

    let header: Vec<String> = columns.iter().map(|f| f.name().to_string()).collect();
    let body: Vec<Vec<String>> = table
        .head(limit)
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|field| truncate(&row.get(*field).to_string()))
                .collect()
        })
        .collect();

    let mut out = render_grid(&header, &body);
    if table.len() > limit {
        out.push_str(&format!("... {} more\n", table.len() - limit));
    }
    out
}

pub fn render_distribution(dist: &ValueDistribution) -> String {
    if dist.is_empty() {
        return "(no rows)\n".to_string();
    }

    let header = vec![dist.field().name().to_string(), "count".to_string()];
    let body: Vec<Vec<String>> = dist
        .entries()
        .iter()
        .map(|(value, count)| {
            let value = value.as_deref().unwrap_or("(missing)");
            vec![truncate(value), count.to_string()]
        })
        .collect();

    let mut out = render_grid(&header, &body);
    out.push_str(&format!("Total: {}\n", dist.total()));
    out
}

fn render_grid(header: &[String], body: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(header).chain(body.iter().map(Vec::as_slice)) {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }
    out
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() <= MAX_CELL_WIDTH {
        return cell.to_string();
    }
    let kept: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
    format!("{}...", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Criterion;
    use crate::loader::parse_table;

    fn sample() -> RecipeTable {
        parse_table(
            r#"{
                "http://a": {"Title": "Kale Pear Smoothie", "Total_Time_Raw": "PT5M", "Ingredients": ["kale", "pear"]},
                "http://b": {"Title": "Salmon Bowl", "Total_Time_Raw": "PT20M", "Ingredients": ["salmon"]},
                "http://c": {"Title": null, "Total_Time_Raw": "PT5M", "Ingredients": ["salmon", "kale"]}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let out = render_table(&sample(), &[Field::Title, Field::TotalTimeRaw], 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Title               TotalTimeRaw");
        assert_eq!(lines[1], "Kale Pear Smoothie  PT5M");
        assert_eq!(lines[3], "-                   PT5M");
    }

    #[test]
    fn test_render_table_limit() {
        let out = render_table(&sample(), &[Field::OriginalUrl], 1);
        assert!(out.contains("http://a"));
        assert!(!out.contains("http://b"));
        assert!(out.ends_with("... 2 more\n"));
    }

    #[test]
    fn test_render_empty_table() {
        let out = render_table(&RecipeTable::default(), &[Field::Title], 5);
        assert_eq!(out, "(no matching recipes)\n");
    }

    #[test]
    fn test_truncate_long_cells() {
        let long = "x".repeat(80);
        let cut = truncate(&long);
        assert_eq!(cut.chars().count(), MAX_CELL_WIDTH);
        assert!(cut.ends_with("..."));
        assert_eq!(truncate("short"), "short");
    }

    #[test]
    fn test_render_distribution() {
        let dist = ValueDistribution::of(&sample(), Field::TotalTimeRaw).unwrap();
        let out = render_distribution(&dist);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "TotalTimeRaw  count");
        assert_eq!(lines[1], "PT5M          2");
        assert_eq!(lines[2], "PT20M         1");
        assert_eq!(lines[3], "Total: 3");
    }

    #[test]
    fn test_run_filter_query() {
        let query = ReportQuery::Filter {
            label: "Salmon".to_string(),
            criteria: vec![Criterion::IngredientContains {
                keyword: "SALMON".to_string(),
            }],
            columns: vec!["OriginalURL".to_string()],
            limit: None,
            show_all: false,
        };

        let out = run_query(&sample(), &query, 5).unwrap();
        assert!(out.starts_with("[Salmon] 2 recipes\n"));
        assert!(out.contains("http://b"));
        assert!(out.contains("http://c"));
    }

    #[test]
    fn test_run_filter_query_show_all_ignores_limit() {
        let query = ReportQuery::Filter {
            label: "Everything".to_string(),
            criteria: vec![Criterion::TitleContains {
                text: String::new(),
            }],
            columns: vec!["OriginalURL".to_string()],
            limit: Some(1),
            show_all: true,
        };

        let out = run_query(&sample(), &query, 1).unwrap();
        assert!(out.starts_with("[Everything] 2 recipes\n"));
        assert!(out.contains("http://a"));
        assert!(out.contains("http://b"));
        assert!(!out.contains("more"));
    }

    #[test]
    fn test_run_query_unknown_column() {
        let query = ReportQuery::Filter {
            label: "Bad".to_string(),
            criteria: vec![Criterion::TitleContains {
                text: "x".to_string(),
            }],
            columns: vec!["Calories".to_string()],
            limit: None,
            show_all: false,
        };
        assert!(run_query(&sample(), &query, 5).is_err());
    }

    #[test]
    fn test_summary_header() {
        let out = render_summary(&sample(), 2);
        assert!(out.starts_with("--- Loaded 3 recipes ---\n"));
        assert!(out.contains("TotalTimeClean"));
        assert!(out.contains("5M"));
    }
}
