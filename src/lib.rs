pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod report;
pub mod table;

// Re-export commonly used types
pub use crate::config::{load_config, AppConfig, Criterion, ReportQuery};
pub use error::{RecipeQueryError, Result};
pub use loader::{load_table, parse_table};
pub use model::{Field, FieldValue, Ingredients, Recipe};
pub use query::{
    conjunction, field_in, ingredient_contains, ingredients_contain_all, title_contains,
    value_distribution, Predicate, ValueDistribution,
};
pub use table::RecipeTable;

use log::info;

/// Load the configured recipe file and render every configured query.
///
/// Returns the full report text; sections appear in configuration order.
pub fn run_report(config: &AppConfig) -> Result<String> {
    let table = load_table(&config.data_path)?;

    let mut sections = vec![report::render_summary(&table, config.preview_rows)];
    for query in &config.queries {
        info!("Running query: {}", query.label());
        sections.push(report::run_query(&table, query, config.preview_rows)?);
    }

    Ok(sections.join("\n"))
}
