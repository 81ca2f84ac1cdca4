use crate::error::{RecipeQueryError, Result};
use crate::query::Predicate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the scraped recipe JSON file
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
    /// Rows shown per query when the query sets no limit
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    /// Queries to run, in order
    #[serde(default = "default_queries")]
    pub queries: Vec<ReportQuery>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            preview_rows: default_preview_rows(),
            queries: default_queries(),
        }
    }
}

/// One section of the printed report
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportQuery {
    /// Count rows per distinct value of a field
    Distribution { label: String, field: String },
    /// Print the rows matching every criterion
    Filter {
        label: String,
        criteria: Vec<Criterion>,
        #[serde(default = "default_columns")]
        columns: Vec<String>,
        /// Overrides `preview_rows` for this query
        #[serde(default)]
        limit: Option<usize>,
        /// Print every matching row, ignoring `limit` and `preview_rows`
        #[serde(default)]
        show_all: bool,
    },
}

impl ReportQuery {
    pub fn label(&self) -> &str {
        match self {
            ReportQuery::Distribution { label, .. } | ReportQuery::Filter { label, .. } => label,
        }
    }
}

/// A single filter condition as written in the config file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Criterion {
    IngredientContains { keyword: String },
    IngredientsContainAll { keywords: Vec<String> },
    TitleContains { text: String },
    FieldIn { field: String, values: Vec<String> },
}

impl Criterion {
    pub fn to_predicate(&self) -> Result<Predicate> {
        match self {
            Criterion::IngredientContains { keyword } => {
                Ok(Predicate::ingredient_contains(keyword.as_str()))
            }
            Criterion::IngredientsContainAll { keywords } => {
                Ok(Predicate::ingredients_contain_all(keywords.iter().cloned()))
            }
            Criterion::TitleContains { text } => Ok(Predicate::title_contains(text.as_str())),
            Criterion::FieldIn { field, values } => {
                Predicate::field_in(field, values.iter().cloned())
            }
        }
    }
}

/// Combine criteria into one predicate by conjunction
pub fn combine_criteria(label: &str, criteria: &[Criterion]) -> Result<Predicate> {
    let mut predicates = criteria.iter().map(Criterion::to_predicate);
    let first = predicates.next().ok_or_else(|| {
        RecipeQueryError::ConfigError(ConfigError::Message(format!(
            "filter query '{}' has no criteria",
            label
        )))
    })??;

    predicates.try_fold(first, |acc, next| -> Result<Predicate> { Ok(acc.and(next?)) })
}

// Default value functions
fn default_data_path() -> PathBuf {
    PathBuf::from("data/eatingwell_quick_easy_recipes_full.json")
}

fn default_preview_rows() -> usize {
    5
}

fn default_columns() -> Vec<String> {
    vec![
        "Title".to_string(),
        "TotalTimeRaw".to_string(),
        "OriginalURL".to_string(),
    ]
}

fn default_queries() -> Vec<ReportQuery> {
    vec![
        ReportQuery::Distribution {
            label: "Total time distribution (raw)".to_string(),
            field: "TotalTimeRaw".to_string(),
        },
        ReportQuery::Filter {
            label: "Recipes containing 'salmon'".to_string(),
            criteria: vec![Criterion::IngredientContains {
                keyword: "salmon".to_string(),
            }],
            columns: default_columns(),
            limit: None,
            show_all: false,
        },
        ReportQuery::Filter {
            label: "Recipes containing both 'kale' and 'pear'".to_string(),
            criteria: vec![Criterion::IngredientsContainAll {
                keywords: vec!["kale".to_string(), "pear".to_string()],
            }],
            columns: default_columns(),
            limit: None,
            show_all: true,
        },
        ReportQuery::Filter {
            label: "Quick smoothies (5 or 10 minutes)".to_string(),
            criteria: vec![
                Criterion::TitleContains {
                    text: "Smoothie".to_string(),
                },
                Criterion::FieldIn {
                    field: "TotalTimeRaw".to_string(),
                    values: vec!["PT5M".to_string(), "PT10M".to_string()],
                },
            ],
            columns: default_columns(),
            limit: None,
            show_all: false,
        },
        ReportQuery::Filter {
            label: "Recipes containing 'chickpea'".to_string(),
            criteria: vec![Criterion::IngredientContains {
                keyword: "chickpea".to_string(),
            }],
            columns: vec![
                "Title".to_string(),
                "TotalTimeClean".to_string(),
                "OriginalURL".to_string(),
            ],
            limit: Some(10),
            show_all: false,
        },
    ]
}

/// Load configuration from file and environment variables
///
/// Configuration is loaded with the following priority (highest to lowest):
/// 1. Environment variables with RECIPE_QUERY__ prefix
/// 2. The given config file, or recipe-query.toml in the current directory
/// 3. Default values
///
/// Environment variable format: RECIPE_QUERY__DATA_PATH
pub fn load_config(path: Option<&Path>) -> std::result::Result<AppConfig, ConfigError> {
    let file = match path {
        // An explicitly named file must exist
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-query").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix("RECIPE_QUERY")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
