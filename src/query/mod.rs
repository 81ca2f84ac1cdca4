//! Predicates over the recipe table and the one-shot query functions built on them.

mod distribution;
mod text;

pub use distribution::ValueDistribution;

use crate::error::{RecipeQueryError, Result};
use crate::model::{Field, FieldValue, Recipe};
use crate::table::RecipeTable;
use text::{contains_ignore_case, contains_lowered};

/// A filter over recipe rows
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// At least one ingredient contains the keyword, ignoring case
    IngredientContains(String),
    /// Every keyword occurs in the rendered ingredient list, ignoring case.
    ///
    /// The list is matched as one string (see [`Ingredients::render`]), so a keyword
    /// may span two items or the separator between them.
    ///
    /// [`Ingredients::render`]: crate::model::Ingredients::render
    IngredientsContainAll(Vec<String>),
    /// The title contains the text, ignoring case. Rows without a title never match.
    TitleContains(String),
    /// The field's value is exactly one of `values`
    FieldIn { field: Field, values: Vec<String> },
    And(Box<Predicate>, Box<Predicate>),
}

impl Predicate {
    pub fn ingredient_contains(keyword: impl Into<String>) -> Self {
        Predicate::IngredientContains(keyword.into())
    }

    pub fn ingredients_contain_all<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Predicate::IngredientsContainAll(keywords.into_iter().map(Into::into).collect())
    }

    pub fn title_contains(text: impl Into<String>) -> Self {
        Predicate::TitleContains(text.into())
    }

    /// Membership test on a named field. Fails with `FieldNotFoundError` for
    /// names outside the table schema.
    pub fn field_in<I, S>(field: &str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Predicate::FieldIn {
            field: field.parse()?,
            values: values.into_iter().map(Into::into).collect(),
        })
    }

    pub fn and(self, other: Predicate) -> Self {
        Predicate::And(Box::new(self), Box::new(other))
    }

    /// Evaluate against one row.
    ///
    /// Ingredient predicates fail with `TypeMismatchError` on rows whose ingredients
    /// are not a list of strings. `And` does not evaluate its right side for rows
    /// the left side rejects.
    pub fn matches(&self, row: &Recipe) -> Result<bool> {
        match self {
            Predicate::IngredientContains(keyword) => {
                let items = ingredient_list(row)?;
                let needle = keyword.to_lowercase();
                Ok(items.iter().any(|item| contains_lowered(item, &needle)))
            }
            Predicate::IngredientsContainAll(keywords) => {
                ingredient_list(row)?;
                let rendered = row.ingredients.render().to_lowercase();
                Ok(keywords
                    .iter()
                    .all(|keyword| rendered.contains(&keyword.to_lowercase())))
            }
            Predicate::TitleContains(text) => Ok(title_matches(row, text)),
            Predicate::FieldIn { field, values } => Ok(match row.get(*field) {
                FieldValue::Text(value) => values.iter().any(|v| v == value),
                FieldValue::Missing | FieldValue::List(_) => false,
            }),
            Predicate::And(lhs, rhs) => Ok(lhs.matches(row)? && rhs.matches(row)?),
        }
    }
}

fn ingredient_list(row: &Recipe) -> Result<&[String]> {
    row.ingredients
        .as_list()
        .ok_or_else(|| RecipeQueryError::TypeMismatchError {
            field: Field::Ingredients.name(),
            detail: format!("{} is not a list of strings", row.original_url),
        })
}

fn title_matches(row: &Recipe, text: &str) -> bool {
    row.title
        .as_deref()
        .is_some_and(|title| contains_ignore_case(title, text))
}

/// Rows with at least one ingredient containing `keyword`
pub fn ingredient_contains(table: &RecipeTable, keyword: &str) -> Result<RecipeTable> {
    table.filter(&Predicate::ingredient_contains(keyword))
}

/// Rows whose rendered ingredient list contains every keyword
pub fn ingredients_contain_all<S: AsRef<str>>(
    table: &RecipeTable,
    keywords: &[S],
) -> Result<RecipeTable> {
    table.filter(&Predicate::ingredients_contain_all(
        keywords.iter().map(|k| k.as_ref()),
    ))
}

/// Rows whose title contains `text`. Untitled rows are skipped, never an error.
pub fn title_contains(table: &RecipeTable, text: &str) -> RecipeTable {
    table.select(|row| title_matches(row, text))
}

/// Rows whose `field` value is one of `values`
pub fn field_in<S: AsRef<str>>(
    table: &RecipeTable,
    field: &str,
    values: &[S],
) -> Result<RecipeTable> {
    table.filter(&Predicate::field_in(
        field,
        values.iter().map(|v| v.as_ref()),
    )?)
}

/// Rows matching both predicates
pub fn conjunction(table: &RecipeTable, lhs: &Predicate, rhs: &Predicate) -> Result<RecipeTable> {
    table.filter(&lhs.clone().and(rhs.clone()))
}

/// Row counts per distinct value of `field`
pub fn value_distribution(table: &RecipeTable, field: &str) -> Result<ValueDistribution> {
    ValueDistribution::of(table, field.parse()?)
}
