use crate::error::{RecipeQueryError, Result};
use crate::model::{Ingredients, Recipe};
use crate::table::RecipeTable;
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Load a recipe file into a table.
///
/// The file is a JSON object mapping each source URL to a record with `Title`,
/// `Total_Time_Raw` and `Ingredients`. Rows keep the file's key order.
///
/// # Errors
/// - `NotFoundError` if nothing exists at `path`
/// - `ParseError` if the file is not UTF-8 JSON of the expected shape
pub fn load_table(path: impl AsRef<Path>) -> Result<RecipeTable> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(RecipeQueryError::NotFoundError {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => RecipeQueryError::NotFoundError {
            path: path.to_path_buf(),
        },
        ErrorKind::InvalidData => {
            RecipeQueryError::ParseError(format!("{} is not valid UTF-8", path.display()))
        }
        _ => RecipeQueryError::IoError(e),
    })?;

    let table = parse_table(&content)?;
    info!("Loaded {} recipes from {}", table.len(), path.display());
    Ok(table)
}

/// Parse recipe JSON that is already in memory
pub fn parse_table(content: &str) -> Result<RecipeTable> {
    let root: Value = serde_json::from_str(content)
        .map_err(|e| RecipeQueryError::ParseError(format!("invalid JSON: {}", e)))?;

    let Value::Object(records) = root else {
        return Err(RecipeQueryError::ParseError(
            "expected an object mapping URL to recipe".to_string(),
        ));
    };

    let rows = records
        .into_iter()
        .map(|(url, record)| parse_record(url, record))
        .collect::<Result<Vec<_>>>()?;

    Ok(RecipeTable::new(rows))
}

fn parse_record(url: String, record: Value) -> Result<Recipe> {
    let Value::Object(mut fields) = record else {
        return Err(RecipeQueryError::ParseError(format!(
            "record for {} is not an object",
            url
        )));
    };

    let title = optional_string(&mut fields, "Title", &url)?;
    let total_time_raw = optional_string(&mut fields, "Total_Time_Raw", &url)?;

    // Like the scalar columns, a missing key reads as `null`
    let raw_ingredients = fields.remove("Ingredients").unwrap_or(Value::Null);
    let ingredients: Ingredients = serde_json::from_value(raw_ingredients)
        .map_err(|e| RecipeQueryError::ParseError(format!("Ingredients of {}: {}", url, e)))?;

    if ingredients.as_list().is_none() {
        debug!("Ingredients of {} is not a list of strings", url);
    }

    Ok(Recipe::new(url, title, total_time_raw, ingredients))
}

/// A missing key reads the same as `null`
fn optional_string(fields: &mut Map<String, Value>, key: &str, url: &str) -> Result<Option<String>> {
    match fields.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(RecipeQueryError::ParseError(format!(
            "{} of {} should be a string, found {}",
            key, url, other
        ))),
    }
}
