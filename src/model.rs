use crate::error::RecipeQueryError;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// One recipe row of the flattened table
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Source page URL, unique across the table
    pub original_url: String,
    pub title: Option<String>,
    /// Duration as scraped, e.g. "PT10M"
    pub total_time_raw: Option<String>,
    /// `total_time_raw` without its "PT" prefix
    pub total_time_clean: Option<String>,
    pub ingredients: Ingredients,
}

impl Recipe {
    pub fn new(
        original_url: impl Into<String>,
        title: Option<String>,
        total_time_raw: Option<String>,
        ingredients: Ingredients,
    ) -> Self {
        let total_time_clean = total_time_raw.as_deref().map(clean_total_time);
        Recipe {
            original_url: original_url.into(),
            title,
            total_time_raw,
            total_time_clean,
            ingredients,
        }
    }

    /// Look up a column of this row
    pub fn get(&self, field: Field) -> FieldValue<'_> {
        fn text(value: &Option<String>) -> FieldValue<'_> {
            match value {
                Some(s) => FieldValue::Text(s),
                None => FieldValue::Missing,
            }
        }

        match field {
            Field::OriginalUrl => FieldValue::Text(&self.original_url),
            Field::Title => text(&self.title),
            Field::TotalTimeRaw => text(&self.total_time_raw),
            Field::TotalTimeClean => text(&self.total_time_clean),
            Field::Ingredients => FieldValue::List(&self.ingredients),
        }
    }
}

/// Strip the literal "PT" prefix from a duration. The unit suffix is kept as-is,
/// so "PT1H" becomes "1H".
pub fn clean_total_time(raw: &str) -> String {
    raw.strip_prefix("PT").unwrap_or(raw).to_string()
}

/// The `Ingredients` cell of a row.
///
/// Records whose ingredients are not a list of strings still load; the raw value
/// is kept so ingredient queries can report the mismatch for that row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Ingredients {
    List(Vec<String>),
    Other(Value),
}

impl Ingredients {
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Ingredients::List(items) => Some(items),
            Ingredients::Other(_) => None,
        }
    }

    /// Render the list as one string: `['2 cups kale', '1 pear']`.
    ///
    /// Items are quoted and comma separated, so a substring search over the
    /// rendered form can match across item boundaries.
    pub fn render(&self) -> String {
        match self {
            Ingredients::List(items) => {
                let quoted: Vec<String> = items.iter().map(|item| quote_item(item)).collect();
                format!("[{}]", quoted.join(", "))
            }
            Ingredients::Other(value) => value.to_string(),
        }
    }
}

fn quote_item(item: &str) -> String {
    let quote = if item.contains('\'') && !item.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(item.len() + 2);
    out.push(quote);
    for c in item.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Columns of the recipe table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OriginalUrl,
    Title,
    TotalTimeRaw,
    TotalTimeClean,
    Ingredients,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::OriginalUrl,
        Field::Title,
        Field::TotalTimeRaw,
        Field::TotalTimeClean,
        Field::Ingredients,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::OriginalUrl => "OriginalURL",
            Field::Title => "Title",
            Field::TotalTimeRaw => "TotalTimeRaw",
            Field::TotalTimeClean => "TotalTimeClean",
            Field::Ingredients => "Ingredients",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = RecipeQueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Source file spellings are accepted alongside the table names
        match s {
            "OriginalURL" | "Original_URL" => Ok(Field::OriginalUrl),
            "Title" => Ok(Field::Title),
            "TotalTimeRaw" | "Total_Time_Raw" => Ok(Field::TotalTimeRaw),
            "TotalTimeClean" | "Total_Time_Clean" => Ok(Field::TotalTimeClean),
            "Ingredients" => Ok(Field::Ingredients),
            _ => Err(RecipeQueryError::FieldNotFoundError(s.to_string())),
        }
    }
}

/// A borrowed view of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Missing,
    List(&'a Ingredients),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Missing => f.write_str("-"),
            FieldValue::List(ingredients) => f.write_str(&ingredients.render()),
        }
    }
}
