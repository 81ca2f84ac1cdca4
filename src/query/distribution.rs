use crate::error::{RecipeQueryError, Result};
use crate::model::{Field, FieldValue};
use crate::table::RecipeTable;
use std::collections::HashMap;

/// Count of rows per distinct value of one field.
///
/// Entries are ordered by descending count; equal counts keep the order in which
/// the values first appear in the table. `None` counts rows with no value, so the
/// counts always add up to the table length.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDistribution {
    field: Field,
    entries: Vec<(Option<String>, usize)>,
}

impl ValueDistribution {
    pub fn of(table: &RecipeTable, field: Field) -> Result<Self> {
        if field == Field::Ingredients {
            return Err(RecipeQueryError::TypeMismatchError {
                field: field.name(),
                detail: "list values cannot be counted".to_string(),
            });
        }

        let mut entries: Vec<(Option<String>, usize)> = Vec::new();
        let mut index: HashMap<Option<&str>, usize> = HashMap::new();

        for row in table {
            let key = match row.get(field) {
                FieldValue::Text(s) => Some(s),
                FieldValue::Missing => None,
                FieldValue::List(_) => {
                    return Err(RecipeQueryError::TypeMismatchError {
                        field: field.name(),
                        detail: format!("{} holds a list", row.original_url),
                    })
                }
            };

            match index.get(&key) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(key, entries.len());
                    entries.push((key.map(str::to_string), 1));
                }
            }
        }

        // sort_by is stable, so ties stay in first-seen order
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(ValueDistribution { field, entries })
    }

    pub fn field(&self) -> Field {
        self.field
    }

    pub fn entries(&self) -> &[(Option<String>, usize)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, value: Option<&str>) -> usize {
        self.entries
            .iter()
            .find(|(v, _)| v.as_deref() == value)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}
