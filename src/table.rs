use crate::error::Result;
use crate::model::Recipe;
use crate::query::Predicate;

/// An immutable table of recipe rows.
///
/// Every query returns a new table; rows keep the order they were loaded in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeTable {
    rows: Vec<Recipe>,
}

impl RecipeTable {
    pub fn new(rows: Vec<Recipe>) -> Self {
        RecipeTable { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Recipe] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.rows.iter()
    }

    /// The first `n` rows
    pub fn head(&self, n: usize) -> RecipeTable {
        RecipeTable::new(self.rows.iter().take(n).cloned().collect())
    }

    /// Rows matching `predicate`, in table order.
    ///
    /// Stops at the first row the predicate cannot be evaluated on.
    pub fn filter(&self, predicate: &Predicate) -> Result<RecipeTable> {
        let mut kept = Vec::new();
        for row in &self.rows {
            if predicate.matches(row)? {
                kept.push(row.clone());
            }
        }
        Ok(RecipeTable::new(kept))
    }

    pub(crate) fn select(&self, mut keep: impl FnMut(&Recipe) -> bool) -> RecipeTable {
        RecipeTable::new(self.rows.iter().filter(|row| keep(row)).cloned().collect())
    }
}

impl<'a> IntoIterator for &'a RecipeTable {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
