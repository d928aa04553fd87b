//! Ingredient Input Helpers
//!
//! The search field holds free text; ingredients are its comma-separated,
//! trimmed, non-empty segments.

/// Split free text into trimmed, non-empty ingredient names
pub fn split_ingredients(input: &str) -> Vec<&str> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Append a quick-tag unless an identical entry is already present.
/// Returns the new field text.
pub fn add_ingredient(input: &str, ingredient: &str) -> String {
    let current = split_ingredients(input);
    if current.iter().any(|existing| *existing == ingredient) {
        return input.to_string();
    }
    if current.is_empty() {
        return ingredient.to_string();
    }
    let mut merged = current;
    merged.push(ingredient);
    merged.join(", ")
}

/// Trimmed query text, or `None` when there is nothing to search for
pub fn normalize_query(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
