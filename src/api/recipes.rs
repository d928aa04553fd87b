//! Recipe Endpoints
//!
//! URL construction and body decoding for the two recipe endpoints.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::FetchError;
use crate::models::{RecipeDetail, RecipeSummary};

/// Same set as JavaScript's `encodeURIComponent`
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn search_url(api_base: &str, ingredients: &str) -> String {
    format!(
        "{}/api/recipes?ingredients={}",
        api_base,
        utf8_percent_encode(ingredients, COMPONENT_ENCODE_SET)
    )
}

pub fn recipe_url(api_base: &str, id: u64) -> String {
    format!("{}/api/recipes/{}", api_base, id)
}

pub fn decode_recipes(body: &str) -> Result<Option<Vec<RecipeSummary>>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

pub fn decode_recipe(body: &str) -> Result<RecipeDetail, FetchError> {
    Ok(serde_json::from_str(body)?)
}
