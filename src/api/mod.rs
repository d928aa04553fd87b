//! Recipe API Bindings
//!
//! Frontend access to the backend recipe endpoints, behind a trait so the
//! request flows can run against a stand-in.

mod http;
mod recipes;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{RecipeDetail, RecipeSummary};

pub use http::HttpRecipeApi;
pub use recipes::*;

#[async_trait(?Send)]
pub trait RecipeApi {
    /// `GET /api/recipes?ingredients=...`; a `null` body yields `None`
    async fn search_recipes(&self, ingredients: &str) -> Result<Option<Vec<RecipeSummary>>, AppError>;

    /// `GET /api/recipes/{id}`
    async fn get_recipe(&self, id: u64) -> Result<RecipeDetail, AppError>;
}
