//! Browser Fetch Client

use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use super::{decode_recipe, decode_recipes, recipe_url, search_url, RecipeApi};
use crate::error::{AppError, FetchError};
use crate::models::{RecipeDetail, RecipeSummary};

/// `RecipeApi` over `window.fetch`
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRecipeApi {
    api_base: String,
}

impl HttpRecipeApi {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self { api_base: api_base.into() }
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        log::debug!("GET {}", url);
        let window = web_sys::window().ok_or_else(|| FetchError::Network("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method("GET");
        let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response.dyn_into().map_err(js_error)?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        body.as_string()
            .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))
    }
}

#[async_trait(?Send)]
impl RecipeApi for HttpRecipeApi {
    async fn search_recipes(&self, ingredients: &str) -> Result<Option<Vec<RecipeSummary>>, AppError> {
        let body = self.get_text(&search_url(&self.api_base, ingredients)).await?;
        Ok(decode_recipes(&body)?)
    }

    async fn get_recipe(&self, id: u64) -> Result<RecipeDetail, AppError> {
        let body = self.get_text(&recipe_url(&self.api_base, id)).await?;
        Ok(decode_recipe(&body)?)
    }
}

fn js_error(value: JsValue) -> FetchError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    FetchError::Network(message)
}
