//! UI Components
//!
//! Leptos views over the shared `RecipeFinder` store.

mod top_bar;
mod sidebar;
mod search_form;
mod home_page;
mod results_page;
mod recipe_card;
mod ingredient_badges;
mod fallback_image;
mod details_page;
mod loading_overlay;

pub use top_bar::TopBar;
pub use sidebar::Sidebar;
pub use search_form::SearchForm;
pub use home_page::HomePage;
pub use results_page::ResultsPage;
pub use recipe_card::RecipeCardItem;
pub use ingredient_badges::IngredientBadges;
pub use fallback_image::FallbackImage;
pub use details_page::DetailsPage;
pub use loading_overlay::LoadingOverlay;

/// Class list of a page container
pub(crate) fn page_class(active: bool) -> &'static str {
    if active {
        "page active"
    } else {
        "page"
    }
}
