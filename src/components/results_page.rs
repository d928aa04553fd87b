//! Results Page
//!
//! Cards for the latest search, or the no-results placeholder.

use leptos::prelude::*;

use super::{page_class, RecipeCardItem};
use crate::controller::use_recipe_finder;
use crate::nav::{NavigationStoreFields, Page};
use crate::state::ViewStateStoreFields;

#[component]
pub fn ResultsPage() -> impl IntoView {
    let finder = use_recipe_finder();
    let active = move || finder.store.nav().page().get() == Page::Results;

    // Request flows write the whole store; only a new list re-renders the grid
    let recipes = Memo::new(move |_| finder.store.current_recipes().get());

    let no_results_class = move || {
        if finder.store.no_results().get() {
            "no-results"
        } else {
            "no-results hidden"
        }
    };

    view! {
        <section id=Page::Results.element_id() class=move || page_class(active())>
            <div class="page-header">
                <h2>"Recipe Results"</h2>
                <p id="results-subtitle" class="results-subtitle">
                    {move || finder.store.results_subtitle().get().unwrap_or_default()}
                </p>
            </div>

            // Re-rendered wholesale on every search, in API order
            <div id="recipes-container" class="recipes-grid">
                {move || {
                    recipes
                        .get()
                        .into_iter()
                        .map(|recipe| view! { <RecipeCardItem recipe=recipe /> })
                        .collect_view()
                }}
            </div>

            <div id="no-results" class=no_results_class>
                <i class="fas fa-search"></i>
                <h3>"No recipes found"</h3>
                <p>"Try different or fewer ingredients."</p>
                <button class="cta-btn" data-page="home" on:click=move |_| finder.show_page("home")>
                    "New Search"
                </button>
            </div>
        </section>
    }
}
