use leptos::prelude::*;

use super::{page_class, SearchForm};
use crate::controller::use_recipe_finder;
use crate::nav::{NavigationStoreFields, Page};
use crate::state::ViewStateStoreFields;

/// Landing page with the search form
#[component]
pub fn HomePage() -> impl IntoView {
    let finder = use_recipe_finder();
    let active = move || finder.store.nav().page().get() == Page::Home;

    view! {
        <section id=Page::Home.element_id() class=move || page_class(active())>
            <div class="hero">
                <h1>"What's in your kitchen?"</h1>
                <p class="hero-subtitle">
                    "Enter the ingredients you have and find recipes you can cook right now."
                </p>
                <SearchForm />
            </div>
        </section>
    }
}
