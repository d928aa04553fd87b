//! Ingredient Search Form
//!
//! Free-text ingredient field plus quick-tags for common ingredients.

use leptos::html;
use leptos::prelude::*;

use crate::controller::use_recipe_finder;
use crate::state::ViewStateStoreFields;

const POPULAR_INGREDIENTS: &[&str] = &[
    "chicken", "rice", "tomato", "cheese", "eggs", "pasta", "garlic", "potato",
];

#[component]
pub fn SearchForm() -> impl IntoView {
    let finder = use_recipe_finder();
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        finder.search_recipes();
    };

    let add_tag = move |name: &'static str| {
        finder.add_ingredient(name);
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    };

    view! {
        <div class="search-panel">
            <form id="ingredient-form" class="ingredient-form" on:submit=on_submit>
                <input
                    id="ingredients-input"
                    type="text"
                    placeholder="e.g. chicken, rice, tomato"
                    autocomplete="off"
                    node_ref=input_ref
                    prop:value=move || finder.store.ingredients_input().get()
                    on:input=move |ev| finder.set_ingredients_input(event_target_value(&ev))
                />
                <button type="submit" class="search-btn">
                    <i class="fas fa-search"></i>
                    " Find Recipes"
                </button>
            </form>

            <div class="popular-ingredients">
                <h3>"Popular ingredients"</h3>
                <div class="ingredient-tags">
                    {POPULAR_INGREDIENTS
                        .iter()
                        .map(|&name| view! {
                            <button
                                type="button"
                                class="ingredient-tag"
                                data-ingredient=name
                                on:click=move |_| add_tag(name)
                            >
                                {name}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
