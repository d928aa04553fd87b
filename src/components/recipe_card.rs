//! Recipe Card Component
//!
//! One search result. Clicking the card (or pressing Enter/Space on it)
//! opens the recipe's details.

use leptos::prelude::*;

use super::{FallbackImage, IngredientBadges};
use crate::controller::use_recipe_finder;
use crate::models::RecipeSummary;
use crate::render::CardModel;

#[component]
pub fn RecipeCardItem(recipe: RecipeSummary) -> impl IntoView {
    let finder = use_recipe_finder();
    let card = CardModel::from(&recipe);
    let id = card.id;
    let title = card.title;
    let alt = title.clone();

    let open = move || match id {
        Some(id) => finder.show_recipe_details(id),
        None => log::warn!("Recipe card without id cannot open details"),
    };

    view! {
        <div
            class="recipe-card"
            role="button"
            tabindex="0"
            on:click=move |_| open()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    open();
                }
            }
        >
            <FallbackImage
                src=card.image
                alt=alt
                placeholder=finder.config().card_placeholder
                img_class="recipe-image"
            />
            <div class="recipe-info">
                <h3 class="recipe-title">{title}</h3>
                <div class="recipe-meta">
                    <span>
                        <i class="fas fa-clock"></i>
                        {format!(" {} min", card.minutes)}
                    </span>
                    <span>
                        <i class="fas fa-check-circle"></i>
                        {format!(" {} ingredients", card.used_count)}
                    </span>
                </div>
                <IngredientBadges
                    heading="Used Ingredients"
                    section_class="used-ingredients"
                    badges=card.used
                />
                <IngredientBadges
                    heading="Missing Ingredients"
                    section_class="missing-ingredients"
                    badges=card.missed
                    missing=true
                />
            </div>
        </div>
    }
}
