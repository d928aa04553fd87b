//! Recipe Details Page
//!
//! Header, summary, ingredient grid, instructions and source link of the
//! recipe last opened from the results.

use leptos::prelude::*;

use super::{page_class, FallbackImage};
use crate::controller::use_recipe_finder;
use crate::models::RecipeDetail;
use crate::nav::{NavigationStoreFields, Page};
use crate::render::{DetailModel, Instructions};
use crate::state::ViewStateStoreFields;

#[component]
pub fn DetailsPage() -> impl IntoView {
    let finder = use_recipe_finder();
    let active = move || finder.store.nav().page().get() == Page::Details;
    let details = Memo::new(move |_| finder.store.details().get());

    view! {
        <section id=Page::Details.element_id() class=move || page_class(active())>
            <button
                id="backToResults"
                class="back-btn"
                on:click=move |_| finder.show_page(Page::Results.as_str())
            >
                <i class="fas fa-arrow-left"></i>
                " Back to results"
            </button>
            <div id="recipe-details">
                {move || {
                    details
                        .get()
                        .map(|recipe| view! { <RecipeDetails recipe=recipe /> })
                }}
            </div>
        </section>
    }
}

#[component]
pub fn RecipeDetails(recipe: RecipeDetail) -> impl IntoView {
    let finder = use_recipe_finder();
    let detail = DetailModel::from(&recipe);

    let ingredients = match detail.ingredients {
        Some(lines) => lines
            .into_iter()
            .map(|line| view! {
                <div class="ingredient-item">
                    <i class="fas fa-check-circle"></i>
                    <span>{line}</span>
                </div>
            })
            .collect_view()
            .into_any(),
        None => view! { <p>"No ingredient information available."</p> }.into_any(),
    };

    let instructions = match detail.instructions {
        Instructions::Steps(steps) => view! {
            <ol class="instructions-list">
                {steps
                    .into_iter()
                    .map(|(number, text)| view! {
                        <li class="instruction-step">
                            <div class="step-number">{number}</div>
                            <div class="step-text">{text}</div>
                        </li>
                    })
                    .collect_view()}
            </ol>
        }
        .into_any(),
        Instructions::Text(lines) => {
            let count = lines.len();
            view! {
                <div class="instructions-text">
                    {lines
                        .into_iter()
                        .enumerate()
                        .map(|(i, line)| view! {
                            {line}
                            {(i + 1 < count).then(|| view! { <br /> })}
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
        Instructions::Missing => view! { <p>"No instructions available."</p> }.into_any(),
    };

    let title = detail.title;
    let alt = title.clone();

    view! {
        <div class="recipe-detail-card">
            <div class="detail-header">
                <FallbackImage
                    src=detail.image
                    alt=alt
                    placeholder=finder.config().detail_placeholder
                    img_class="detail-image"
                />
                <div class="detail-overlay">
                    <h1 class="detail-title">{title}</h1>
                    <div class="detail-meta">
                        <span>
                            <i class="fas fa-clock"></i>
                            {format!(" {} minutes", detail.minutes)}
                        </span>
                        <span>
                            <i class="fas fa-utensils"></i>
                            {format!(" {} servings", detail.servings)}
                        </span>
                        {detail.diets.map(|diets| view! {
                            <span>
                                <i class="fas fa-leaf"></i>
                                {format!(" {}", diets)}
                            </span>
                        })}
                    </div>
                </div>
            </div>

            <div class="detail-content">
                {detail.summary.map(|summary| view! {
                    <div class="detail-section">
                        <h3>"About this recipe"</h3>
                        <div>{summary}</div>
                    </div>
                })}

                <div class="detail-section">
                    <h3>"Ingredients"</h3>
                    <div class="ingredients-grid">{ingredients}</div>
                </div>

                <div class="detail-section">
                    <h3>"Instructions"</h3>
                    {instructions}
                </div>

                {detail.source_url.map(|url| view! {
                    <div class="detail-section">
                        <a href=url target="_blank" rel="noopener" class="source-link">
                            <i class="fas fa-external-link-alt"></i>
                            " View Original Recipe"
                        </a>
                    </div>
                })}
            </div>
        </div>
    }
}
