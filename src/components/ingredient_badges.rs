use leptos::prelude::*;

use crate::render::Badges;

/// Titled group of ingredient badges; renders nothing for an empty group
#[component]
pub fn IngredientBadges(
    heading: &'static str,
    section_class: &'static str,
    badges: Badges,
    #[prop(optional)] missing: bool,
) -> impl IntoView {
    if badges.is_empty() {
        return None;
    }
    let badge_class = if missing { "ingredient-badge missing" } else { "ingredient-badge" };
    let more = badges.more_label();

    Some(view! {
        <div class=section_class>
            <h4>{heading}</h4>
            <div class="ingredient-list">
                {badges
                    .names
                    .into_iter()
                    .map(|name| view! { <span class=badge_class>{name}</span> })
                    .collect_view()}
                {more.map(|label| view! { <span class=badge_class>{label}</span> })}
            </div>
        </div>
    })
}
