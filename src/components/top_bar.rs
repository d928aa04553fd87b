use leptos::prelude::*;

use crate::controller::use_recipe_finder;

/// Header with the sidebar toggle
#[component]
pub fn TopBar() -> impl IntoView {
    let finder = use_recipe_finder();

    view! {
        <header class="top-bar">
            <button
                id="menuToggle"
                class="menu-toggle"
                title="Menu"
                on:click=move |_| finder.toggle_sidebar(None)
            >
                <i class="fas fa-bars"></i>
            </button>
            <span class="brand">
                <i class="fas fa-utensils"></i>
                " Recipe Finder"
            </span>
        </header>
    }
}
