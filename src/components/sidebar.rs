//! Sidebar Navigation
//!
//! Slide-in menu with one entry per page that has a nav marker. Picking an
//! entry navigates and closes the menu in the same click.

use leptos::prelude::*;

use crate::controller::use_recipe_finder;
use crate::nav::{NavigationStoreFields, Page};
use crate::state::ViewStateStoreFields;

#[component]
pub fn Sidebar() -> impl IntoView {
    let finder = use_recipe_finder();

    let sidebar_class = move || {
        if finder.store.nav().sidebar_open().get() {
            "sidebar active"
        } else {
            "sidebar"
        }
    };

    view! {
        <aside id="sidebar" class=sidebar_class>
            <button
                id="closeSidebar"
                class="close-sidebar"
                title="Close"
                on:click=move |_| finder.toggle_sidebar(None)
            >
                "×"
            </button>
            <nav class="nav-list">
                {Page::ALL
                    .into_iter()
                    .filter_map(|page| page.nav_label().map(|label| (page, label)))
                    .map(|(page, label)| {
                        let item_class = move || {
                            if finder.store.nav().page().get() == page { "nav-item active" } else { "nav-item" }
                        };
                        view! {
                            <a
                                href="#"
                                class=item_class
                                data-page=page.as_str()
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    finder.select_nav_entry(page.as_str());
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
