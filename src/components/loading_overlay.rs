use leptos::prelude::*;

use crate::controller::use_recipe_finder;
use crate::state::ViewStateStoreFields;

/// Spinner shown while any request is outstanding
#[component]
pub fn LoadingOverlay() -> impl IntoView {
    let finder = use_recipe_finder();
    let loading_class = move || {
        if finder.store.in_flight().get() > 0 {
            "loading"
        } else {
            "loading hidden"
        }
    };

    view! {
        <div id="loading" class=loading_class>
            <div class="spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
