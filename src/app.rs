//! Recipe Finder App
//!
//! Root component: creates the controller, provides it to every view, and
//! runs the effects that reach outside the view tree (alerts, scrolling).

use leptos::prelude::*;

use crate::components::{DetailsPage, HomePage, LoadingOverlay, ResultsPage, Sidebar, TopBar};
use crate::config::AppConfig;
use crate::controller::RecipeFinder;
use crate::state::ViewStateStoreFields;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    log::info!("Using recipe API at {:?}", config.api_base);
    let finder = RecipeFinder::new(config);
    provide_context(finder);

    // Blocking notices, one at a time
    Effect::new(move |_| {
        if finder.store.notice().get().is_none() {
            return;
        }
        if let Some(message) = finder.take_notice() {
            let _ = window().alert_with_message(&message);
        }
    });

    // Every navigation starts at the top of the page
    let scroll = finder.scroll_requests();
    Effect::new(move |_| {
        scroll.track();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });

    view! {
        <div class="app-layout">
            <TopBar />
            <Sidebar />
            <main class="main-content">
                <HomePage />
                <ResultsPage />
                <DetailsPage />
            </main>
            <LoadingOverlay />
        </div>
    }
}
