//! Recipe Finder Controller
//!
//! The application object: owns the state store and the API client, and
//! turns user actions into state transitions and requests.

use std::cell::RefCell;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{HttpRecipeApi, RecipeApi};
use crate::config::AppConfig;
use crate::ingredients;
use crate::nav::NavigationStoreFields;
use crate::state::{ViewState, ViewStateStoreFields};

/// Mutable access to the view state, however it is stored.
///
/// On a `Store` this writes the root and wakes every field subscriber, so it
/// is reserved for the request flows that touch many fields at once.
pub trait ViewStateHandle {
    /// `None` when the state is gone (its owner was disposed)
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;
}

impl ViewStateHandle for Store<ViewState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl ViewStateHandle for RefCell<ViewState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Search with whatever is in the ingredient field
pub async fn search_recipes<A, H>(api: &A, state: &H)
where
    A: RecipeApi + ?Sized,
    H: ViewStateHandle + ?Sized,
{
    let ticket = match state.with_state(|s| s.begin_search()) {
        Some(Ok(ticket)) => ticket,
        Some(Err(err)) => {
            log::warn!("Search rejected: {}", err);
            return;
        }
        None => return,
    };
    log::info!("Searching recipes for {:?}", ticket.query);
    let result = api.search_recipes(&ticket.query).await;
    state.with_state(|s| s.finish_search(&ticket, result));
}

/// Fetch one recipe and open the details page
pub async fn show_recipe_details<A, H>(api: &A, state: &H, id: u64)
where
    A: RecipeApi + ?Sized,
    H: ViewStateHandle + ?Sized,
{
    let Some(ticket) = state.with_state(|s| s.begin_details(id)) else {
        return;
    };
    log::info!("Loading recipe {}", id);
    let result = api.get_recipe(id).await;
    state.with_state(|s| s.finish_details(ticket, result));
}

/// Handle shared through context by every view
#[derive(Clone, Copy)]
pub struct RecipeFinder {
    pub store: Store<ViewState>,
    config: StoredValue<AppConfig>,
    api: StoredValue<HttpRecipeApi>,
}

impl RecipeFinder {
    pub fn new(config: AppConfig) -> Self {
        let api = HttpRecipeApi::new(config.api_base.clone());
        Self {
            store: Store::new(ViewState::default()),
            config: StoredValue::new(config),
            api: StoredValue::new(api),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Unknown names leave the store untouched and notify nobody
    pub fn show_page(&self, name: &str) {
        self.store.nav().maybe_update(|nav| nav.show_page(name));
    }

    pub fn toggle_sidebar(&self, show: Option<bool>) {
        self.store
            .nav()
            .sidebar_open()
            .update(|open| *open = show.unwrap_or(!*open));
    }

    pub fn select_nav_entry(&self, name: &str) {
        self.store.nav().update(|nav| {
            nav.select_nav_entry(name);
        });
    }

    pub fn set_ingredients_input(&self, value: String) {
        self.store.ingredients_input().set(value);
    }

    pub fn add_ingredient(&self, name: &str) {
        self.store
            .ingredients_input()
            .update(|input| *input = ingredients::add_ingredient(input, name));
    }

    /// Changes only when a navigation happened, whatever else was written
    pub fn scroll_requests(&self) -> Memo<u32> {
        let store = self.store;
        Memo::new(move |_| store.nav().scroll_resets().get())
    }

    pub fn search_recipes(&self) {
        let api = self.api.get_value();
        let store = self.store;
        spawn_local(async move {
            search_recipes(&api, &store).await;
        });
    }

    pub fn show_recipe_details(&self, id: u64) {
        let api = self.api.get_value();
        let store = self.store;
        spawn_local(async move {
            show_recipe_details(&api, &store, id).await;
        });
    }

    pub fn take_notice(&self) -> Option<String> {
        self.store
            .notice()
            .try_maybe_update(|notice| {
                let taken = notice.take();
                (taken.is_some(), taken)
            })
            .flatten()
    }
}

pub fn use_recipe_finder() -> RecipeFinder {
    expect_context::<RecipeFinder>()
}
