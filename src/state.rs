//! View State
//!
//! Everything the page shows, as one plain struct. Request flows are split
//! into `begin_*` / `finish_*` halves so that the await in between never
//! holds a borrow, and each half is a synchronous, testable transition.

use reactive_stores::Store;

use crate::error::AppError;
use crate::ingredients;
use crate::models::{RecipeDetail, RecipeSummary};
use crate::nav::{Navigation, Page};

pub const SEARCH_FAILED: &str = "Failed to fetch recipes. Please try again.";
pub const DETAILS_FAILED: &str = "Failed to fetch recipe details. Please try again.";

#[derive(Debug, Clone, Default, Store)]
pub struct ViewState {
    pub nav: Navigation,
    /// Raw text of the ingredient field
    pub ingredients_input: String,
    /// Outstanding requests; the loading indicator shows while non-zero
    pub in_flight: u32,
    /// Cards on the results page, in API order
    pub current_recipes: Vec<RecipeSummary>,
    pub no_results: bool,
    pub results_subtitle: Option<String>,
    pub details: Option<RecipeDetail>,
    /// Blocking message waiting to be shown
    pub notice: Option<String>,
    pub search_seq: u64,
    pub detail_seq: u64,
}

/// Issued search; its response only applies while `seq` is current
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTicket {
    pub seq: u64,
    pub query: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailTicket {
    pub seq: u64,
    pub id: u64,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn set_loading(&mut self, show: bool) {
        if show {
            self.in_flight += 1;
        } else {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
    }

    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Validate the input, then show loading and jump to results.
    /// Nothing changes besides the notice when the input is blank.
    pub fn begin_search(&mut self) -> Result<SearchTicket, AppError> {
        let Some(query) = ingredients::normalize_query(&self.ingredients_input).map(str::to_string)
        else {
            let err = AppError::empty_ingredients();
            self.show_notice(err.to_string());
            return Err(err);
        };

        self.set_loading(true);
        self.nav.navigate(Page::Results);
        self.search_seq += 1;
        // A detail response arriving now would drag the user off the new results
        self.detail_seq += 1;
        Ok(SearchTicket { seq: self.search_seq, query })
    }

    pub fn finish_search(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Option<Vec<RecipeSummary>>, AppError>,
    ) {
        self.set_loading(false);
        if ticket.seq != self.search_seq {
            log::debug!("Dropping stale search response for {:?}", ticket.query);
            return;
        }
        match result {
            Ok(recipes) => {
                log::info!(
                    "Found {} recipes for {:?}",
                    recipes.as_ref().map_or(0, Vec::len),
                    ticket.query
                );
                self.display_recipes(recipes);
                self.results_subtitle = Some(format!("Based on: {}", ticket.query));
            }
            Err(err) => {
                log::error!("Error fetching recipes: {}", err);
                self.show_notice(SEARCH_FAILED);
            }
        }
    }

    /// Replace the result cards; empty or missing lists show the placeholder
    pub fn display_recipes(&mut self, recipes: Option<Vec<RecipeSummary>>) {
        match recipes.filter(|list| !list.is_empty()) {
            Some(list) => {
                self.no_results = false;
                self.current_recipes = list;
            }
            None => {
                self.current_recipes.clear();
                self.no_results = true;
            }
        }
    }

    pub fn begin_details(&mut self, id: u64) -> DetailTicket {
        self.set_loading(true);
        self.detail_seq += 1;
        DetailTicket { seq: self.detail_seq, id }
    }

    pub fn finish_details(&mut self, ticket: DetailTicket, result: Result<RecipeDetail, AppError>) {
        self.set_loading(false);
        if ticket.seq != self.detail_seq {
            log::debug!("Dropping stale details response for recipe {}", ticket.id);
            return;
        }
        match result {
            Ok(recipe) => {
                self.details = Some(recipe);
                self.nav.navigate(Page::Details);
            }
            Err(err) => {
                log::error!("Error fetching recipe details: {}", err);
                self.show_notice(DETAILS_FAILED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    fn recipe(id: u64) -> RecipeSummary {
        RecipeSummary {
            id: Some(id),
            title: Some(format!("Recipe {}", id)),
            ..Default::default()
        }
    }

    fn state_with_input(input: &str) -> ViewState {
        ViewState {
            ingredients_input: input.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_blank_search_only_warns() {
        let mut state = state_with_input("   ");
        let err = state.begin_search().unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(state.nav.page, Page::Home);
        assert_eq!(state.nav.scroll_resets, 0);
        assert!(!state.is_loading());
        assert_eq!(state.notice.as_deref(), Some("Please enter at least one ingredient"));
    }

    #[test]
    fn test_search_navigates_before_response() {
        let mut state = state_with_input("  eggs, milk ");
        let ticket = state.begin_search().unwrap();

        assert_eq!(ticket.query, "eggs, milk");
        assert_eq!(state.nav.page, Page::Results);
        assert!(state.is_loading());
    }

    #[test]
    fn test_search_success_renders_and_sets_subtitle() {
        let mut state = state_with_input("eggs");
        let ticket = state.begin_search().unwrap();
        state.finish_search(&ticket, Ok(Some(vec![recipe(1), recipe(2)])));

        assert!(!state.is_loading());
        assert!(!state.no_results);
        assert_eq!(state.current_recipes.len(), 2);
        assert_eq!(state.results_subtitle.as_deref(), Some("Based on: eggs"));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_search_failure_keeps_previous_cards() {
        let mut state = state_with_input("eggs");
        let ticket = state.begin_search().unwrap();
        state.finish_search(&ticket, Ok(Some(vec![recipe(1)])));

        let ticket = state.begin_search().unwrap();
        state.finish_search(&ticket, Err(FetchError::Status(500).into()));

        assert!(!state.is_loading());
        assert_eq!(state.notice.as_deref(), Some(SEARCH_FAILED));
        assert_eq!(state.current_recipes, vec![recipe(1)]);
    }

    #[test]
    fn test_display_empty_or_null_shows_placeholder() {
        for input in [Some(vec![]), None] {
            let mut state = ViewState::default();
            state.display_recipes(Some(vec![recipe(1)]));
            state.display_recipes(input);
            assert!(state.current_recipes.is_empty());
            assert!(state.no_results);
        }
    }

    #[test]
    fn test_stale_search_response_is_dropped() {
        let mut state = state_with_input("eggs");
        let slow = state.begin_search().unwrap();
        state.ingredients_input = "rice".to_string();
        let fast = state.begin_search().unwrap();

        state.finish_search(&fast, Ok(Some(vec![recipe(2)])));
        assert!(state.is_loading());
        state.finish_search(&slow, Ok(Some(vec![recipe(1)])));

        assert!(!state.is_loading());
        assert_eq!(state.current_recipes, vec![recipe(2)]);
        assert_eq!(state.results_subtitle.as_deref(), Some("Based on: rice"));
    }

    #[test]
    fn test_details_success_navigates() {
        let mut state = ViewState::default();
        let ticket = state.begin_details(42);
        assert!(state.is_loading());
        assert_eq!(state.nav.page, Page::Home);

        let detail = RecipeDetail { id: Some(42), ..Default::default() };
        state.finish_details(ticket, Ok(detail.clone()));

        assert!(!state.is_loading());
        assert_eq!(state.nav.page, Page::Details);
        assert_eq!(state.details, Some(detail));
    }

    #[test]
    fn test_details_failure_stays_put() {
        let mut state = ViewState::default();
        state.nav.navigate(Page::Results);
        let ticket = state.begin_details(42);
        state.finish_details(ticket, Err(FetchError::Network("offline".into()).into()));

        assert!(!state.is_loading());
        assert_eq!(state.nav.page, Page::Results);
        assert_eq!(state.notice.take().as_deref(), Some(DETAILS_FAILED));
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_new_search_invalidates_pending_details() {
        let mut state = state_with_input("eggs");
        let details = state.begin_details(7);
        let search = state.begin_search().unwrap();

        state.finish_details(details, Ok(RecipeDetail::default()));
        assert_eq!(state.nav.page, Page::Results);
        assert!(state.details.is_none());

        state.finish_search(&search, Ok(None));
        assert!(!state.is_loading());
    }
}
