//! Recipe View Models
//!
//! Turns API records into display-ready values for the card list and the
//! detail page. Views render these through `view!`, which escapes every
//! string, so nothing here produces markup.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::{BADGE_LIMIT, SUMMARY_LIMIT};
use crate::models::{IngredientRef, RecipeDetail, RecipeSummary};

static TAG_RE: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("static pattern"))
}

/// Remove `<...>` markup and decode entities
pub fn strip_tags(html: &str) -> String {
    let text = tag_re().replace_all(html, "");
    html_escape::decode_html_entities(&text).into_owned()
}

/// Plain-text summary capped at `SUMMARY_LIMIT` characters plus "..."
pub fn clean_summary(html: &str) -> String {
    let text = strip_tags(html);
    match text.char_indices().nth(SUMMARY_LIMIT) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text,
    }
}

/// Plain-text instruction lines, line breaks preserved
pub fn clean_instructions(html: &str) -> Vec<String> {
    strip_tags(html)
        .split('\n')
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect()
}

/// "45" or "N/A"; zero counts as unknown
pub fn amount_label(value: Option<u32>) -> String {
    match value {
        Some(v) if v > 0 => v.to_string(),
        _ => "N/A".to_string(),
    }
}

/// Only http(s) and site-relative links are rendered
pub fn is_safe_link(url: &str) -> bool {
    let lower = url.trim().to_lowercase();
    lower.starts_with("https://")
        || lower.starts_with("http://")
        || (lower.starts_with('/') && !lower.starts_with("//"))
}

/// Up to `BADGE_LIMIT` names plus the count of hidden ones
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Badges {
    pub names: Vec<String>,
    pub more: Option<usize>,
}

impl Badges {
    pub fn from_ingredients(ingredients: &[IngredientRef]) -> Self {
        let names = ingredients
            .iter()
            .take(BADGE_LIMIT)
            .map(|ing| ing.name.clone().unwrap_or_default())
            .collect();
        let more = (ingredients.len() > BADGE_LIMIT).then(|| ingredients.len() - BADGE_LIMIT);
        Self { names, more }
    }

    pub fn more_label(&self) -> Option<String> {
        self.more.map(|n| format!("+{} more", n))
    }

    /// Total badges rendered, including "+N more"
    pub fn len(&self) -> usize {
        self.names.len() + usize::from(self.more.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// One result card
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub id: Option<u64>,
    pub title: String,
    pub image: Option<String>,
    pub minutes: String,
    pub used_count: u32,
    pub used: Badges,
    pub missed: Badges,
}

impl From<&RecipeSummary> for CardModel {
    fn from(recipe: &RecipeSummary) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title.clone().unwrap_or_default(),
            image: recipe.image.clone().filter(|s| !s.is_empty()),
            minutes: amount_label(recipe.ready_in_minutes),
            used_count: recipe.used_ingredient_count.unwrap_or(0),
            used: Badges::from_ingredients(recipe.used_ingredients.as_deref().unwrap_or_default()),
            missed: Badges::from_ingredients(recipe.missed_ingredients.as_deref().unwrap_or_default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Instructions {
    Steps(Vec<(u32, String)>),
    Text(Vec<String>),
    Missing,
}

impl Instructions {
    /// Structured steps of the first block, then free text, then nothing
    pub fn from_recipe(recipe: &RecipeDetail) -> Self {
        let steps: Vec<(u32, String)> = recipe
            .analyzed_instructions
            .as_deref()
            .and_then(|blocks| blocks.first())
            .and_then(|block| block.steps.as_deref())
            .unwrap_or_default()
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let number = s.number.unwrap_or(i as u32 + 1);
                (number, s.step.clone().unwrap_or_default())
            })
            .collect();
        if !steps.is_empty() {
            return Instructions::Steps(steps);
        }
        match recipe.instructions.as_deref().filter(|s| !s.trim().is_empty()) {
            Some(text) => Instructions::Text(clean_instructions(text)),
            None => Instructions::Missing,
        }
    }
}

/// The detail page
#[derive(Debug, Clone, PartialEq)]
pub struct DetailModel {
    pub title: String,
    pub image: Option<String>,
    pub minutes: String,
    pub servings: String,
    pub diets: Option<String>,
    pub summary: Option<String>,
    /// `None` renders the "no information" placeholder
    pub ingredients: Option<Vec<String>>,
    pub instructions: Instructions,
    pub source_url: Option<String>,
}

impl From<&RecipeDetail> for DetailModel {
    fn from(recipe: &RecipeDetail) -> Self {
        let diets = recipe
            .diets
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.join(", "));
        let ingredients = recipe
            .extended_ingredients
            .as_deref()
            .filter(|list| !list.is_empty())
            .map(|list| {
                list.iter()
                    .map(|ing| ing.original.clone().unwrap_or_default())
                    .collect()
            });
        Self {
            title: recipe.title.clone().unwrap_or_default(),
            image: recipe.image.clone().filter(|s| !s.is_empty()),
            minutes: amount_label(recipe.ready_in_minutes),
            servings: amount_label(recipe.servings),
            diets,
            summary: recipe
                .summary
                .as_deref()
                .filter(|s| !s.is_empty())
                .map(clean_summary),
            ingredients,
            instructions: Instructions::from_recipe(recipe),
            source_url: recipe.source_url.clone().filter(|url| is_safe_link(url)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtendedIngredient, InstructionBlock, InstructionStep};

    fn ingredients(n: usize) -> Vec<IngredientRef> {
        (1..=n)
            .map(|i| IngredientRef { name: Some(format!("ing{}", i)) })
            .collect()
    }

    #[test]
    fn test_badges_truncate_after_three() {
        let badges = Badges::from_ingredients(&ingredients(5));
        assert_eq!(badges.names, vec!["ing1", "ing2", "ing3"]);
        assert_eq!(badges.more_label().as_deref(), Some("+2 more"));
        assert_eq!(badges.len(), 4);
    }

    #[test]
    fn test_badges_without_overflow() {
        let badges = Badges::from_ingredients(&ingredients(3));
        assert_eq!(badges.len(), 3);
        assert!(badges.more_label().is_none());
        assert!(Badges::from_ingredients(&[]).is_empty());
    }

    #[test]
    fn test_clean_summary_truncates_long_text() {
        let html = format!("<p>{}</p>", "a".repeat(310));
        let cleaned = clean_summary(&html);
        assert_eq!(cleaned, format!("{}...", "a".repeat(300)));
    }

    #[test]
    fn test_clean_summary_keeps_short_text() {
        let body = "b".repeat(250);
        let html = format!("<b>{}</b><br/>", body);
        assert_eq!(clean_summary(&html), body);
    }

    #[test]
    fn test_clean_summary_exactly_at_limit() {
        let body = "c".repeat(300);
        assert_eq!(clean_summary(&body), body);
    }

    #[test]
    fn test_clean_summary_counts_characters_not_bytes() {
        let html = "é".repeat(301);
        let cleaned = clean_summary(&html);
        assert_eq!(cleaned.chars().count(), 303);
        assert!(cleaned.ends_with("é..."));
    }

    #[test]
    fn test_strip_tags_decodes_entities() {
        assert_eq!(strip_tags("Salt &amp; <a href=\"x\">pepper</a>"), "Salt & pepper");
    }

    #[test]
    fn test_clean_instructions_preserves_lines() {
        let lines = clean_instructions("<ol><li>Boil water.</li>\n<li>Add pasta.</li></ol>");
        assert_eq!(lines, vec!["Boil water.", "Add pasta."]);
    }

    #[test]
    fn test_card_defaults() {
        let card = CardModel::from(&RecipeSummary::default());
        assert_eq!(card.minutes, "N/A");
        assert_eq!(card.used_count, 0);
        assert!(card.image.is_none());
        assert!(card.used.is_empty());
    }

    #[test]
    fn test_card_with_five_used_ingredients() {
        let recipe = RecipeSummary {
            id: Some(3),
            title: Some("Omelette".into()),
            ready_in_minutes: Some(10),
            used_ingredient_count: Some(5),
            used_ingredients: Some(ingredients(5)),
            ..Default::default()
        };
        let card = CardModel::from(&recipe);
        assert_eq!(card.minutes, "10");
        assert_eq!(card.used.len(), 4);
        assert_eq!(card.used.more_label().as_deref(), Some("+2 more"));
        assert!(card.missed.is_empty());
    }

    #[test]
    fn test_instructions_prefer_steps() {
        let recipe = RecipeDetail {
            analyzed_instructions: Some(vec![InstructionBlock {
                steps: Some(vec![
                    InstructionStep { number: Some(1), step: Some("Chop.".into()) },
                    InstructionStep { number: None, step: Some("Fry.".into()) },
                ]),
            }]),
            instructions: Some("ignored".into()),
            ..Default::default()
        };
        assert_eq!(
            Instructions::from_recipe(&recipe),
            Instructions::Steps(vec![(1, "Chop.".into()), (2, "Fry.".into())])
        );
    }

    #[test]
    fn test_instructions_fall_back_to_text_then_missing() {
        let text = RecipeDetail {
            analyzed_instructions: Some(vec![]),
            instructions: Some("<p>Mix</p>\nBake".into()),
            ..Default::default()
        };
        assert_eq!(
            Instructions::from_recipe(&text),
            Instructions::Text(vec!["Mix".into(), "Bake".into()])
        );
        assert_eq!(Instructions::from_recipe(&RecipeDetail::default()), Instructions::Missing);
    }

    #[test]
    fn test_detail_view() {
        let recipe = RecipeDetail {
            title: Some("Soup".into()),
            servings: Some(4),
            diets: Some(vec!["vegan".into(), "gluten free".into()]),
            summary: Some(String::new()),
            extended_ingredients: Some(vec![ExtendedIngredient { original: Some("1 onion".into()) }]),
            source_url: Some("javascript:alert(1)".into()),
            ..Default::default()
        };
        let view = DetailModel::from(&recipe);
        assert_eq!(view.minutes, "N/A");
        assert_eq!(view.servings, "4");
        assert_eq!(view.diets.as_deref(), Some("vegan, gluten free"));
        assert!(view.summary.is_none());
        assert_eq!(view.ingredients, Some(vec!["1 onion".to_string()]));
        assert!(view.source_url.is_none());
        assert!(DetailModel::from(&RecipeDetail::default()).ingredients.is_none());
    }

    #[test]
    fn test_safe_links() {
        assert!(is_safe_link("https://example.com/r/1"));
        assert!(is_safe_link("/recipes/1"));
        assert!(!is_safe_link("//evil.example"));
        assert!(!is_safe_link("JavaScript:alert(1)"));
    }
}
