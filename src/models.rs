//! Frontend Models
//!
//! Data structures matching the recipe API payloads. Every field is optional
//! because the API omits whatever it does not know about a recipe, but a
//! payload must still be a JSON object.

use serde::Deserialize;

/// Ingredient reference inside a search result
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct IngredientRef {
    pub name: Option<String>,
}

/// Recipe summary as returned by `GET /api/recipes`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub used_ingredient_count: Option<u32>,
    pub used_ingredients: Option<Vec<IngredientRef>>,
    pub missed_ingredients: Option<Vec<IngredientRef>>,
}

/// Ingredient line of a full recipe
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ExtendedIngredient {
    /// Human-readable line, e.g. "2 cups of flour"
    pub original: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InstructionStep {
    pub number: Option<u32>,
    pub step: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InstructionBlock {
    pub steps: Option<Vec<InstructionStep>>,
}

/// Full recipe as returned by `GET /api/recipes/{id}`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub image: Option<String>,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub diets: Option<Vec<String>>,
    /// Rich text (HTML)
    pub summary: Option<String>,
    pub extended_ingredients: Option<Vec<ExtendedIngredient>>,
    pub analyzed_instructions: Option<Vec<InstructionBlock>>,
    /// Rich text (HTML), used when no structured steps exist
    pub instructions: Option<String>,
    pub source_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_api_json() {
        let json = r#"{
            "id": 716429,
            "title": "Pasta with Garlic",
            "image": "https://img.example/716429.jpg",
            "readyInMinutes": 45,
            "usedIngredientCount": 2,
            "usedIngredients": [{"name": "garlic"}, {"name": "pasta"}],
            "missedIngredients": [{"name": "scallions", "amount": 1.0}]
        }"#;

        let recipe: RecipeSummary = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, Some(716429));
        assert_eq!(recipe.ready_in_minutes, Some(45));
        assert_eq!(recipe.used_ingredients.as_ref().map(Vec::len), Some(2));
        assert_eq!(
            recipe.missed_ingredients.unwrap()[0].name.as_deref(),
            Some("scallions")
        );
    }

    #[test]
    fn test_summary_tolerates_missing_and_null_fields() {
        let recipe: RecipeSummary =
            serde_json::from_str(r#"{"id": 1, "image": null, "usedIngredients": null}"#).unwrap();
        assert_eq!(recipe.id, Some(1));
        assert!(recipe.title.is_none());
        assert!(recipe.image.is_none());
        assert!(recipe.used_ingredients.is_none());
    }

    #[test]
    fn test_detail_from_api_json() {
        let json = r#"{
            "id": 7,
            "title": "Soup",
            "servings": 4,
            "diets": ["vegan"],
            "summary": "<b>Warm</b> soup",
            "extendedIngredients": [{"original": "1 onion", "id": 11282}],
            "analyzedInstructions": [{"name": "", "steps": [{"number": 1, "step": "Chop."}]}],
            "sourceUrl": "https://example.com/soup"
        }"#;

        let recipe: RecipeDetail = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.servings, Some(4));
        assert_eq!(recipe.extended_ingredients.unwrap()[0].original.as_deref(), Some("1 onion"));
        let steps = recipe.analyzed_instructions.unwrap()[0].steps.clone().unwrap();
        assert_eq!(steps[0].number, Some(1));
        assert_eq!(recipe.source_url.as_deref(), Some("https://example.com/soup"));
    }

    #[test]
    fn test_non_object_payloads_are_rejected() {
        assert!(serde_json::from_str::<RecipeDetail>("[]").is_err());
        assert!(serde_json::from_str::<RecipeSummary>("[1, \"Toast\"]").is_err());
    }
}
