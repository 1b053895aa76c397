//! Corpus preparation.
//!
//! Raw records are untyped JSON so that a record with missing or mistyped fields
//! degrades to a best-effort [`Recipe`] instead of failing the whole load.

use serde_json::{Map, Number, Value};

use crate::{RecipeId, normalize::canonical_ingredient, types::Recipe};

const IMAGE_KEYS: [&str; 3] = ["image", "imageUrl", "imageURL"];
const INSTRUCTION_KEYS: [&str; 2] = ["Instructions", "instructions"];

#[derive(Debug, Clone)]
pub struct PrepareOptions {
    /// Word placed before the step number when instructions are a list.
    pub step_label: String,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            step_label: "Steg".to_owned(),
        }
    }
}

/// Builds a [`Recipe`] from the record found at `index` in the source collection.
pub fn prepare_recipe(index: usize, record: &Value, options: &PrepareOptions) -> Recipe {
    let empty = Map::new();
    let fields = record.as_object().unwrap_or(&empty);

    let id = parse_id(fields.get("id")).unwrap_or_else(|| RecipeId::from(index));

    let ingredients = match fields.get("ingredients") {
        Some(Value::Array(items)) => items.iter().map(ingredient_name).collect(),
        _ => {
            tracing::warn!(recipe = %id, "recipe has no 'ingredients' array");
            Vec::new()
        }
    };

    let canonical_ingredients = ingredients
        .iter()
        .flatten()
        .filter_map(|name| canonical_ingredient(name))
        .collect();

    Recipe {
        title: string_field(fields, "title").unwrap_or_default(),
        image: IMAGE_KEYS
            .iter()
            .find_map(|key| string_field(fields, key).filter(|s| !s.is_empty()))
            .unwrap_or_default(),
        time_minutes: parse_time(fields.get("time")),
        tags: parse_tags(fields.get("tags")),
        instructions_text: render_instructions(fields, &options.step_label),
        id,
        ingredients,
        canonical_ingredients,
    }
}

fn string_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields.get(key).and_then(Value::as_str).map(str::to_owned)
}

fn parse_id(value: Option<&Value>) -> Option<RecipeId> {
    match value? {
        Value::Number(n) => Some(RecipeId::Number(n.clone())),
        Value::String(s) => Some(RecipeId::Text(s.clone())),
        _ => None,
    }
}

fn ingredient_name(item: &Value) -> Option<String> {
    item.get("name").and_then(Value::as_str).map(str::to_owned)
}

fn parse_time(value: Option<&Value>) -> Option<Number> {
    match value? {
        Value::Number(n) => Some(n.clone()),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .map(Number::from)
                .or_else(|| s.parse::<f64>().ok().and_then(Number::from_f64))
        }
        _ => None,
    }
}

fn parse_tags(value: Option<&Value>) -> Vec<String> {
    let Some(Value::Array(tags)) = value else {
        return Vec::new();
    };

    tags.iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect()
}

fn render_instructions(fields: &Map<String, Value>, step_label: &str) -> String {
    let Some(value) = INSTRUCTION_KEYS
        .iter()
        .filter_map(|key| fields.get(*key))
        .find(|v| !is_blank(v))
    else {
        return String::new();
    };

    match value {
        Value::String(text) => text.clone(),
        Value::Array(steps) => steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{step_label} {}: {}", i + 1, step_text(step)))
            .collect::<Vec<_>>()
            .join(" "),
        _ => String::new(),
    }
}

/// Values that leave the instruction key unset: null, false, zero and "".
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn step_text(step: &Value) -> String {
    match step {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn prepare(record: Value) -> Recipe {
        prepare_recipe(7, &record, &PrepareOptions::default())
    }

    #[test]
    fn test_canonical_ingredients_are_lowercased_trimmed_and_filtered() {
        let recipe = prepare(json!({
            "id": 1,
            "title": "Omelette",
            "ingredients": [
                { "name": " Egg " },
                { "name": "" },
                { "name": "   " },
                { "amount": 2 },
                { "name": "Cheese" },
                { "name": "egg" }
            ]
        }));

        assert_eq!(recipe.canonical_ingredients, vec!["egg", "cheese", "egg"]);
        assert_eq!(recipe.ingredients.len(), 6);
        assert_eq!(recipe.title, "Omelette");
    }

    #[test]
    fn test_missing_fields_degrade() {
        let recipe = prepare(json!({ "ingredients": "egg, milk" }));

        assert_eq!(recipe.id, RecipeId::from(7));
        assert_eq!(recipe.title, "");
        assert!(recipe.canonical_ingredients.is_empty());
        assert!(recipe.tags.is_empty());
        assert_eq!(recipe.time_minutes, None);
        assert_eq!(recipe.instructions_text, "");
        assert_eq!(recipe.image, "");
    }

    #[test]
    fn test_non_object_record_degrades() {
        let recipe = prepare(json!("not a recipe"));

        assert_eq!(recipe.id, RecipeId::from(7));
        assert!(recipe.canonical_ingredients.is_empty());
    }

    #[test]
    fn test_string_id_is_kept() {
        let recipe = prepare(json!({ "id": "pannkakor" }));
        assert_eq!(recipe.id, RecipeId::Text("pannkakor".to_owned()));
    }

    #[test]
    fn test_instruction_list_is_numbered() {
        let recipe = prepare(json!({
            "Instructions": ["Whisk the eggs.", "Fry."]
        }));

        assert_eq!(recipe.instructions_text, "Steg 1: Whisk the eggs. Steg 2: Fry.");
    }

    #[test]
    fn test_instruction_label_is_configurable() {
        let options = PrepareOptions {
            step_label: "Step".to_owned(),
        };
        let recipe = prepare_recipe(0, &json!({ "instructions": ["Boil"] }), &options);

        assert_eq!(recipe.instructions_text, "Step 1: Boil");
    }

    #[test]
    fn test_instruction_string_is_used_as_is() {
        let recipe = prepare(json!({ "instructions": "Mix and bake." }));
        assert_eq!(recipe.instructions_text, "Mix and bake.");
    }

    #[test]
    fn test_capitalized_instructions_take_precedence() {
        let recipe = prepare(json!({
            "Instructions": "upper",
            "instructions": "lower"
        }));
        assert_eq!(recipe.instructions_text, "upper");
    }

    #[test]
    fn test_blank_capitalized_instructions_fall_through() {
        for blank in [json!(null), json!(""), json!(false), json!(0)] {
            let recipe = prepare(json!({
                "Instructions": blank,
                "instructions": ["Koka"]
            }));
            assert_eq!(recipe.instructions_text, "Steg 1: Koka");
        }
    }

    #[test]
    fn test_time_tags_and_image() {
        let recipe = prepare(json!({
            "time": "25",
            "tags": ["snabb", 3, "vegetarisk"],
            "imageUrl": "https://img.example/omelett.jpg"
        }));

        assert_eq!(recipe.time_minutes, Some(Number::from(25)));
        assert_eq!(recipe.tags, vec!["snabb", "vegetarisk"]);
        assert_eq!(recipe.image, "https://img.example/omelett.jpg");
    }
}
