// ── Ingredient extraction ──
//
// A drink record spreads its ingredient list over fifteen numbered
// `strIngredientN` / `strMeasureN` pairs, any of which may be null, empty
// or missing. `extract` flattens them into the populated slots, in slot
// order.

use cocktail_api::{Drink, INGREDIENT_SLOTS};

use crate::model::Ingredient;

/// Ordered list of populated ingredient slots.
///
/// A slot counts only if its ingredient is present and not blank; a measure
/// without an ingredient is dropped. Both values are trimmed, and a missing
/// measure becomes the empty string. Pure: same record, same output.
pub fn extract(drink: &Drink) -> Vec<Ingredient> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let name = drink.ingredient(slot).map(str::trim).filter(|n| !n.is_empty())?;
            let measure = drink.measure(slot).map(str::trim).unwrap_or_default();
            Some(Ingredient::new(name, measure))
        })
        .collect()
}

/// Display lines for an ingredient list (`"Tequila 2 oz"`, `"Lime"`).
pub fn display_lines(ingredients: &[Ingredient]) -> Vec<String> {
    ingredients.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn drink(value: Value) -> Drink {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn keeps_only_populated_slots_in_slot_order() {
        let d = drink(json!({
            "strDrink": "Sparse",
            "strIngredient7": "Soda water",
            "strMeasure7": "Top",
            "strIngredient3": "Gin",
            "strMeasure3": "2 oz",
            "strIngredient1": "",
            "strIngredient2": null,
            "strMeasure2": "1 dash"
        }));

        assert_eq!(
            extract(&d),
            vec![
                Ingredient::new("Gin", "2 oz"),
                Ingredient::new("Soda water", "Top"),
            ]
        );
    }

    #[test]
    fn missing_measure_renders_name_only() {
        let d = drink(json!({ "strDrink": "X", "strIngredient1": "Lime", "strMeasure1": null }));
        assert_eq!(display_lines(&extract(&d)), vec!["Lime"]);
    }

    #[test]
    fn measure_is_appended_after_name() {
        let d = drink(json!({ "strDrink": "X", "strIngredient1": "Tequila", "strMeasure1": "2 oz" }));
        assert_eq!(display_lines(&extract(&d)), vec!["Tequila 2 oz"]);
    }

    #[test]
    fn values_are_trimmed() {
        let d = drink(json!({
            "strDrink": "X",
            "strIngredient1": " Triple sec ",
            "strMeasure1": " 1/2 oz ",
            "strIngredient2": "Salt",
            "strMeasure2": "   "
        }));
        assert_eq!(display_lines(&extract(&d)), vec!["Triple sec 1/2 oz", "Salt"]);
    }

    #[test]
    fn blank_ingredient_is_skipped_even_with_measure() {
        let d = drink(json!({ "strDrink": "X", "strIngredient4": "  ", "strMeasure4": "1 oz" }));
        assert!(extract(&d).is_empty());
    }

    #[test]
    fn reads_all_fifteen_slots_and_nothing_beyond() {
        let mut fields = serde_json::Map::new();
        fields.insert("strDrink".into(), json!("Kitchen sink"));
        for slot in 1..=16 {
            fields.insert(format!("strIngredient{slot}"), json!(format!("Item {slot}")));
        }
        let d = drink(Value::Object(fields));

        let lines = display_lines(&extract(&d));
        assert_eq!(lines.len(), INGREDIENT_SLOTS);
        assert_eq!(lines.first().unwrap(), "Item 1");
        assert_eq!(lines.last().unwrap(), "Item 15");
    }

    #[test]
    fn extraction_is_deterministic() {
        let d = drink(json!({
            "strDrink": "X",
            "strIngredient2": "Mint",
            "strIngredient9": "Sugar",
            "strMeasure9": "2 tsp"
        }));
        assert_eq!(extract(&d), extract(&d));
    }
}
