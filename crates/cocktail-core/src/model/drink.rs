// ── Drink domain types ──

use std::fmt;

use cocktail_api::Drink;
use strum::{Display, EnumString};

use crate::ingredients;

/// Alcohol content flag, normalized from the API's free-text `strAlcoholic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Alcoholic {
    #[strum(to_string = "Alcoholic")]
    Alcoholic,
    #[strum(to_string = "Non alcoholic")]
    NonAlcoholic,
    #[strum(to_string = "Optional alcohol")]
    Optional,
}

impl Alcoholic {
    /// Parse the API string. Unknown values yield `None`.
    pub fn from_api(value: &str) -> Option<Self> {
        value.trim().parse().ok()
    }
}

/// One populated ingredient slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Trimmed measure; empty when the slot had none.
    pub measure: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, measure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measure: measure.into(),
        }
    }
}

/// `"<name> <measure>"`, or just the name when the measure is empty.
impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.measure.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{} {}", self.name, self.measure)
        }
    }
}

/// Normalized shape of one matched drink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkRecord {
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub category: String,
    pub glass: String,
    pub alcoholic: Option<Alcoholic>,
    pub instructions: String,
    /// Populated slots only, in slot order.
    pub ingredients: Vec<Ingredient>,
}

impl From<&Drink> for DrinkRecord {
    fn from(drink: &Drink) -> Self {
        let text = |value: Option<&str>| value.map(str::trim).unwrap_or_default().to_owned();

        Self {
            name: drink.name.trim().to_owned(),
            thumbnail_url: drink
                .thumbnail
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_owned),
            category: text(drink.category.as_deref()),
            glass: text(drink.glass.as_deref()),
            alcoholic: drink.alcoholic.as_deref().and_then(Alcoholic::from_api),
            instructions: text(drink.instructions.as_deref()),
            ingredients: ingredients::extract(drink),
        }
    }
}

impl From<Drink> for DrinkRecord {
    fn from(drink: Drink) -> Self {
        Self::from(&drink)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn drink(value: serde_json::Value) -> Drink {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn alcoholic_parses_api_strings() {
        assert_eq!(Alcoholic::from_api("Alcoholic"), Some(Alcoholic::Alcoholic));
        assert_eq!(Alcoholic::from_api("Non alcoholic"), Some(Alcoholic::NonAlcoholic));
        assert_eq!(Alcoholic::from_api("non ALCOHOLIC "), Some(Alcoholic::NonAlcoholic));
        assert_eq!(Alcoholic::from_api("Optional alcohol"), Some(Alcoholic::Optional));
        assert_eq!(Alcoholic::from_api("Sometimes"), None);
    }

    #[test]
    fn alcoholic_display_round_trips_the_api_label() {
        assert_eq!(Alcoholic::NonAlcoholic.to_string(), "Non alcoholic");
        assert_eq!(Alcoholic::Optional.to_string(), "Optional alcohol");
    }

    #[test]
    fn ingredient_display_omits_empty_measure() {
        assert_eq!(Ingredient::new("Lime", "").to_string(), "Lime");
        assert_eq!(Ingredient::new("Tequila", "2 oz").to_string(), "Tequila 2 oz");
    }

    #[test]
    fn record_from_full_drink() {
        let record = DrinkRecord::from(drink(json!({
            "strDrink": "Mojito",
            "strDrinkThumb": "https://example.test/mojito.jpg",
            "strCategory": "Cocktail",
            "strGlass": "Highball glass",
            "strAlcoholic": "Alcoholic",
            "strInstructions": "Muddle mint leaves with sugar and lime juice.",
            "strIngredient1": "Light rum",
            "strMeasure1": "2-3 oz ",
            "strIngredient2": "Lime",
            "strMeasure2": "Juice of 1 "
        })));

        assert_eq!(
            record,
            DrinkRecord {
                name: "Mojito".into(),
                thumbnail_url: Some("https://example.test/mojito.jpg".into()),
                category: "Cocktail".into(),
                glass: "Highball glass".into(),
                alcoholic: Some(Alcoholic::Alcoholic),
                instructions: "Muddle mint leaves with sugar and lime juice.".into(),
                ingredients: vec![
                    Ingredient::new("Light rum", "2-3 oz"),
                    Ingredient::new("Lime", "Juice of 1"),
                ],
            }
        );
    }

    #[test]
    fn record_from_sparse_drink_uses_empty_text() {
        let record = DrinkRecord::from(drink(json!({
            "strDrink": "Mystery",
            "strDrinkThumb": null,
            "strAlcoholic": "unknown"
        })));

        assert_eq!(record.thumbnail_url, None);
        assert_eq!(record.category, "");
        assert_eq!(record.glass, "");
        assert_eq!(record.alcoholic, None);
        assert!(record.ingredients.is_empty());
    }
}
