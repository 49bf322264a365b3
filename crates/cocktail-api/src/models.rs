// Wire types for the `search.php` endpoint.
//
// Records are flat: the ingredient list is spread over numbered
// `strIngredientN` / `strMeasureN` keys, which stay in `extra` and are
// reached through the slot accessors.

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Map, Value};

/// Number of ingredient/measure slot pairs on a drink record.
pub const INGREDIENT_SLOTS: usize = 15;

/// Envelope returned by `search.php`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Matches in API order. `None` when the API reports no match
    /// (`null`, absent, or a placeholder string).
    #[serde(default, deserialize_with = "drinks_or_none")]
    pub drinks: Option<Vec<Drink>>,
}

impl SearchResponse {
    /// First match, if any. Later matches are never consulted.
    pub fn first(&self) -> Option<&Drink> {
        self.drinks.as_deref().and_then(<[Drink]>::first)
    }

    pub fn into_first(self) -> Option<Drink> {
        self.drinks.and_then(|drinks| drinks.into_iter().next())
    }
}

/// One drink record as the API sends it.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Drink {
    #[serde(rename = "idDrink", default)]
    pub id: Option<String>,
    #[serde(rename = "strDrink")]
    pub name: String,
    #[serde(rename = "strDrinkThumb", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strGlass", default)]
    pub glass: Option<String>,
    #[serde(rename = "strAlcoholic", default)]
    pub alcoholic: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    /// Every other field, including the numbered ingredient slots.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Drink {
    /// Raw `strIngredient{slot}` value (1-based slot).
    pub fn ingredient(&self, slot: usize) -> Option<&str> {
        self.slot_value("strIngredient", slot)
    }

    /// Raw `strMeasure{slot}` value (1-based slot).
    pub fn measure(&self, slot: usize) -> Option<&str> {
        self.slot_value("strMeasure", slot)
    }

    fn slot_value(&self, prefix: &str, slot: usize) -> Option<&str> {
        self.extra.get(&format!("{prefix}{slot}")).and_then(Value::as_str)
    }
}

/// Accept `[...]`, `null`, or a placeholder string for `drinks`.
///
/// Only the first element must decode; later matches that do not fit the
/// record shape are dropped, since nothing past the first is used.
fn drinks_or_none<'de, D>(deserializer: D) -> Result<Option<Vec<Drink>>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DrinksField {
        List(Vec<Value>),
        Placeholder(String),
    }

    let values = match Option::<DrinksField>::deserialize(deserializer)? {
        Some(DrinksField::List(values)) => values,
        Some(DrinksField::Placeholder(_)) | None => return Ok(None),
    };

    let mut values = values.into_iter();
    let Some(first) = values.next() else {
        return Ok(Some(Vec::new()));
    };

    let mut drinks = vec![Drink::deserialize(first).map_err(de::Error::custom)?];
    drinks.extend(values.filter_map(|value| Drink::deserialize(value).ok()));
    Ok(Some(drinks))
}
