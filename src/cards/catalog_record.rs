use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Body of a `cardinfo.php` response.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Vec<CatalogRecord>,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogRecord {
    #[serde(deserialize_with = "lenient_int")]
    pub id: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "type", deserialize_with = "lenient_string")]
    pub card_type: String,
    #[serde(rename = "desc", deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(rename = "atk", deserialize_with = "lenient_int")]
    pub attack: i64,
    #[serde(rename = "def", deserialize_with = "lenient_int")]
    pub defence: i64,
    #[serde(deserialize_with = "lenient_int")]
    pub level: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub race: String,
    #[serde(deserialize_with = "lenient_string")]
    pub attribute: String,
    #[serde(deserialize_with = "lenient_list")]
    pub card_sets: Vec<CardSet>,
    #[serde(deserialize_with = "lenient_list")]
    pub card_images: Vec<CardImage>,
    #[serde(deserialize_with = "lenient_list")]
    pub card_prices: Vec<CardPrice>,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardSet {
    #[serde(deserialize_with = "lenient_string")]
    pub set_name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub set_code: String,
    #[serde(deserialize_with = "lenient_string")]
    pub set_rarity: String,
    #[serde(deserialize_with = "lenient_string")]
    pub set_rarity_code: String,
    #[serde(deserialize_with = "lenient_string")]
    pub set_price: String,
}

#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardImage {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub image_url_small: String,
}

/// Marketplace quotes stay text; the service sends placeholders as well as numbers.
#[derive(Debug, PartialEq, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CardPrice {
    #[serde(deserialize_with = "lenient_string")]
    pub cardmarket_price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub tcgplayer_price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub ebay_price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub amazon_price: String,
    #[serde(deserialize_with = "lenient_string")]
    pub coolstuffinc_price: String,
}

/// Integers fall back to 0 when null, missing or not numeric.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
