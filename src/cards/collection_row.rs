use serde::Deserialize;

/// One line of the collection file. Columns are bound by position, not by
/// header name, so the field order here is the file format.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct CollectionRow {
    pub name: String,
    pub quantity: String,
    pub card_id: String,
    pub rarity: String,
    pub condition: String,
    pub edition: String,
    pub set_name: String,
    pub set_code: String,
}
