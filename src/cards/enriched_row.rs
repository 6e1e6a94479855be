use serde::Serialize;

use super::{catalog_record::CatalogRecord, collection_row::CollectionRow};

/// A collection row merged with its catalog entry. Field order is the column
/// order of the updated collection file.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct EnrichedRow {
    pub card_id: i64,
    pub name: String,
    pub quantity: String,
    pub card_type: String,
    pub level: i64,
    pub attack: i64,
    pub defence: i64,
    pub race: String,
    pub attribute: String,
    pub rarity: String,
    pub set_name: String,
    pub description: String,
}

impl EnrichedRow {
    /// Identity comes from the catalog so local typos are corrected; quantity,
    /// rarity and set are always the collector's own values.
    pub fn merge(local: &CollectionRow, remote: &CatalogRecord) -> Self {
        EnrichedRow {
            card_id: remote.id,
            name: remote.name.clone(),
            quantity: local.quantity.clone(),
            card_type: remote.card_type.clone(),
            level: remote.level,
            attack: remote.attack,
            defence: remote.defence,
            race: remote.race.clone(),
            attribute: remote.attribute.clone(),
            rarity: local.rarity.clone(),
            set_name: local.set_name.clone(),
            description: remote.description.clone(),
        }
    }
}
