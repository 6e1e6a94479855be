use reqwest::StatusCode;

use crate::cards::catalog_record::{CatalogRecord, CatalogResponse};
use crate::cards::collection_row::CollectionRow;
use crate::ygoprodeck_client::LookupError;

pub fn blue_eyes_collection_row() -> CollectionRow {
    CollectionRow {
        name: "Blue-Eyes White Dragon".to_string(),
        quantity: "1".to_string(),
        card_id: "89631139".to_string(),
        rarity: "Ultra Rare".to_string(),
        condition: "Near Mint".to_string(),
        edition: "1st Edition".to_string(),
        set_name: "Legend of Blue Eyes White Dragon".to_string(),
        set_code: "LOB-001".to_string(),
    }
}

pub fn blue_eyes_record() -> CatalogRecord {
    CatalogRecord {
        id: 89631139,
        name: "Blue-Eyes White Dragon".to_string(),
        card_type: "Normal Monster".to_string(),
        description: "...".to_string(),
        attack: 3000,
        defence: 2500,
        level: 8,
        race: "Dragon".to_string(),
        attribute: "LIGHT".to_string(),
        ..Default::default()
    }
}

pub fn collection_row(card_id: &str, name: &str) -> CollectionRow {
    CollectionRow {
        name: name.to_string(),
        quantity: "1".to_string(),
        card_id: card_id.to_string(),
        rarity: "Common".to_string(),
        condition: "Near Mint".to_string(),
        edition: "Unlimited".to_string(),
        set_name: "Metal Raiders".to_string(),
        set_code: "MRD-EN001".to_string(),
    }
}

pub fn record(id: i64, name: &str) -> CatalogRecord {
    CatalogRecord {
        id,
        name: name.to_string(),
        card_type: "Effect Monster".to_string(),
        description: format!("Text of {}", name),
        attack: 1000,
        defence: 1000,
        level: 4,
        race: "Warrior".to_string(),
        attribute: "EARTH".to_string(),
        ..Default::default()
    }
}

/// A real transport-layer error; reqwest has no public constructor for one.
pub fn request_error(card_id: &str) -> LookupError {
    let source = reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err();
    LookupError::Request {
        card_id: card_id.to_string(),
        source,
    }
}

pub fn decode_error(card_id: &str) -> LookupError {
    let source = serde_json::from_str::<CatalogResponse>("<html>").unwrap_err();
    LookupError::Decode {
        card_id: card_id.to_string(),
        status: StatusCode::OK,
        source,
    }
}
