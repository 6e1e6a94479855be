pub const COLLECTION_FILE: &str = "Card Collection.csv";
pub const UPDATED_COLLECTION_FILE: &str = "New Collection.csv";

pub const YGOPRODECK_API_URL: &str = "https://db.ygoprodeck.com/api/v7/cardinfo.php";

pub const THROTTLE_EVERY_ROWS: usize = 20;
pub const THROTTLE_PAUSE_MS: u64 = 500;

pub const COLLECTION_ROW_WIDTH: usize = 8;

// "Quanity" is part of the file format other tools already read.
pub const ENRICHED_HEADER: [&str; 12] = [
    "CardID",
    "Name",
    "Quanity",
    "Type",
    "Level",
    "Attack",
    "Defence",
    "Race & Spell/Trap Type",
    "Attribute",
    "Card Rarity",
    "Card Set",
    "Description",
];
