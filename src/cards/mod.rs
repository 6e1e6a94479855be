pub mod catalog_record;
pub mod collection_row;
pub mod enriched_row;
