use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::ReaderBuilder;
use log::{debug, info};

use crate::cards::collection_row::CollectionRow;
use crate::error::{Result, UpdaterError};
use crate::utilities::constants::COLLECTION_ROW_WIDTH;

/// Reads the whole collection file up front. The first line is a header and is
/// skipped; every other line must have exactly eight columns.
pub fn read_collection(path: &Path) -> Result<Vec<CollectionRow>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => UpdaterError::InputNotFound {
            path: path.to_path_buf(),
            source,
        },
        _ => UpdaterError::Io(source),
    })?;

    let rows = parse_collection(file)?;
    info!("Read {} cards from {}", rows.len(), path.display());
    Ok(rows)
}

pub fn parse_collection<R: Read>(reader: R) -> Result<Vec<CollectionRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    if rdr.headers().map_err(UpdaterError::InputMalformed)?.is_empty() {
        return Err(UpdaterError::MissingHeader);
    }

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(UpdaterError::InputMalformed)?;
        let line = record.position().map_or(0, |p| p.line());
        if record.len() != COLLECTION_ROW_WIDTH {
            return Err(UpdaterError::InputRowWidth {
                line,
                found: record.len(),
                expected: COLLECTION_ROW_WIDTH,
            });
        }
        let row: CollectionRow = record
            .deserialize(None)
            .map_err(UpdaterError::InputMalformed)?;
        debug!("Line {}: {:?}", line, row);
        rows.push(row);
    }

    Ok(rows)
}
