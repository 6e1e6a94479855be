use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use csv::{Writer, WriterBuilder};
use log::{debug, info, warn};

use crate::cards::catalog_record::CatalogRecord;
use crate::cards::collection_row::CollectionRow;
use crate::cards::enriched_row::EnrichedRow;
use crate::error::{Result, UpdaterError};
use crate::utilities::config::Config;
use crate::utilities::constants::{ENRICHED_HEADER, THROTTLE_EVERY_ROWS, THROTTLE_PAUSE_MS};
use crate::ygoprodeck_client::{CardLookup, LookupError};

/// Fixed row-count pause. It does not look at any rate-limit signal from the
/// service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    every: usize,
    pause: Duration,
}

impl Default for Throttle {
    fn default() -> Self {
        Throttle::new(THROTTLE_EVERY_ROWS, Duration::from_millis(THROTTLE_PAUSE_MS))
    }
}

impl Throttle {
    /// `every == 0` disables throttling.
    pub fn new(every: usize, pause: Duration) -> Self {
        Throttle { every, pause }
    }

    pub fn should_pause(&self, rows_processed: usize) -> bool {
        self.every > 0 && rows_processed > 0 && rows_processed % self.every == 0
    }

    pub async fn after_row(&self, rows_processed: usize) {
        if self.should_pause(rows_processed) {
            debug!(
                "Processed {} rows, pausing for {:?}",
                rows_processed, self.pause
            );
            tokio::time::sleep(self.pause).await;
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct UpdateSummary {
    pub written: usize,
    pub skipped: usize,
    pub cache_hits: usize,
}

pub struct CollectionUpdater<L: CardLookup> {
    lookup: L,
    throttle: Throttle,
    skip_undecodable: bool,
    cache: Option<HashMap<String, CatalogRecord>>,
}

impl<L: CardLookup> CollectionUpdater<L> {
    pub fn new(lookup: L) -> Self {
        CollectionUpdater {
            lookup,
            throttle: Throttle::default(),
            skip_undecodable: false,
            cache: None,
        }
    }

    pub fn from_config(lookup: L, config: &Config) -> Self {
        CollectionUpdater::new(lookup)
            .with_throttle(Throttle::new(
                config.throttle_every,
                config.throttle_pause(),
            ))
            .skip_undecodable(config.skip_undecodable)
            .cache_lookups(config.cache_lookups)
    }

    pub fn with_throttle(mut self, throttle: Throttle) -> Self {
        self.throttle = throttle;
        self
    }

    /// Undecodable responses abort the run unless this is set, in which case
    /// the row is logged and left out of the output.
    pub fn skip_undecodable(mut self, skip: bool) -> Self {
        self.skip_undecodable = skip;
        self
    }

    /// Reuses the first record fetched for an id. Local fields still come
    /// from each row.
    pub fn cache_lookups(mut self, enabled: bool) -> Self {
        self.cache = if enabled { Some(HashMap::new()) } else { None };
        self
    }

    /// Creates (or truncates) `path` and writes the updated collection to it.
    pub async fn update_file(
        &mut self,
        rows: &[CollectionRow],
        path: &Path,
    ) -> Result<UpdateSummary> {
        let file = File::create(path).map_err(|source| UpdaterError::OutputCreate {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        self.update(rows, &mut writer).await
    }

    /// Writes the header, then one row per collection row in input order.
    /// Every row is flushed as soon as it is written, so a failed run leaves
    /// the rows before the failing one in place.
    pub async fn update<W: Write>(
        &mut self,
        rows: &[CollectionRow],
        writer: &mut Writer<W>,
    ) -> Result<UpdateSummary> {
        writer.write_record(ENRICHED_HEADER)?;
        writer.flush()?;

        let total = rows.len();
        let mut summary = UpdateSummary::default();

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + 1;

            match self.fetch_record(row_number, &row.card_id, &mut summary).await? {
                Some(record) => {
                    writer.serialize(EnrichedRow::merge(row, &record))?;
                    writer.flush()?;
                    summary.written += 1;
                }
                None => summary.skipped += 1,
            }

            println!("Grabbed card data {} of {}", row_number, total);
            self.throttle.after_row(row_number).await;
        }

        info!(
            "Wrote {} rows, skipped {}, {} served from cache",
            summary.written, summary.skipped, summary.cache_hits
        );
        Ok(summary)
    }

    /// `Ok(None)` means the row was skipped.
    async fn fetch_record(
        &mut self,
        row: usize,
        card_id: &str,
        summary: &mut UpdateSummary,
    ) -> Result<Option<CatalogRecord>> {
        if let Some(record) = self.cache.as_ref().and_then(|cache| cache.get(card_id)) {
            debug!("Row {}: using cached data for card '{}'", row, card_id);
            summary.cache_hits += 1;
            return Ok(Some(record.clone()));
        }

        let response = match self.lookup.lookup(card_id).await {
            Ok(response) => response,
            Err(e @ LookupError::Decode { .. }) if self.skip_undecodable => {
                warn!("Row {}: skipping card: {}", row, e);
                return Ok(None);
            }
            Err(source) => return Err(UpdaterError::Lookup { row, source }),
        };

        let record = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| UpdaterError::EmptyResult {
                row,
                card_id: card_id.to_string(),
            })?;
        debug!("Row {}: '{}' resolved to {} ({})", row, card_id, record.id, record.name);

        if let Some(cache) = self.cache.as_mut() {
            cache.insert(card_id.to_string(), record.clone());
        }
        Ok(Some(record))
    }
}
