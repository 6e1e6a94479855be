mod cards;
mod collection_reader;
mod collection_updater;
mod error;
#[cfg(test)]
mod test;
mod utilities;
mod ygoprodeck_client;

use std::path::Path;
use std::process::ExitCode;

use log::info;

use collection_reader::read_collection;
use collection_updater::CollectionUpdater;
use error::{Result, UpdaterError};
use utilities::config::Config;
use ygoprodeck_client::YgoProDeckClient;

async fn run(config: &Config) -> Result<()> {
    let start_time = chrono::prelude::Local::now();
    info!("Starting at {}", start_time);

    let rows = read_collection(Path::new(&config.input_path))?;
    println!("Successfully Opened/Read Card Collection CSV file");

    let http_client = YgoProDeckClient::build_http_client(config.request_timeout())
        .map_err(|e| UpdaterError::InvalidConfig(format!("could not build HTTP client: {}", e)))?;
    let client = YgoProDeckClient::new(Some(&config.api_url), http_client);

    let summary = CollectionUpdater::from_config(client, config)
        .update_file(&rows, Path::new(&config.output_path))
        .await?;

    let end_time = chrono::prelude::Local::now();
    info!(
        "Update started at: {}. Finished at: {}. Took: {} seconds and wrote {} of {} cards to {}",
        start_time,
        end_time,
        (end_time - start_time).num_seconds(),
        summary.written,
        rows.len(),
        config.output_path
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let result = match Config::new() {
        Ok(config) => run(&config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
