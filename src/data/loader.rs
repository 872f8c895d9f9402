use log::{error, info};

use crate::error::DataLoadError;
use crate::fetch::fetch_text;

use super::csv::parse_references;
use super::types::{ColumnNames, Reference};

/// Fetch the dataset at `path` and parse it into references.
///
/// Runs once at startup. Any failure is fatal to the session.
pub async fn load(path: &str, columns: &ColumnNames) -> Result<Vec<Reference>, DataLoadError> {
	let text = fetch_text(path)
		.await
		.map_err(|failure| failure.into_data_error(path));

	let references = text.and_then(|text| parse_references(&text, columns));
	match &references {
		Ok(refs) => info!("Loaded {} references from {}", refs.len(), path),
		Err(err) => error!("Dataset load failed: {}", err),
	}
	references
}
