//! Startup: everything loaded once before the page can render.

use std::sync::Arc;

use crate::assets::load_background;
use crate::config::ViewerConfig;
use crate::data;
use crate::diagram::ViewerContext;
use crate::error::ViewerError;

/// Loaded state for one page session.
#[derive(Clone, Debug)]
pub struct Session {
	/// Dataset and axis index, shared read-only with every render.
	pub context: Arc<ViewerContext>,
	/// Background image as a `data:` URL.
	pub background: String,
}

/// Fetch the background and the dataset. Either failing aborts startup.
pub async fn load_session(config: &ViewerConfig) -> Result<Session, ViewerError> {
	let background = load_background(&config.background_path).await?;
	let references = data::load(&config.dataset_path, &config.columns).await?;
	let context = ViewerContext::new(references).with_samples(config.samples_per_arc);
	Ok(Session {
		context: Arc::new(context),
		background,
	})
}
