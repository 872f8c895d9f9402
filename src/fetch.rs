//! Thin wrapper over `window.fetch` for the startup loads.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::{AssetLoadError, DataLoadError};

/// Why a fetch produced no usable body.
#[derive(Debug)]
pub(crate) enum FetchFailure {
	Status(u16),
	Js(String),
}

impl From<JsValue> for FetchFailure {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

impl FetchFailure {
	pub(crate) fn into_data_error(self, path: &str) -> DataLoadError {
		match self {
			Self::Status(status) => DataLoadError::Status {
				path: path.to_string(),
				status,
			},
			Self::Js(message) => DataLoadError::Fetch {
				path: path.to_string(),
				message,
			},
		}
	}

	pub(crate) fn into_asset_error(self, path: &str) -> AssetLoadError {
		match self {
			Self::Status(status) => AssetLoadError::Status {
				path: path.to_string(),
				status,
			},
			Self::Js(message) => AssetLoadError::Fetch {
				path: path.to_string(),
				message,
			},
		}
	}
}

async fn fetch(path: &str) -> Result<Response, FetchFailure> {
	let window = web_sys::window().ok_or_else(|| FetchFailure::Js("no window".into()))?;
	let response: Response = JsFuture::from(window.fetch_with_str(path))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(FetchFailure::Status(response.status()));
	}
	Ok(response)
}

pub(crate) async fn fetch_text(path: &str) -> Result<String, FetchFailure> {
	let response = fetch(path).await?;
	JsFuture::from(response.text()?)
		.await?
		.as_string()
		.ok_or_else(|| FetchFailure::Js("response body is not text".into()))
}

pub(crate) async fn fetch_bytes(path: &str) -> Result<Vec<u8>, FetchFailure> {
	let response = fetch(path).await?;
	let buffer = JsFuture::from(response.array_buffer()?).await?;
	Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}
