//! Background image loading.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::{error, info};

use crate::error::AssetLoadError;
use crate::fetch::fetch_bytes;

/// Fetch the image at `path` and return it as a `data:` URL.
pub async fn load_background(path: &str) -> Result<String, AssetLoadError> {
	let bytes = fetch_bytes(path).await.map_err(|failure| {
		let err = failure.into_asset_error(path);
		error!("Background load failed: {}", err);
		err
	})?;
	info!("Loaded background {} ({} bytes)", path, bytes.len());
	Ok(data_url(mime_for(path), &bytes))
}

/// Encode `bytes` as a base64 `data:` URL.
pub fn data_url(mime: &str, bytes: &[u8]) -> String {
	format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

fn mime_for(path: &str) -> &'static str {
	let ext = path.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
	match ext.as_deref() {
		Some("jpg" | "jpeg") => "image/jpeg",
		Some("gif") => "image/gif",
		Some("webp") => "image/webp",
		Some("svg") => "image/svg+xml",
		_ => "image/png",
	}
}

/// Page-wide CSS that paints `background` (a `data:` URL) behind everything.
pub fn background_css(background: &str) -> String {
	format!(
		r#"
body, .viewer-page {{
	background-image: url("{background}");
	background-size: cover;
	color: white;
}}
h1, h2, h3, h4, h5, h6, p, div, span, label {{
	color: white;
}}
"#
	)
}
