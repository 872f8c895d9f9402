//! Fatal startup errors.
//!
//! Nothing in the viewer can render without its dataset and background, so
//! every error here aborts page construction. There are no runtime errors:
//! re-rendering on a slider change works on clamped input and cannot fail.

use thiserror::Error;

/// The reference dataset could not be fetched or parsed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DataLoadError {
	/// The request itself failed (network error, no window, bad body).
	#[error("failed to fetch dataset `{path}`: {message}")]
	Fetch {
		/// Requested path.
		path: String,
		/// Browser-reported failure.
		message: String,
	},

	/// The server answered with a non-success status.
	#[error("dataset `{path}` returned HTTP {status}")]
	Status {
		/// Requested path.
		path: String,
		/// HTTP status code.
		status: u16,
	},

	/// The file is empty.
	#[error("dataset has no header row")]
	MissingHeader,

	/// A required column is absent from the header row.
	#[error("required column `{0}` not found in header")]
	MissingColumn(String),

	/// A data row does not reach the source or target column.
	#[error("line {line} has {found} fields, expected at least {expected}")]
	ShortRow {
		/// 1-based line the row starts on.
		line: usize,
		/// Fields present.
		found: usize,
		/// Fields needed to reach both required columns.
		expected: usize,
	},

	/// A data row has more fields than the header.
	#[error("line {line} has {found} fields, header has {expected}")]
	WideRow {
		/// 1-based line the row starts on.
		line: usize,
		/// Fields present.
		found: usize,
		/// Fields in the header row.
		expected: usize,
	},

	/// A quoted field runs to the end of input.
	#[error("unterminated quoted field starting on line {line}")]
	UnterminatedQuote {
		/// 1-based line the quote opens on.
		line: usize,
	},

	/// The header parsed but no data rows follow.
	#[error("dataset contains no references")]
	Empty,
}

/// The decorative background image could not be fetched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AssetLoadError {
	/// The request itself failed.
	#[error("failed to fetch asset `{path}`: {message}")]
	Fetch {
		/// Requested path.
		path: String,
		/// Browser-reported failure.
		message: String,
	},

	/// The server answered with a non-success status.
	#[error("asset `{path}` returned HTTP {status}")]
	Status {
		/// Requested path.
		path: String,
		/// HTTP status code.
		status: u16,
	},
}

/// Any error that aborts viewer startup.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ViewerError {
	/// Dataset failure.
	#[error(transparent)]
	Data(#[from] DataLoadError),

	/// Background asset failure.
	#[error(transparent)]
	Asset(#[from] AssetLoadError),
}
