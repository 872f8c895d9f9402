/// One row of the dataset: `source` refers to `target`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Reference {
	/// Referring identifier.
	pub source: String,
	/// Referred-to identifier.
	pub target: String,
}

impl Reference {
	/// Builds a reference from anything string-like.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

/// Header names of the two required columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnNames {
	/// Column holding the source identifier.
	pub source: String,
	/// Column holding the target identifier.
	pub target: String,
}

impl ColumnNames {
	/// Column names for a dataset with a custom header.
	pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
		}
	}
}

impl Default for ColumnNames {
	fn default() -> Self {
		Self::new("verse", "ref")
	}
}
