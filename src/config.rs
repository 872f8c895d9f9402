//! Viewer settings, provided to the component tree through Leptos context.

use crate::data::ColumnNames;
use crate::diagram::ARC_SAMPLES;

/// Static configuration for one viewer page.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerConfig {
	/// Path of the reference dataset, relative to the page.
	pub dataset_path: String,
	/// Path of the background image, relative to the page.
	pub background_path: String,
	/// Header names of the source and target columns.
	pub columns: ColumnNames,
	/// Lower slider bound, applied when the dataset is large enough.
	pub slider_min: usize,
	/// Initial slider value.
	pub slider_default: usize,
	/// Points sampled along each arc.
	pub samples_per_arc: usize,
	/// Stroke width of every arc, in canvas pixels.
	pub line_width: f64,
	/// Heading shown above the diagram.
	pub diagram_title: String,
}

impl Default for ViewerConfig {
	fn default() -> Self {
		Self {
			dataset_path: "cross_reference.csv".into(),
			background_path: "background.png".into(),
			columns: ColumnNames::default(),
			slider_min: 100,
			slider_default: 1000,
			samples_per_arc: ARC_SAMPLES,
			line_width: 0.5,
			diagram_title: "Bible Cross References".into(),
		}
	}
}
