use crate::data::Reference;

use super::arcs::ARC_SAMPLES;
use super::index::IdentifierIndex;

/// The loaded dataset and its axis, built once per session and read-only after.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewerContext {
	references: Vec<Reference>,
	index: IdentifierIndex,
	samples: usize,
}

impl ViewerContext {
	/// Index `references` and take ownership of them.
	pub fn new(references: Vec<Reference>) -> Self {
		let index = IdentifierIndex::build(&references);
		Self {
			references,
			index,
			samples: ARC_SAMPLES,
		}
	}

	/// Override the number of points sampled per arc.
	pub fn with_samples(mut self, samples: usize) -> Self {
		self.samples = samples.max(2);
		self
	}

	/// All references, in file order.
	pub fn references(&self) -> &[Reference] {
		&self.references
	}

	/// Axis positions over the whole dataset.
	pub fn index(&self) -> &IdentifierIndex {
		&self.index
	}

	/// Points per arc.
	pub fn samples(&self) -> usize {
		self.samples
	}

	/// Number of references in the dataset.
	pub fn total(&self) -> usize {
		self.references.len()
	}

	/// Slider bounds for this dataset: `[min(min, total), total]`.
	pub fn slider_bounds(&self, min: usize, default: usize) -> SliderBounds {
		let max = self.total();
		let min = min.min(max);
		SliderBounds {
			min,
			max,
			default: default.clamp(min, max),
		}
	}
}

/// Valid range of the arc-count slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderBounds {
	/// Smallest selectable count.
	pub min: usize,
	/// Largest selectable count, the dataset size.
	pub max: usize,
	/// Initial value.
	pub default: usize,
}

impl SliderBounds {
	/// Pull `requested` into `[min, max]`.
	pub fn clamp(&self, requested: usize) -> usize {
		requested.clamp(self.min, self.max)
	}
}
