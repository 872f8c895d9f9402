//! Diagram-to-canvas coordinate mapping.

use crate::diagram::Diagram;

/// Canvas margin around the plotted area, in pixels.
pub const PADDING: f64 = 16.0;

/// Linear map from a data domain onto a pixel range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub domain: (f64, f64),
	pub range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	pub fn apply(&self, value: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		r0 + (value - d0) / (d1 - d0) * (r1 - r0)
	}
}

/// Autoscaled view of a diagram on a `width` x `height` canvas, y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub x: LinearScale,
	pub y: LinearScale,
}

impl Viewport {
	pub fn fit(diagram: &Diagram, width: f64, height: f64) -> Self {
		let (x_min, x_max) = widen(diagram.x_extent().unwrap_or((0.0, 1.0)));
		let (_, y_max) = widen((0.0, diagram.max_height()));
		let pad_x = PADDING.min(width / 4.0);
		let pad_y = PADDING.min(height / 4.0);
		Self {
			x: LinearScale::new((x_min, x_max), (pad_x, width - pad_x)),
			y: LinearScale::new((0.0, y_max), (height - pad_y, pad_y)),
		}
	}

	pub fn project(&self, (x, y): (f64, f64)) -> (f64, f64) {
		(self.x.apply(x), self.y.apply(y))
	}
}

// Zero-width domains fall back to a unit span so nothing divides by zero.
fn widen((lo, hi): (f64, f64)) -> (f64, f64) {
	if hi - lo < f64::EPSILON {
		if lo == 0.0 { (0.0, 1.0) } else { (lo - 0.5, hi + 0.5) }
	} else {
		(lo, hi)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::diagram::{FixedColor, Rgba, half_sine_arc};

	fn diagram(pairs: &[(usize, usize)]) -> Diagram {
		let mut color = FixedColor(Rgba::opaque(0, 0, 0));
		Diagram::new(
			pairs
				.iter()
				.map(|&(s, e)| half_sine_arc(s, e, 10, &mut color))
				.collect(),
		)
	}

	#[test]
	fn corners_map_to_padded_canvas() {
		let view = Viewport::fit(&diagram(&[(0, 4), (2, 10)]), 400.0, 200.0);
		assert_eq!(view.project((0.0, 0.0)), (PADDING, 200.0 - PADDING));
		assert_eq!(view.project((10.0, 4.0)), (400.0 - PADDING, PADDING));
	}

	#[test]
	fn y_axis_points_up() {
		let view = Viewport::fit(&diagram(&[(0, 4)]), 100.0, 100.0);
		let (_, low) = view.project((0.0, 0.0));
		let (_, high) = view.project((0.0, 2.0));
		assert!(high < low);
	}

	#[test]
	fn degenerate_diagrams_stay_finite() {
		for d in [Diagram::default(), diagram(&[(3, 3)])] {
			let view = Viewport::fit(&d, 100.0, 50.0);
			let (x, y) = view.project((3.0, 0.0));
			assert!(x.is_finite() && y.is_finite());
		}
	}

	#[test]
	fn linear_scale_inverts_ranges() {
		let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0));
		assert_eq!(scale.apply(0.0), 100.0);
		assert_eq!(scale.apply(2.5), 75.0);
	}
}
