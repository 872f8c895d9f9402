use std::f64::consts::PI;

use log::debug;

use super::color::ColorSource;
use super::context::ViewerContext;
use super::types::{Diagram, ReferenceArc};

/// Points sampled along each arc.
pub const ARC_SAMPLES: usize = 100;

/// `n` evenly spaced values from `start` to `end`, both included.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
	match n {
		0 => Vec::new(),
		1 => vec![start],
		_ => {
			let step = (end - start) / (n - 1) as f64;
			(0..n)
				.map(|i| if i == n - 1 { end } else { start + step * i as f64 })
				.collect()
		}
	}
}

/// A half-sine from `start` to `end`.
///
/// `x` and `theta` are spaced independently and paired by sample index, so
/// `y_i = height * sin(theta_i)` is plotted against `x_i`.
pub fn half_sine_arc(start: usize, end: usize, samples: usize, colors: &mut impl ColorSource) -> ReferenceArc {
	let (a, b) = (start as f64, end as f64);
	let mid = (a + b) / 2.0;
	let height = (b - a).abs() / 2.0;

	let xs = linspace(a, b, samples);
	let thetas = linspace(0.0, PI, samples);
	let points = xs
		.into_iter()
		.zip(thetas)
		.map(|(x, theta)| (x, height * theta.sin()))
		.collect();

	ReferenceArc {
		start,
		end,
		mid,
		height,
		points,
		color: colors.next_color(),
	}
}

/// Build the diagram for the first `n` references of `context`.
///
/// `n` is expected to be clamped already; larger values simply draw every
/// reference.
pub fn render(context: &ViewerContext, n: usize, colors: &mut impl ColorSource) -> Diagram {
	let index = context.index();
	let arcs: Vec<ReferenceArc> = context
		.references()
		.iter()
		.take(n)
		.filter_map(|reference| {
			let start = index.position(&reference.source)?;
			let end = index.position(&reference.target)?;
			Some(half_sine_arc(start, end, context.samples(), colors))
		})
		.collect();
	debug!("Rendered {} arcs over {} identifiers", arcs.len(), index.len());
	Diagram::new(arcs)
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::data::Reference;
	use crate::diagram::{FixedColor, RandomColors, Rgba};

	fn sample() -> ViewerContext {
		ViewerContext::new(vec![
			Reference::new("A", "B"),
			Reference::new("B", "C"),
			Reference::new("A", "C"),
		])
	}

	fn black() -> FixedColor {
		FixedColor(Rgba::opaque(0, 0, 0))
	}

	#[test]
	fn linspace_endpoints() {
		assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
		assert_eq!(linspace(3.0, 1.0, 3), vec![3.0, 2.0, 1.0]);
		assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
		assert!(linspace(0.0, 1.0, 0).is_empty());
	}

	#[test]
	fn two_arcs_from_three_references() {
		let diagram = render(&sample(), 2, &mut black());
		assert_eq!(diagram.arcs.len(), 2);

		let first = &diagram.arcs[0];
		assert_eq!((first.start, first.end, first.mid, first.height), (0, 1, 0.5, 0.5));
		let second = &diagram.arcs[1];
		assert_eq!((second.start, second.end, second.mid, second.height), (1, 2, 1.5, 0.5));

		assert!(!diagram.show_axes);
		assert!(!diagram.show_legend);
	}

	#[test]
	fn curve_is_a_half_sine() {
		let arc = half_sine_arc(2, 6, ARC_SAMPLES, &mut black());
		assert_eq!(arc.points.len(), ARC_SAMPLES);
		assert_eq!(arc.points[0], (2.0, 0.0));
		let (last_x, last_y) = arc.points[ARC_SAMPLES - 1];
		assert_eq!(last_x, 6.0);
		assert!(last_y.abs() < 1e-12);
		let peak = arc.points.iter().map(|&(_, y)| y).fold(f64::MIN, f64::max);
		assert!((peak - arc.height).abs() < 1e-3);
		assert!(arc.points.iter().all(|&(_, y)| y >= 0.0));
	}

	#[test]
	fn backward_arc_runs_right_to_left() {
		let arc = half_sine_arc(5, 1, 10, &mut black());
		assert_eq!(arc.height, 2.0);
		assert_eq!(arc.mid, 3.0);
		assert_eq!(arc.points.first().map(|p| p.0), Some(5.0));
		assert_eq!(arc.points.last().map(|p| p.0), Some(1.0));
	}

	#[test]
	fn self_reference_is_flat() {
		let arc = half_sine_arc(4, 4, ARC_SAMPLES, &mut black());
		assert_eq!(arc.height, 0.0);
		assert!(arc.points.iter().all(|&(x, y)| x == 4.0 && y == 0.0));
	}

	#[test]
	fn boundaries() {
		let ctx = sample();
		assert_eq!(render(&ctx, 1, &mut black()).arcs.len(), 1);
		assert_eq!(render(&ctx, ctx.total(), &mut black()).arcs.len(), 3);
	}

	#[test]
	fn geometry_ignores_color_source() {
		let ctx = sample();
		let a = render(&ctx, 3, &mut RandomColors::with_rng(StdRng::seed_from_u64(1)));
		let b = render(&ctx, 3, &mut RandomColors::with_rng(StdRng::seed_from_u64(2)));
		assert!(a.arcs.iter().zip(&b.arcs).all(|(x, y)| x.same_geometry(y)));
	}

	#[test]
	fn honours_sample_count() {
		let ctx = sample().with_samples(7);
		let diagram = render(&ctx, 1, &mut black());
		assert_eq!(diagram.arcs[0].points.len(), 7);
	}
}
