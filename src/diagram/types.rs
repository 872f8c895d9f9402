/// An sRGB color with alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Opacity.
	pub a: f64,
}

impl Rgba {
	/// A fully opaque color.
	pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// CSS `rgba(...)` notation for canvas stroke styles.
	pub fn to_css(&self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// One drawn reference: a half-sine between two axis positions.
#[derive(Clone, Debug, PartialEq)]
pub struct ReferenceArc {
	/// Axis position of the source identifier.
	pub start: usize,
	/// Axis position of the target identifier.
	pub end: usize,
	/// Midpoint between `start` and `end`.
	pub mid: f64,
	/// Peak of the arc, half the distance between its ends.
	pub height: f64,
	/// Sampled `(x, y)` polyline.
	pub points: Vec<(f64, f64)>,
	/// Stroke color, drawn fresh on every render.
	pub color: Rgba,
}

impl ReferenceArc {
	/// True when both arcs occupy the same place, whatever their colors.
	pub fn same_geometry(&self, other: &Self) -> bool {
		self.start == other.start
			&& self.end == other.end
			&& self.mid == other.mid
			&& self.height == other.height
			&& self.points == other.points
	}
}

/// The arcs of one render pass plus presentation flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Diagram {
	/// Arcs in dataset order.
	pub arcs: Vec<ReferenceArc>,
	/// Whether axes are drawn. Always false for arc diagrams.
	pub show_axes: bool,
	/// Whether a legend is drawn. Always false for arc diagrams.
	pub show_legend: bool,
}

impl Diagram {
	/// Wrap arcs in a diagram with hidden axes and no legend.
	pub fn new(arcs: Vec<ReferenceArc>) -> Self {
		Self {
			arcs,
			show_axes: false,
			show_legend: false,
		}
	}

	/// Smallest and largest x over all arcs, `None` when empty.
	pub fn x_extent(&self) -> Option<(f64, f64)> {
		self.arcs
			.iter()
			.map(|arc| {
				let (a, b) = (arc.start as f64, arc.end as f64);
				(a.min(b), a.max(b))
			})
			.reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
	}

	/// Tallest arc height, zero when empty.
	pub fn max_height(&self) -> f64 {
		self.arcs.iter().map(|arc| arc.height).fold(0.0, f64::max)
	}
}
