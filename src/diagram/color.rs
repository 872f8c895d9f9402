use rand::Rng;
use rand::rngs::ThreadRng;

use super::types::Rgba;

/// Supplies one stroke color per arc.
pub trait ColorSource {
	/// The next arc's color.
	fn next_color(&mut self) -> Rgba;
}

/// Uniformly random opaque colors.
#[derive(Clone, Debug)]
pub struct RandomColors<R = ThreadRng> {
	rng: R,
}

impl RandomColors<ThreadRng> {
	/// Unseeded colors from the thread-local generator.
	pub fn new() -> Self {
		Self {
			rng: rand::thread_rng(),
		}
	}
}

impl Default for RandomColors<ThreadRng> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R: Rng> RandomColors<R> {
	/// Colors drawn from a caller-supplied generator.
	pub fn with_rng(rng: R) -> Self {
		Self { rng }
	}
}

impl<R: Rng> ColorSource for RandomColors<R> {
	fn next_color(&mut self) -> Rgba {
		Rgba::opaque(
			self.rng.gen_range(0..=255),
			self.rng.gen_range(0..=255),
			self.rng.gen_range(0..=255),
		)
	}
}

/// Always the same color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedColor(pub Rgba);

impl ColorSource for FixedColor {
	fn next_color(&mut self) -> Rgba {
		self.0
	}
}
