use web_sys::CanvasRenderingContext2d;

use super::scale::Viewport;
use crate::diagram::Diagram;

/// Clear the canvas and stroke every arc. Axes and legend are never drawn.
pub fn render(diagram: &Diagram, ctx: &CanvasRenderingContext2d, width: f64, height: f64, line_width: f64) {
	ctx.clear_rect(0.0, 0.0, width, height);
	let viewport = Viewport::fit(diagram, width, height);
	ctx.set_line_width(line_width);
	ctx.set_line_join("round");

	for arc in &diagram.arcs {
		let mut points = arc.points.iter().map(|&p| viewport.project(p));
		let Some((x0, y0)) = points.next() else {
			continue;
		};
		ctx.set_stroke_style_str(&arc.color.to_css());
		ctx.begin_path();
		ctx.move_to(x0, y0);
		for (x, y) in points {
			ctx.line_to(x, y);
		}
		ctx.stroke();
	}
}
