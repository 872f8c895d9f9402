use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::render;
use crate::diagram::Diagram;

/// Canvas height as a fraction of its width when no height is given.
const ASPECT: f64 = 0.5;

#[component]
pub fn ArcDiagramCanvas(
	#[prop(into)] diagram: Signal<Diagram>,
	#[prop(default = 0.5)] line_width: f64,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	let draw = move |diagram: &Diagram| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (w, h) = canvas_size(&canvas, height);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let Some(ctx) = context_2d(&canvas) else {
			warn!("Canvas has no 2d context; skipping draw");
			return;
		};
		render::render(diagram, &ctx, w, h, line_width);
	};

	Effect::new(move |_| {
		if canvas_ref.get().is_none() {
			return;
		}
		// Tracks `diagram`, so every slider change redraws from scratch.
		diagram.with(|d| draw(d));

		if resize_cb.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			diagram.with_untracked(|d| draw(d));
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="arc-diagram-canvas"
			style="display: block; width: 100%; background: transparent;"
		/>
	}
}

fn canvas_size(canvas: &HtmlCanvasElement, height: Option<f64>) -> (f64, f64) {
	let width = canvas
		.parent_element()
		.map(|p| p.client_width() as f64)
		.filter(|w| *w > 0.0)
		.or_else(|| {
			let window: Window = web_sys::window()?;
			window.inner_width().ok()?.as_f64()
		})
		.unwrap_or(800.0);
	(width, height.unwrap_or(width * ASPECT))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}
