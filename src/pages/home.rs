use std::sync::Arc;

use leptos::prelude::*;

use crate::assets::background_css;
use crate::components::arc_diagram::ArcDiagramCanvas;
use crate::config::ViewerConfig;
use crate::diagram::{ColorSource, Diagram, RandomColors, SliderBounds, ViewerContext, render};
use crate::session::{Session, load_session};

const TOTAL_BOOKS: u32 = 66;
const TOTAL_VERSES: u32 = 31_102;
const TOTAL_AUTHORS: u32 = 40;

const PAGE_CSS: &str = r#"
.viewer-page {
	display: grid;
	grid-template-columns: 3fr 1fr;
	gap: 2rem;
	padding: 2rem 3rem 4rem;
	min-height: 100vh;
	box-sizing: border-box;
}
.side-column {
	padding-top: 12rem;
}
.slider-row {
	display: flex;
	align-items: center;
	gap: 1rem;
}
.slider-row input {
	flex: 1;
}
.footer {
	position: fixed;
	bottom: 0;
	right: 0;
	width: 100%;
	text-align: right;
	font-size: small;
	padding: 0.25rem 1rem;
	color: white;
}
"#;

/// Rebuilds the diagram in full, colors included, only when the slider moves.
/// Other readers, such as a canvas redraw on resize, reuse the last result.
fn diagram_memo<C, F>(
	context: Arc<ViewerContext>,
	bounds: SliderBounds,
	count: Signal<usize>,
	colors: F,
) -> Memo<Diagram>
where
	C: ColorSource,
	F: Fn() -> C + Send + Sync + 'static,
{
	Memo::new(move |_| render(&context, bounds.clamp(count.get()), &mut colors()))
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = use_context::<ViewerConfig>().unwrap_or_default();
	let startup = LocalResource::new({
		let config = config.clone();
		move || {
			let config = config.clone();
			async move { load_session(&config).await }
		}
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<Suspense fallback=|| view! { <p class="loading">"Loading cross references..."</p> }>
				{move || {
					startup
						.get()
						.map(|loaded| loaded.map(|session| view! { <Viewer session=session /> }))
				}}
			</Suspense>
		</ErrorBoundary>
	}
}

/// The loaded page: diagram column plus narrative side column.
#[component]
fn Viewer(session: Session) -> impl IntoView {
	let config = use_context::<ViewerConfig>().unwrap_or_default();
	let Session {
		context,
		background,
	} = session;

	let total = context.total();
	let bounds = context.slider_bounds(config.slider_min, config.slider_default);
	let (count, set_count) = signal(bounds.default);

	let diagram = diagram_memo(context, bounds, count.into(), RandomColors::new);

	view! {
		<style>{background_css(&background)}{PAGE_CSS}</style>

		<div class="viewer-page">
			<main class="main-column">
				<h1>"Visualizing the Cross References of the Bible"</h1>
				<p class="total">{format!("Total references in the Bible: {total}")}</p>

				<label for="edge-count">
					"Number of edges to plot (limited so the diagram loads faster)"
				</label>
				<div class="slider-row">
					<input
						id="edge-count"
						type="range"
						min=bounds.min.to_string()
						max=bounds.max.to_string()
						step="1"
						prop:value=move || count.get().to_string()
						on:input=move |ev| {
							if let Ok(value) = event_target_value(&ev).parse::<usize>() {
								set_count.set(bounds.clamp(value));
							}
						}
					/>
					<span class="edge-count-value">{move || count.get()}</span>
				</div>

				<h3 class="diagram-title">{config.diagram_title.clone()}</h3>
				<ArcDiagramCanvas diagram=diagram line_width=config.line_width />

				<p>
					"This diagram shows the connections between different verses of the Bible. "
					"Each colored line is a cross reference between two verses. "
					"The Bible is a highly interconnected text, and these connections show how "
					"different parts of scripture refer to and complement one another."
				</p>
			</main>

			<aside class="side-column">
				<h3>"The Interconnection of the Bible"</h3>
				<p>
					"Each colored line in the diagram is a cross reference between two verses. "
					"These connections show how different parts of scripture refer to and "
					"complement one another."
				</p>
				<p>
					{format!(
						"The Bible contains {TOTAL_BOOKS} books and roughly {TOTAL_VERSES} verses. \
						 It was written by about {TOTAL_AUTHORS} different authors over many centuries, \
						 covering a wide range of themes and stories, and still shows a striking unity \
						 and coherence in how its parts connect."
					)}
				</p>
				<p>
					"The 612,591 cross references of the Bible are the links between verses, "
					"chapters and books where one passage cites or relates to another: direct "
					"quotations, allusions, thematic parallels, and prophecies with their fulfillments."
				</p>
				<p>
					"A well known example is the cross reference arc diagram by Christoph Römhild "
					"and Chris Harrison, which draws every one of these connections in a single image."
				</p>
				<p>
					"Listing all of them individually is impractical, but diagrams like this one "
					"and Bible study software such as Logos, Accordance or BibleWorks make it possible "
					"to explore the connections in detail."
				</p>
			</aside>
		</div>

		<div class="footer">"by: Lennon Santos"</div>
	}
}
