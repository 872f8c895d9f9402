use cross_reference_arcs::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
