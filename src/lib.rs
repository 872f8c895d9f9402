//! Leptos client-side viewer that draws a cross-reference dataset as an arc diagram.
//!
//! The core ([`data`] and [`diagram`]) is browser independent; the page,
//! canvas drawing and startup fetches sit on top of it.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Only needed for its `js` feature, which gives `rand` an entropy source on wasm.
use getrandom as _;

pub mod assets;
pub mod config;
pub mod data;
pub mod diagram;
pub mod error;
pub mod session;

mod components;
mod fetch;
mod pages;

use crate::config::ViewerConfig;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the arc diagram page and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	provide_context(ViewerConfig::default());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Bible Cross References" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Home />
			</Routes>
		</Router>
	}
}
