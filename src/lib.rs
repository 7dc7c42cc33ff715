//! Leptos client-side portfolio app with a force-directed skill network.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::info;

// Only pulled in to enable its `js` backend for `rand` on wasm32.
use getrandom as _;

// Modules
mod components;
mod logging;
mod pages;

// Top-Level pages
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;

pub use crate::components::download::{
	DownloadCounter, LocalStorageCounter, MemoryCounter, ResumeDownload,
};
pub use crate::components::falling_logos::FallingLogos;
pub use crate::components::skill_network::{
	BrowserScheduler, DECLARED_STRENGTH, Edge, EdgeSegment, Emphasis, ForceSimulation,
	FrameCallback, FrameLoop, FrameScheduler, Node, NodeView, SYNTHETIC_STRENGTH, Selection,
	SimulationParameters, Skill, SkillLevel, SkillNetwork, TimeStep, build_graph, connected_ids,
	edge_segments, node_views,
};
pub use crate::logging::ConsoleLogger;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = ConsoleLogger::default().init();
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the homepage and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Skills | Portfolio" />

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
