use leptos::either::Either;
use leptos::prelude::*;

use crate::components::details::Details;
use crate::components::force_graph::{ForceGraphCanvas, GraphData, GraphLink, GraphNode};
use crate::components::sidebar::Sidebar;
use crate::data::{DrugGraph, DrugStore, LoadError};

const DRUGS_CSV: &str = include_str!("../../assets/drugs.csv");
const INTERACTIONS_CSV: &str = include_str!("../../assets/interactions.csv");

/// Bucket a drug class into the renderer's color palette.
fn class_group(class: &str) -> Option<u32> {
	if class.is_empty() {
		return None;
	}
	let hash = class
		.bytes()
		.fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
	Some(hash)
}

/// Convert the derived drug graph into the canvas payload.
fn to_graph_data(graph: &DrugGraph) -> GraphData {
	let nodes = graph
		.nodes()
		.map(|node| GraphNode {
			id: node.id.clone(),
			label: node.label.clone(),
			tooltip: node.tooltip.clone(),
			group: class_group(&node.class),
		})
		.collect();
	let links = graph
		.edges()
		.map(|edge| GraphLink {
			source: edge.source.clone(),
			target: edge.target.clone(),
			tooltip: edge.tooltip.clone(),
		})
		.collect();
	GraphData { nodes, links }
}

/// Default Home Page: graph canvas plus search sidebar and details panel.
#[component]
pub fn Home() -> impl IntoView {
	// the store is the session cache: tables are parsed and the graph built
	// exactly once, every later query reads the derived state
	match DrugStore::load(DRUGS_CSV, INTERACTIONS_CSV) {
		Ok(store) => Either::Left(loaded_view(store)),
		Err(err) => Either::Right(load_error_view(err)),
	}
}

fn load_error_view(err: LoadError) -> impl IntoView {
	view! {
		<div class="load-error">
			<h1>"failed to load datasets"</h1>
			<p>{err.to_string()}</p>
		</div>
	}
}

fn loaded_view(store: DrugStore) -> impl IntoView {
	let store = StoredValue::new(store);
	let query = RwSignal::new(String::new());
	let selected = RwSignal::new(None::<String>);

	let names = Signal::derive(move || store.with_value(|s| s.search(&query.get())));
	let detail = Signal::derive(move || {
		selected
			.get()
			.and_then(|name| store.with_value(|s| s.describe(&name)))
	});
	let graph_data = Signal::derive(move || store.with_value(|s| to_graph_data(s.graph())));

	// clicking a canvas node selects it, same as picking it in the dropdown
	let on_select = Callback::new(move |id: String| {
		if let Some(name) = store.with_value(|s| s.name_of(&id).map(str::to_string)) {
			selected.set(Some(name));
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

			<div class="app-layout">
				<Sidebar query=query selected=selected names=names />
				<div class="graph-panel">
					<ForceGraphCanvas data=graph_data on_select=on_select />
					<div class="graph-overlay">
						<h1>"mini knowledge-graph — drugs"</h1>
						<p class="subtitle">
							"Hover a node for details. Click a node or use the sidebar to select a drug."
						</p>
					</div>
				</div>
				<Details detail=detail />
			</div>
		</ErrorBoundary>
	}
}
