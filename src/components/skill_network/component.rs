use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use web_sys::MouseEvent;

use super::build::build_graph;
use super::frame_loop::{BrowserScheduler, FrameLoop};
use super::interaction::Selection;
use super::render::{EdgeSegment, Emphasis, NodeView, edge_segments, node_views};
use super::simulation::{ForceSimulation, SimulationParameters};
use super::types::{Edge, Skill};

/// Interactive force-directed network of skills.
///
/// Edges are drawn as SVG lines, nodes as absolutely positioned circles that
/// carry their own click and hover handlers. Changing `skills`, `width` or
/// `height` rebuilds the graph from scratch and clears the selection.
#[component]
pub fn SkillNetwork(
	#[prop(into)] skills: Signal<Vec<Skill>>,
	#[prop(into)] width: Signal<f64>,
	#[prop(into)] height: Signal<f64>,
	#[prop(optional)] parameters: SimulationParameters,
) -> impl IntoView {
	let simulation: Rc<RefCell<Option<ForceSimulation>>> = Rc::new(RefCell::new(None));
	let layout = RwSignal::new(Vec::<NodeView>::new());
	let edges = RwSignal::new(Vec::<Edge>::new());
	let selection = RwSignal::new(Selection::default());
	let frame_loop = StoredValue::new_local(None::<FrameLoop<BrowserScheduler>>);

	let sim_build = simulation.clone();
	Effect::new(move |_| {
		let (skills, w, h) = (skills.get(), width.get(), height.get());
		let (nodes, new_edges) = build_graph(&skills, w, h, &mut rand::thread_rng());
		let sim = ForceSimulation::with_parameters(nodes, new_edges.clone(), w, h, parameters);
		info!(
			"skill network rebuilt: {} nodes, {} edges on {w}x{h}",
			sim.nodes().len(),
			new_edges.len()
		);
		layout.set(node_views(sim.nodes()));
		edges.set(new_edges);
		selection.update(Selection::clear);
		*sim_build.borrow_mut() = Some(sim);
	});

	let sim_frame = simulation.clone();
	match BrowserScheduler::new() {
		Some(scheduler) => {
			let handle = FrameLoop::start(scheduler, move |elapsed| {
				if let Some(ref mut sim) = *sim_frame.borrow_mut() {
					sim.advance(elapsed);
					layout.set(node_views(sim.nodes()));
				}
			});
			frame_loop.set_value(Some(handle));
		}
		None => warn!("no window available, skill network will not animate"),
	}

	on_cleanup(move || {
		frame_loop.try_update_value(|handle| {
			if let Some(handle) = handle.take() {
				handle.cancel();
				debug!("skill network frame loop cancelled");
			}
		});
	});

	let connected = Signal::derive(move || selection.with(|s| edges.with(|e| s.connected(e))));
	let segments = Memo::new(move |_| {
		layout.with(|views| edges.with(|e| selection.with(|s| edge_segments(views, e, s))))
	});
	let segment_attr = move |i: usize, pick: fn(&EdgeSegment) -> String| {
		move || segments.with(|all| all.get(i).map(pick))
	};

	let segment_keys = move || segments.with(|all| segment_indices(all));
	let node_keys = move || layout.with(|views| node_ids(views));

	let selected_skill = move || {
		let id = selection.with(|s| s.selected.clone())?;
		skills.with(|all| all.iter().find(|s| s.id == id).cloned())
	};

	view! {
		<div
			class="skill-network relative w-full h-full overflow-hidden rounded-xl border border-border/30 bg-card/20 backdrop-blur-sm"
			style:min-height=move || format!("{}px", height.get())
		>
			<svg class="absolute inset-0 w-full h-full pointer-events-none">
				<For
					each=segment_keys
					key=|i| *i
					let:i
				>
					<line
						x1=segment_attr(i, |s| s.x1.to_string())
						y1=segment_attr(i, |s| s.y1.to_string())
						x2=segment_attr(i, |s| s.x2.to_string())
						y2=segment_attr(i, |s| s.y2.to_string())
						stroke=segment_attr(i, |s| s.stroke().to_string())
						stroke-width=segment_attr(i, |s| s.stroke_width().to_string())
						stroke-opacity=segment_attr(i, |s| s.stroke_opacity().to_string())
					/>
				</For>
			</svg>

			<For
				each=node_keys
				key=|id| id.clone()
				let:id
			>
				<SkillNode id skills layout selection connected />
			</For>

			{move || {
				selected_skill().map(|skill| view! { <SkillDetails skill skills selection connected /> })
			}}

			<Show when=move || selection.with(|s| s.selected.is_none())>
				<div class="absolute bottom-4 left-4 right-4 text-center text-sm text-muted-foreground bg-card/50 backdrop-blur-sm p-2 rounded-lg">
					"Click on a skill to see details and connections"
				</div>
			</Show>
		</div>
	}
}

/// Row keys for the edge lines; attributes look segments up by index.
fn segment_indices(segments: &[EdgeSegment]) -> Vec<usize> {
	(0..segments.len()).collect()
}

fn node_ids(views: &[NodeView]) -> Vec<String> {
	views.iter().map(|v| v.id.clone()).collect()
}

#[component]
fn SkillNode(
	id: String,
	skills: Signal<Vec<Skill>>,
	layout: RwSignal<Vec<NodeView>>,
	selection: RwSignal<Selection>,
	connected: Signal<Vec<String>>,
) -> impl IntoView {
	let Some(skill) = skills.with_untracked(|all| all.iter().find(|s| s.id == id).cloned()) else {
		return ().into_any();
	};

	let (id_style, id_class, id_label) = (id.clone(), id.clone(), id.clone());
	let (id_click, id_hover) = (id.clone(), id);

	let emphasis = move |id: &str| selection.with(|s| connected.with(|c| Emphasis::of(id, s, c)));

	let style = move || {
		let Some(view) = layout.with(|views| views.iter().find(|v| v.id == id_style).cloned()) else {
			return "display: none;".to_string();
		};
		let emphasis = emphasis(&id_style);
		format!(
			"left: {}px; top: {}px; width: {}px; height: {}px; background-color: {}; opacity: {}; border: {};",
			view.left(),
			view.top(),
			view.size(),
			view.size(),
			emphasis.background(),
			emphasis.opacity(),
			emphasis.border(),
		)
	};

	let class = move || {
		let hovered = selection.with(|s| s.is_hovered(&id_class));
		format!(
			"absolute flex items-center justify-center rounded-full cursor-pointer transition-shadow duration-300 {}{}",
			emphasis(&id_class).z_class(),
			if hovered { " scale-110" } else { "" }
		)
	};

	let label_class = move || {
		let visible = selection.with(|s| s.is_selected(&id_label) || s.is_hovered(&id_label));
		format!(
			"absolute -bottom-8 left-1/2 -translate-x-1/2 whitespace-nowrap px-2 py-1 rounded-md text-xs font-medium bg-card/80 {}",
			if visible { "opacity-100" } else { "opacity-0" }
		)
	};

	view! {
		<div
			class=class
			style=style
			on:click=move |_: MouseEvent| selection.update(|s| s.on_node_click(&id_click))
			on:mouseenter=move |_: MouseEvent| selection.update(|s| s.on_node_hover_start(&id_hover))
			on:mouseleave=move |_: MouseEvent| selection.update(Selection::on_node_hover_end)
		>
			<img src=skill.icon.clone() alt=skill.name.clone() class="w-1/2 h-1/2 object-contain" />
			<div class=label_class>{skill.name.clone()}</div>
		</div>
	}
	.into_any()
}

#[component]
fn SkillDetails(
	skill: Skill,
	skills: Signal<Vec<Skill>>,
	selection: RwSignal<Selection>,
	connected: Signal<Vec<String>>,
) -> impl IntoView {
	let related = move || {
		let mut ids = connected.get();
		let mut seen = std::collections::HashSet::new();
		ids.retain(|id| seen.insert(id.clone()));
		skills.with(|all| {
			ids.iter()
				.filter_map(|id| all.iter().find(|s| &s.id == id))
				.map(|s| (s.id.clone(), s.name.clone()))
				.collect::<Vec<_>>()
		})
	};

	view! {
		<div class="absolute top-4 right-4 w-80 max-w-[calc(100%-2rem)] bg-card/90 backdrop-blur-md p-4 rounded-xl border border-border shadow-lg z-30">
			<div class="flex items-start gap-4">
				<div class="flex-shrink-0 bg-card rounded-full p-2 border border-border">
					<img src=skill.icon.clone() alt=skill.name.clone() class="w-10 h-10 object-contain" />
				</div>
				<div class="flex-grow">
					<div class="flex items-center gap-2">
						<h3 class="text-lg font-bold">{skill.name.clone()}</h3>
						<span class=format!("text-xs capitalize rounded-full border px-2 {}", skill.level.badge_class())>
							{skill.level.label()}
						</span>
					</div>
					<p class="text-sm text-muted-foreground mt-1">{skill.description.clone()}</p>

					<div class="mt-3">
						<div class="flex justify-between text-xs mb-1">
							<span>"Proficiency"</span>
							<span>{format!("{}%", skill.proficiency.min(100))}</span>
						</div>
						<div class="w-full h-2 bg-muted rounded-full overflow-hidden">
							<div
								class=format!("h-full transition-all duration-700 {}", skill.level.bar_class())
								style=format!("width: {}%", skill.proficiency.min(100))
							/>
						</div>
					</div>

					<Show when=move || !connected.with(Vec::is_empty)>
						<div class="mt-3">
							<span class="text-xs font-medium">"Related Skills:"</span>
							<div class="flex flex-wrap gap-1 mt-1">
								{move || {
									related()
										.into_iter()
										.map(|(id, name)| {
											view! {
												<span
													class="text-xs cursor-pointer rounded-full bg-secondary px-2 py-0.5"
													on:click=move |ev: MouseEvent| {
														ev.stop_propagation();
														selection.update(|s| s.on_node_click(&id));
													}
												>
													{name}
												</span>
											}
										})
										.collect_view()
								}}
							</div>
						</div>
					</Show>
				</div>
			</div>
		</div>
	}
}
