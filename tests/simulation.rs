//! Layout engine properties over the public API.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use skill_network::{
	DECLARED_STRENGTH, Edge, Emphasis, ForceSimulation, Node, NodeView, Selection, Skill, SkillLevel,
	build_graph, edge_segments, node_views,
};

fn skill(id: &str, proficiency: u8, related: &[&str]) -> Skill {
	Skill {
		id: id.into(),
		name: id.into(),
		icon: String::new(),
		description: String::new(),
		level: SkillLevel::Advanced,
		category: "frontend".into(),
		proficiency,
		related_skills: (!related.is_empty()).then(|| related.iter().map(|s| s.to_string()).collect()),
	}
}

fn five_skills() -> Vec<Skill> {
	vec![
		skill("react", 85, &["redux"]),
		skill("redux", 75, &[]),
		skill("css", 90, &[]),
		skill("html", 95, &[]),
		skill("git", 85, &[]),
	]
}

fn assert_contained(sim: &ForceSimulation) {
	for n in sim.nodes() {
		assert!(
			n.x >= n.radius && n.x <= sim.width() - n.radius,
			"{} x = {} outside [{}, {}]",
			n.id,
			n.x,
			n.radius,
			sim.width() - n.radius
		);
		assert!(
			n.y >= n.radius && n.y <= sim.height() - n.radius,
			"{} y = {} outside [{}, {}]",
			n.id,
			n.y,
			n.radius,
			sim.height() - n.radius
		);
	}
}

fn assert_finite(sim: &ForceSimulation) {
	for n in sim.nodes() {
		assert!(
			n.x.is_finite() && n.y.is_finite() && n.vx.is_finite() && n.vy.is_finite(),
			"{} went non-finite: {n:?}",
			n.id
		);
	}
}

#[test]
fn react_redux_scenario() {
	let mut rng = StdRng::seed_from_u64(2024);
	let (nodes, edges) = build_graph(&five_skills(), 900.0, 600.0, &mut rng);

	assert!(edges.contains(&Edge::new("react", "redux", DECLARED_STRENGTH)));

	let mut selection = Selection::default();
	selection.on_node_click("react");
	assert!(selection.connected(&edges).iter().any(|id| id == "redux"));

	let mut sim = ForceSimulation::new(nodes, edges, 900.0, 600.0);
	for _ in 0..300 {
		sim.step();
		assert_contained(&sim);
	}
}

#[test]
fn coincident_pair_separates_on_first_step() {
	let nodes = vec![
		Node::new(skill("a", 0, &[]), 100.0, 100.0),
		Node::new(skill("b", 0, &[]), 100.0, 100.0),
	];
	assert_eq!(nodes[0].radius, 30.0);
	let mut sim = ForceSimulation::new(nodes, vec![], 600.0, 400.0);
	sim.step();

	assert_finite(&sim);
	let (a, b) = (&sim.nodes()[0], &sim.nodes()[1]);
	assert!((a.x - b.x).abs() + (a.y - b.y).abs() > 1.0);
}

#[test]
fn ten_thousand_frames_from_a_single_point() {
	let skills: Vec<Skill> = (0..12)
		.map(|i| skill(&format!("s{i}"), (i * 8) as u8, &[]))
		.collect();
	let mut rng = StdRng::seed_from_u64(99);
	let (_, edges) = build_graph(&skills, 800.0, 600.0, &mut rng);
	let nodes: Vec<Node> = skills
		.into_iter()
		.map(|s| Node::new(s, 400.0, 300.0))
		.collect();

	let mut sim = ForceSimulation::new(nodes, edges, 800.0, 600.0);
	for _ in 0..10_000 {
		sim.step();
	}
	assert_finite(&sim);
	assert_contained(&sim);
	assert_eq!(sim.frame(), 10_000);
}

#[test]
fn lone_node_velocity_decays() {
	let mut node = Node::new(skill("solo", 50, &[]), 300.0, 300.0);
	node.vx = 12.0;
	node.vy = -8.0;
	let mut sim = ForceSimulation::new(vec![node], vec![], 800.0, 800.0);

	for frame in 1..=200 {
		sim.step();
		let n = &sim.nodes()[0];
		let expected = 0.9_f64.powi(frame);
		assert!((n.vx - 12.0 * expected).abs() < 1e-9, "frame {frame}: vx = {}", n.vx);
		assert!((n.vy + 8.0 * expected).abs() < 1e-9, "frame {frame}: vy = {}", n.vy);
	}
	let n = &sim.nodes()[0];
	assert!(n.vx.abs() < 1e-6 && n.vy.abs() < 1e-6);
	// 12 / (1 - 0.9) units travelled in total
	assert!((n.x - 420.0).abs() < 1e-3, "x = {}", n.x);
}

#[test]
fn dangling_edge_is_harmless() {
	let nodes = vec![
		Node::new(skill("a", 50, &[]), 200.0, 200.0),
		Node::new(skill("b", 50, &[]), 400.0, 200.0),
	];
	let edges = vec![Edge::new("a", "b", 0.5), Edge::new("a", "nowhere", 0.5)];
	let mut sim = ForceSimulation::new(nodes, edges, 600.0, 400.0);
	for _ in 0..50 {
		sim.step();
	}
	assert_finite(&sim);

	let segments = edge_segments(&node_views(sim.nodes()), sim.edges(), &Selection::default());
	assert_eq!(segments.len(), 1);
}

#[test]
fn selection_toggles() {
	let mut selection = Selection::default();
	selection.on_node_click("a");
	selection.on_node_click("a");
	assert_eq!(selection.selected, None);
	selection.on_node_click("a");
	selection.on_node_click("b");
	assert_eq!(selection.selected.as_deref(), Some("b"));
}

#[test]
fn emphasis_follows_selection() {
	let edges = vec![Edge::new("react", "redux", DECLARED_STRENGTH)];
	let mut selection = Selection::default();
	selection.on_node_click("react");
	let connected = selection.connected(&edges);

	assert_eq!(Emphasis::of("react", &selection, &connected), Emphasis::Selected);
	assert_eq!(Emphasis::of("redux", &selection, &connected), Emphasis::Connected);
	assert_eq!(Emphasis::of("git", &selection, &connected).opacity(), 0.4);

	let view = NodeView {
		id: "react".into(),
		x: 100.0,
		y: 80.0,
		radius: 38.5,
	};
	assert_eq!((view.left(), view.top(), view.size()), (61.5, 41.5, 77.0));
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(64))]

	#[test]
	fn nodes_stay_inside_and_finite(
		positions in prop::collection::vec((-500.0f64..1500.0, -500.0f64..1500.0), 1..16),
		proficiencies in prop::collection::vec(0u8..=100, 16),
		width in 200.0f64..1200.0,
		height in 200.0f64..900.0,
		seed in any::<u64>(),
		frames in 1usize..200,
	) {
		let skills: Vec<Skill> = positions
			.iter()
			.enumerate()
			.map(|(i, _)| skill(&format!("s{i}"), proficiencies[i], &[]))
			.collect();
		let mut rng = StdRng::seed_from_u64(seed);
		let (_, edges) = build_graph(&skills, width, height, &mut rng);
		let nodes: Vec<Node> = skills
			.into_iter()
			.zip(&positions)
			.map(|(s, &(x, y))| Node::new(s, x, y))
			.collect();

		let mut sim = ForceSimulation::new(nodes, edges, width, height);
		for _ in 0..frames {
			sim.step();
		}
		for n in sim.nodes() {
			prop_assert!(n.x.is_finite() && n.y.is_finite() && n.vx.is_finite() && n.vy.is_finite());
			prop_assert!(n.x >= n.radius && n.x <= width - n.radius);
			prop_assert!(n.y >= n.radius && n.y <= height - n.radius);
		}
	}
}
