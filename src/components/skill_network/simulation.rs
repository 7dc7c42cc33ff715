use std::collections::HashMap;
use std::f64::consts::TAU;

use log::debug;

use super::types::{Edge, Node};

/// Distances below this are treated as coincident.
const MIN_DISTANCE: f64 = 1e-6;
const REFERENCE_FPS: f64 = 60.0;
const MIN_TIME_SCALE: f64 = 0.25;
const MAX_TIME_SCALE: f64 = 3.0;

/// How a frame's elapsed wall-clock time affects the integration step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeStep {
	/// One fixed step per frame; motion speed follows the display refresh rate.
	#[default]
	PerFrame,
	/// Step scaled by `elapsed * 60`, so motion looks the same at any refresh rate.
	Elapsed,
}

/// Force constants for [`ForceSimulation`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
	/// Extra gap kept between node rims before repulsion kicks in.
	pub collision_margin: f64,
	/// Repulsion impulse per pixel of overlap, relative to distance.
	pub repulsion: f64,
	/// Rest length of every edge spring.
	pub spring_length: f64,
	/// Spring impulse per pixel of stretch, scaled by edge strength.
	pub spring_stiffness: f64,
	/// Gravity dead zone radius, as a fraction of the smaller dimension.
	pub gravity_extent: f64,
	/// Pull toward the centre outside the dead zone.
	pub gravity: f64,
	/// Per-frame velocity multiplier.
	pub damping: f64,
	/// Fraction of speed kept after hitting a wall.
	pub restitution: f64,
	/// How elapsed time scales each step.
	pub time_step: TimeStep,
}

impl Default for SimulationParameters {
	fn default() -> Self {
		Self {
			collision_margin: 20.0,
			repulsion: 0.05,
			spring_length: 100.0,
			spring_stiffness: 0.01,
			gravity_extent: 0.4,
			gravity: 0.02,
			damping: 0.9,
			restitution: 0.5,
			time_step: TimeStep::PerFrame,
		}
	}
}

/// An edge resolved to node indices.
#[derive(Clone, Copy, Debug)]
struct Link {
	a: usize,
	b: usize,
	strength: f64,
}

/// Explicit Euler force layout over a fixed node and edge set.
///
/// Each step accumulates repulsion, edge springs and centre gravity from the
/// positions at the start of the step, integrates, damps, then clamps every
/// node inside the canvas.
pub struct ForceSimulation {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	links: Vec<Link>,
	width: f64,
	height: f64,
	params: SimulationParameters,
	impulses: Vec<(f64, f64)>,
	frame: u64,
}

impl ForceSimulation {
	/// Simulation with the default [`SimulationParameters`].
	pub fn new(nodes: Vec<Node>, edges: Vec<Edge>, width: f64, height: f64) -> Self {
		Self::with_parameters(nodes, edges, width, height, SimulationParameters::default())
	}

	/// Edges are resolved to node indices here. Dangling edges and self loops
	/// stay in [`ForceSimulation::edges`] but exert no force.
	pub fn with_parameters(
		nodes: Vec<Node>,
		edges: Vec<Edge>,
		width: f64,
		height: f64,
		params: SimulationParameters,
	) -> Self {
		let index: HashMap<&str, usize> = nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.as_str(), i))
			.collect();

		let links: Vec<Link> = edges
			.iter()
			.filter_map(|edge| {
				let (&a, &b) = (index.get(edge.source.as_str())?, index.get(edge.target.as_str())?);
				(a != b).then_some(Link {
					a,
					b,
					strength: edge.strength,
				})
			})
			.collect();
		if links.len() < edges.len() {
			debug!(
				"ignoring {} dangling or looping edges",
				edges.len() - links.len()
			);
		}

		Self {
			impulses: vec![(0.0, 0.0); nodes.len()],
			nodes,
			edges,
			links,
			width,
			height,
			params,
			frame: 0,
		}
	}

	/// Nodes in their current state.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// Every edge, including ones that exert no force.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Looks a node up by id.
	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Canvas width in pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Canvas height in pixels.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Constants in use.
	pub fn parameters(&self) -> &SimulationParameters {
		&self.params
	}

	/// Number of steps taken so far.
	pub fn frame(&self) -> u64 {
		self.frame
	}

	/// Advances one fixed frame.
	pub fn step(&mut self) {
		self.step_scaled(1.0);
	}

	/// Advances one frame that took `elapsed` seconds, honouring the
	/// configured [`TimeStep`].
	pub fn advance(&mut self, elapsed: f64) {
		let scale = match self.params.time_step {
			TimeStep::PerFrame => 1.0,
			TimeStep::Elapsed => time_scale(elapsed),
		};
		self.step_scaled(scale);
	}

	fn step_scaled(&mut self, scale: f64) {
		if self.nodes.is_empty() {
			return;
		}
		self.impulses.clear();
		self.impulses.resize(self.nodes.len(), (0.0, 0.0));

		self.accumulate_repulsion();
		self.accumulate_springs();
		self.accumulate_gravity();
		self.integrate(scale);
		self.frame += 1;
	}

	fn accumulate_repulsion(&mut self) {
		let p = &self.params;
		for i in 0..self.nodes.len() {
			for j in (i + 1)..self.nodes.len() {
				let (a, b) = (&self.nodes[i], &self.nodes[j]);
				let min_distance = a.radius + b.radius + p.collision_margin;
				let (dx, dy, d) = separation(a.x - b.x, a.y - b.y, i, j);
				if d >= min_distance {
					continue;
				}
				let force = (min_distance - d) / d * p.repulsion;
				apply_pair(&mut self.impulses, i, j, dx * force, dy * force);
			}
		}
	}

	fn accumulate_springs(&mut self) {
		let p = &self.params;
		for link in &self.links {
			let (a, b) = (&self.nodes[link.a], &self.nodes[link.b]);
			let (dx, dy, d) = separation(b.x - a.x, b.y - a.y, link.a, link.b);
			let force = (d - p.spring_length) / d * p.spring_stiffness * link.strength;
			apply_pair(&mut self.impulses, link.a, link.b, dx * force, dy * force);
		}
	}

	fn accumulate_gravity(&mut self) {
		let p = &self.params;
		let (cx, cy) = (self.width / 2.0, self.height / 2.0);
		let max_distance = self.width.min(self.height) * p.gravity_extent;
		for (node, impulse) in self.nodes.iter().zip(self.impulses.iter_mut()) {
			let (dx, dy) = (cx - node.x, cy - node.y);
			let d = dx.hypot(dy);
			if d <= max_distance {
				continue;
			}
			let force = (d - max_distance) / d * p.gravity;
			let (fx, fy) = (dx * force, dy * force);
			if fx.is_finite() && fy.is_finite() {
				impulse.0 += fx;
				impulse.1 += fy;
			}
		}
	}

	fn integrate(&mut self, scale: f64) {
		let p = &self.params;
		let damping = p.damping.powf(scale);
		for (node, &(ix, iy)) in self.nodes.iter_mut().zip(self.impulses.iter()) {
			node.vx = finite_or_zero(node.vx + ix * scale);
			node.vy = finite_or_zero(node.vy + iy * scale);
			node.x += node.vx * scale;
			node.y += node.vy * scale;
			node.vx *= damping;
			node.vy *= damping;

			(node.x, node.vx) = clamp_axis(node.x, node.vx, node.radius, self.width, p.restitution);
			(node.y, node.vy) = clamp_axis(node.y, node.vy, node.radius, self.height, p.restitution);
		}
	}
}

/// Vector, length pair for the offset `(dx, dy)` between nodes `i` and `j`.
/// Coincident nodes get a fixed direction derived from their indices and a
/// tiny non-zero length, so the ratio forces stay finite and still separate
/// them.
fn separation(dx: f64, dy: f64, i: usize, j: usize) -> (f64, f64, f64) {
	let d = dx.hypot(dy);
	if d >= MIN_DISTANCE {
		return (dx, dy, d);
	}
	let angle = ((i as f64) * 0.618_034 + (j as f64) * 0.414_214) * TAU;
	(
		angle.cos() * MIN_DISTANCE,
		angle.sin() * MIN_DISTANCE,
		MIN_DISTANCE,
	)
}

/// Adds `(fx, fy)` to node `i` and subtracts it from node `j`.
fn apply_pair(impulses: &mut [(f64, f64)], i: usize, j: usize, fx: f64, fy: f64) {
	if !fx.is_finite() || !fy.is_finite() {
		debug!("skipping non-finite impulse between nodes {i} and {j}");
		return;
	}
	impulses[i].0 += fx;
	impulses[i].1 += fy;
	impulses[j].0 -= fx;
	impulses[j].1 -= fy;
}

fn finite_or_zero(v: f64) -> f64 {
	if v.is_finite() { v } else { 0.0 }
}

/// Keeps a coordinate in `[radius, extent - radius]`, bouncing the velocity
/// off whichever wall was hit.
fn clamp_axis(pos: f64, vel: f64, radius: f64, extent: f64, restitution: f64) -> (f64, f64) {
	if extent <= 2.0 * radius || !pos.is_finite() {
		// no room to move on this axis
		return (extent / 2.0, 0.0);
	}
	if pos < radius {
		(radius, vel.abs() * restitution)
	} else if pos > extent - radius {
		(extent - radius, -vel.abs() * restitution)
	} else {
		(pos, vel)
	}
}

fn time_scale(elapsed: f64) -> f64 {
	if !elapsed.is_finite() || elapsed <= 0.0 {
		return 1.0;
	}
	(elapsed * REFERENCE_FPS).clamp(MIN_TIME_SCALE, MAX_TIME_SCALE)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::skill_network::types::{Skill, SkillLevel};

	fn node(id: &str, x: f64, y: f64) -> Node {
		Node::new(
			Skill {
				id: id.into(),
				name: id.into(),
				icon: String::new(),
				description: String::new(),
				level: SkillLevel::Beginner,
				category: "tools".into(),
				proficiency: 0,
				related_skills: None,
			},
			x,
			y,
		)
	}

	fn approx(a: f64, b: f64) -> bool {
		(a - b).abs() < 1e-9
	}

	#[test]
	fn close_nodes_repel_symmetrically() {
		let nodes = vec![node("a", 490.0, 500.0), node("b", 510.0, 500.0)];
		let mut sim = ForceSimulation::new(nodes, vec![], 1000.0, 1000.0);
		sim.step();

		// min distance 80, d = 20 -> force 0.15, impulse 3 units
		let (a, b) = (&sim.nodes()[0], &sim.nodes()[1]);
		assert!(approx(a.x, 487.0), "a.x = {}", a.x);
		assert!(approx(b.x, 513.0), "b.x = {}", b.x);
		assert!(approx(a.vx, -2.7));
		assert!(approx(b.vx, 2.7));
		assert_eq!(a.y, 500.0);
	}

	#[test]
	fn separated_nodes_feel_no_repulsion() {
		let nodes = vec![node("a", 400.0, 500.0), node("b", 600.0, 500.0)];
		let mut sim = ForceSimulation::new(nodes, vec![], 1000.0, 1000.0);
		sim.step();
		assert_eq!(sim.nodes()[0].x, 400.0);
		assert_eq!(sim.nodes()[1].x, 600.0);
	}

	#[test]
	fn spring_pulls_toward_rest_length() {
		let nodes = vec![node("a", 850.0, 1000.0), node("b", 1150.0, 1000.0)];
		let edges = vec![Edge::new("a", "b", 0.5)];
		let mut sim = ForceSimulation::new(nodes, edges, 2000.0, 2000.0);
		sim.step();

		// (300 - 100) / 300 * 0.01 * 0.5 * 300 = 1
		assert!(approx(sim.nodes()[0].x, 851.0));
		assert!(approx(sim.nodes()[1].x, 1149.0));
	}

	#[test]
	fn compressed_spring_pushes_out() {
		let nodes = vec![node("a", 960.0, 1000.0), node("b", 1040.0, 1000.0)];
		let edges = vec![Edge::new("a", "b", 0.5)];
		let params = SimulationParameters {
			repulsion: 0.0,
			..Default::default()
		};
		let mut sim = ForceSimulation::with_parameters(nodes, edges, 2000.0, 2000.0, params);
		sim.step();
		assert!(sim.nodes()[0].x < 960.0);
		assert!(sim.nodes()[1].x > 1040.0);
	}

	#[test]
	fn gravity_has_dead_zone() {
		// 0.4 * 1000 = 400 unit dead zone around (500, 500)
		let mut sim = ForceSimulation::new(vec![node("a", 500.0, 850.0)], vec![], 1000.0, 1000.0);
		sim.step();
		assert_eq!(sim.nodes()[0].y, 850.0);

		let mut sim = ForceSimulation::new(vec![node("a", 950.0, 950.0)], vec![], 1000.0, 1000.0);
		sim.step();
		let a = &sim.nodes()[0];
		assert!(a.x < 950.0 && a.y < 950.0);
		assert!(approx(a.x, a.y));
	}

	#[test]
	fn walls_bounce_inelastically() {
		let params = SimulationParameters {
			gravity: 0.0,
			..Default::default()
		};
		let mut low = node("a", 35.0, 500.0);
		low.vx = -20.0;
		let mut high = node("b", 965.0, 200.0);
		high.vx = 20.0;
		let mut sim = ForceSimulation::with_parameters(vec![low, high], vec![], 1000.0, 1000.0, params);
		sim.step();

		let (low, high) = (&sim.nodes()[0], &sim.nodes()[1]);
		assert_eq!(low.x, 30.0);
		assert!(approx(low.vx, 9.0));
		assert_eq!(high.x, 970.0);
		assert!(approx(high.vx, -9.0));
	}

	#[test]
	fn narrow_canvas_pins_to_centre() {
		let mut sim = ForceSimulation::new(vec![node("a", 10.0, 100.0)], vec![], 40.0, 400.0);
		sim.step();
		let a = &sim.nodes()[0];
		assert_eq!(a.x, 20.0);
		assert_eq!(a.vx, 0.0);
	}

	#[test]
	fn coincident_nodes_separate() {
		let nodes = vec![node("a", 100.0, 100.0), node("b", 100.0, 100.0)];
		let mut sim = ForceSimulation::new(nodes, vec![Edge::new("a", "b", 0.5)], 800.0, 600.0);
		sim.step();
		let (a, b) = (&sim.nodes()[0], &sim.nodes()[1]);
		assert!(a.x.is_finite() && a.y.is_finite() && b.x.is_finite() && b.y.is_finite());
		assert!((a.x, a.y) != (b.x, b.y));
	}

	#[test]
	fn dangling_and_looping_edges_are_ignored() {
		let nodes = vec![node("a", 300.0, 300.0)];
		let edges = vec![Edge::new("a", "ghost", 0.5), Edge::new("a", "a", 0.5)];
		let mut sim = ForceSimulation::new(nodes, edges, 600.0, 600.0);
		sim.step();
		assert_eq!(sim.edges().len(), 2);
		assert_eq!(sim.nodes()[0].x, 300.0);
		assert_eq!(sim.frame(), 1);
	}

	#[test]
	fn elapsed_time_scales_the_step() {
		let params = SimulationParameters {
			time_step: TimeStep::Elapsed,
			..Default::default()
		};
		let mut lone = node("a", 500.0, 500.0);
		lone.vx = 10.0;
		let mut sim = ForceSimulation::with_parameters(vec![lone], vec![], 1000.0, 1000.0, params);

		// a 30 fps frame counts as two 60 fps frames
		sim.advance(2.0 / 60.0);
		let a = &sim.nodes()[0];
		assert!(approx(a.x, 520.0));
		assert!(approx(a.vx, 10.0 * 0.81));
	}

	#[test]
	fn per_frame_ignores_elapsed() {
		let mut lone = node("a", 500.0, 500.0);
		lone.vx = 10.0;
		let mut sim = ForceSimulation::new(vec![lone], vec![], 1000.0, 1000.0);
		sim.advance(0.5);
		assert!(approx(sim.nodes()[0].x, 510.0));
	}

	#[test]
	fn time_scale_is_clamped() {
		assert_eq!(time_scale(f64::NAN), 1.0);
		assert_eq!(time_scale(0.0), 1.0);
		assert_eq!(time_scale(1.0 / 600.0), MIN_TIME_SCALE);
		assert_eq!(time_scale(1.0), MAX_TIME_SCALE);
	}
}
