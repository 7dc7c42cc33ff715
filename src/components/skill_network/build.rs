use std::collections::HashSet;
use std::f64::consts::TAU;

use rand::Rng;

use super::types::{DECLARED_STRENGTH, Edge, Node, SYNTHETIC_STRENGTH, Skill};

/// Fraction of the smaller canvas dimension used as the seeding disc radius.
const SEED_SPREAD: f64 = 0.3;
const MIN_SYNTHETIC: usize = 1;
const MAX_SYNTHETIC: usize = 3;

/// Builds a fresh node and edge set for `skills` on a `width` x `height`
/// canvas. Nodes start at random points of a disc around the centre; edges are
/// the declared relations plus 1-3 random extra links per skill. Duplicate
/// edges are kept and simply add up as springs.
pub fn build_graph<R: Rng + ?Sized>(
	skills: &[Skill],
	width: f64,
	height: f64,
	rng: &mut R,
) -> (Vec<Node>, Vec<Edge>) {
	let (cx, cy) = (width / 2.0, height / 2.0);
	let spread = width.min(height).max(0.0) * SEED_SPREAD;

	let nodes: Vec<Node> = skills
		.iter()
		.map(|skill| {
			let angle = rng.gen_range(0.0..TAU);
			let distance = spread * rng.r#gen::<f64>();
			Node::new(
				skill.clone(),
				cx + angle.cos() * distance,
				cy + angle.sin() * distance,
			)
		})
		.collect();

	let ids: HashSet<&str> = skills.iter().map(|s| s.id.as_str()).collect();
	let mut edges = Vec::new();

	for skill in skills {
		let Some(related) = &skill.related_skills else {
			continue;
		};
		for related_id in related {
			if related_id != &skill.id && ids.contains(related_id.as_str()) {
				edges.push(Edge::new(&skill.id, related_id, DECLARED_STRENGTH));
			}
		}
	}

	if skills.len() > 1 {
		for (i, skill) in skills.iter().enumerate() {
			let count = rng.gen_range(MIN_SYNTHETIC..=MAX_SYNTHETIC);
			for _ in 0..count {
				// pick among the other n - 1 skills
				let mut j = rng.gen_range(0..skills.len() - 1);
				if j >= i {
					j += 1;
				}
				edges.push(Edge::new(&skill.id, &skills[j].id, SYNTHETIC_STRENGTH));
			}
		}
	}

	log::debug!(
		"built skill graph: {} nodes, {} edges",
		nodes.len(),
		edges.len()
	);
	(nodes, edges)
}
