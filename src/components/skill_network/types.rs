/// Self-assessed mastery of a skill. Only affects colours and labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkillLevel {
	/// Just starting out.
	Beginner,
	/// Comfortable with the basics.
	Intermediate,
	/// Used in production work.
	Advanced,
	/// Deep, broad experience.
	Expert,
}

impl SkillLevel {
	/// Lowercase name shown in the badge.
	pub fn label(&self) -> &'static str {
		match self {
			SkillLevel::Beginner => "beginner",
			SkillLevel::Intermediate => "intermediate",
			SkillLevel::Advanced => "advanced",
			SkillLevel::Expert => "expert",
		}
	}

	/// Classes for the level badge in the detail panel.
	pub fn badge_class(&self) -> &'static str {
		match self {
			SkillLevel::Beginner => "bg-blue-500/20 text-blue-500 dark:bg-blue-500/10",
			SkillLevel::Intermediate => "bg-yellow-500/20 text-yellow-500 dark:bg-yellow-500/10",
			SkillLevel::Advanced => "bg-orange-500/20 text-orange-500 dark:bg-orange-500/10",
			SkillLevel::Expert => "bg-primary/20 text-primary",
		}
	}

	/// Fill class for the proficiency bar.
	pub fn bar_class(&self) -> &'static str {
		match self {
			SkillLevel::Beginner => "bg-blue-500",
			SkillLevel::Intermediate => "bg-yellow-500",
			SkillLevel::Advanced => "bg-orange-500",
			SkillLevel::Expert => "bg-primary",
		}
	}
}

/// One entry of the skills table.
#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
	/// Unique key, also used as the node id.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Icon URL.
	pub icon: String,
	/// One-line blurb for the detail panel.
	pub description: String,
	/// Self-assessed level.
	pub level: SkillLevel,
	/// Free-form filter group, e.g. `frontend`.
	pub category: String,
	/// 0-100, drives the node radius.
	pub proficiency: u8,
	/// Ids this skill declares a link to. Unknown ids are ignored.
	pub related_skills: Option<Vec<String>>,
}

/// Radius of a node at zero proficiency.
pub const BASE_RADIUS: f64 = 30.0;

impl Skill {
	/// `30 + proficiency / 10`, proficiency capped at 100.
	pub fn node_radius(&self) -> f64 {
		BASE_RADIUS + f64::from(self.proficiency.min(100)) / 10.0
	}
}

/// A simulated point mass for one skill.
#[derive(Clone, Debug)]
pub struct Node {
	/// Same as `skill.id`.
	pub id: String,
	/// Centre, in canvas pixels.
	pub x: f64,
	/// Centre, vertical.
	pub y: f64,
	/// Velocity, in pixels per frame.
	pub vx: f64,
	/// Velocity, vertical.
	pub vy: f64,
	/// `30 + proficiency / 10`.
	pub radius: f64,
	/// The skill this node draws.
	pub skill: Skill,
}

impl Node {
	/// At rest at `(x, y)`.
	pub fn new(skill: Skill, x: f64, y: f64) -> Self {
		Self {
			id: skill.id.clone(),
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius: skill.node_radius(),
			skill,
		}
	}
}

/// Strength of an edge listed in `related_skills`.
pub const DECLARED_STRENGTH: f64 = 0.5;
/// Strength of a randomly added edge.
pub const SYNTHETIC_STRENGTH: f64 = 0.3;

/// A spring between two nodes. Endpoints may name nodes that are not in the
/// current set; such edges are ignored by the simulator and the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Id of one endpoint.
	pub source: String,
	/// Id of the other endpoint.
	pub target: String,
	/// Spring stiffness multiplier.
	pub strength: f64,
}

impl Edge {
	/// Edge from `source` to `target`.
	pub fn new(source: impl Into<String>, target: impl Into<String>, strength: f64) -> Self {
		Self {
			source: source.into(),
			target: target.into(),
			strength,
		}
	}

	/// Whether `id` is either endpoint.
	pub fn touches(&self, id: &str) -> bool {
		self.source == id || self.target == id
	}

	/// The endpoint opposite `id`, if this edge touches it.
	pub fn other(&self, id: &str) -> Option<&str> {
		if self.source == id {
			Some(&self.target)
		} else if self.target == id {
			Some(&self.source)
		} else {
			None
		}
	}
}
