mod build;
mod component;
mod frame_loop;
mod interaction;
mod render;
mod simulation;
mod types;

pub use build::build_graph;
pub use component::SkillNetwork;
pub use frame_loop::{BrowserScheduler, FrameCallback, FrameLoop, FrameScheduler};
pub use interaction::{Selection, connected_ids};
pub use render::{EdgeSegment, Emphasis, NodeView, edge_segments, node_views};
pub use simulation::{ForceSimulation, SimulationParameters, TimeStep};
pub use types::{DECLARED_STRENGTH, Edge, Node, SYNTHETIC_STRENGTH, Skill, SkillLevel};
