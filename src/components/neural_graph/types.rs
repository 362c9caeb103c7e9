use std::f64::consts::TAU;

use rand::Rng;

/// Nodes seeded into the graph at startup.
pub const INITIAL_NODES: usize = 150;
/// A node with this many connections stops accepting scheduled ones.
pub const MAX_DEGREE: usize = 4;
/// Ticks between scheduled connection-growth attempts.
pub const GROWTH_INTERVAL: u32 = 50;
/// Chance per tick of spawning a new node.
pub const SPAWN_CHANCE: f64 = 0.003;
/// Starting neighbor-search distance, in px.
pub const SEARCH_RADIUS_DEFAULT: f64 = 80.0;
/// How much a node's search radius widens after a tick with no match.
pub const SEARCH_RADIUS_STEP: f64 = 20.0;
/// Widened search radii never exceed this.
pub const SEARCH_RADIUS_MAX: f64 = 200.0;
/// Newly spawned nodes link to every eligible node within this distance.
pub const SPAWN_LINK_RADIUS: f64 = 100.0;

/// Display category derived from a node's degree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeCategory {
	Isolated,
	LowConnection,
	Normal,
	WellConnected,
}

impl NodeCategory {
	pub fn from_degree(degree: usize) -> Self {
		match degree {
			0 => Self::Isolated,
			1 => Self::LowConnection,
			2..=3 => Self::Normal,
			_ => Self::WellConnected,
		}
	}

	pub fn color(self) -> &'static str {
		match self {
			Self::Isolated => "#ffffff",
			Self::LowConnection => "#44aaff",
			Self::Normal => "#00ffff",
			Self::WellConnected => "#ff4444",
		}
	}

	pub fn glow_radius(self) -> f64 {
		match self {
			Self::Isolated => 8.0,
			Self::LowConnection => 12.0,
			Self::Normal => 10.0,
			Self::WellConnected => 15.0,
		}
	}
}

/// One point in the visualization.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub pulse: f64,
	pub pulse_speed: f64,
	pub category: NodeCategory,
	/// Indices of connected nodes, kept symmetric with theirs.
	pub links: Vec<usize>,
}

impl Node {
	pub fn random(width: f64, height: f64, rng: &mut impl Rng) -> Self {
		Self {
			x: rng.random_range(0.0..width),
			y: rng.random_range(0.0..height),
			radius: rng.random_range(1.0..3.0),
			pulse: rng.random_range(0.0..TAU),
			pulse_speed: rng.random_range(0.01..0.03),
			category: NodeCategory::Isolated,
			links: Vec::new(),
		}
	}

	pub fn degree(&self) -> usize {
		self.links.len()
	}

	pub fn distance_to(&self, other: &Node) -> f64 {
		((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
	}
}

/// One undirected link, stored once per unordered pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Connection {
	pub from: usize,
	pub to: usize,
	pub opacity: f64,
	pub pulse: f64,
	pub pulse_speed: f64,
}

impl Connection {
	pub fn new(from: usize, to: usize, rng: &mut impl Rng) -> Self {
		Self {
			from,
			to,
			opacity: rng.random_range(0.2..0.8),
			pulse: rng.random_range(0.0..TAU),
			pulse_speed: rng.random_range(0.01..0.04),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn category_tracks_degree() {
		assert_eq!(NodeCategory::from_degree(0), NodeCategory::Isolated);
		assert_eq!(NodeCategory::from_degree(1), NodeCategory::LowConnection);
		assert_eq!(NodeCategory::from_degree(2), NodeCategory::Normal);
		assert_eq!(NodeCategory::from_degree(3), NodeCategory::Normal);
		assert_eq!(NodeCategory::from_degree(4), NodeCategory::WellConnected);
		assert_eq!(NodeCategory::from_degree(9), NodeCategory::WellConnected);
	}

	#[test]
	fn random_node_starts_isolated() {
		use rand::SeedableRng;
		use rand::rngs::SmallRng;

		let mut rng = SmallRng::seed_from_u64(7);
		let node = Node::random(640.0, 480.0, &mut rng);
		assert!(node.x >= 0.0 && node.x < 640.0);
		assert!(node.y >= 0.0 && node.y < 480.0);
		assert!(node.radius >= 1.0 && node.radius < 3.0);
		assert_eq!(node.category, NodeCategory::Isolated);
		assert!(node.links.is_empty());
	}
}
