use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::graph::NeuralGraph;
use super::growth::GrowthEngine;
use super::types::{GROWTH_INTERVAL, INITIAL_NODES, Node, SPAWN_CHANCE};

/// Everything the animation loop touches: the graph, the growth engine's
/// side state, the tick counter and the canvas dimensions. `tick` carries
/// the whole simulation step so tests can run it without a drawing surface;
/// rendering only reads.
pub struct NeuralGraphState {
	pub graph: NeuralGraph,
	growth: GrowthEngine,
	rng: SmallRng,
	growth_timer: u32,
	pub width: f64,
	pub height: f64,
}

impl NeuralGraphState {
	/// Seeds the fixed initial population at random positions. All draws go
	/// through the owned RNG, so a fixed seed replays the exact same graph.
	pub fn new(width: f64, height: f64, seed: u64) -> Self {
		let mut rng = SmallRng::seed_from_u64(seed);
		let mut graph = NeuralGraph::new();
		for _ in 0..INITIAL_NODES {
			graph.push_node(Node::random(width, height, &mut rng));
		}
		Self {
			graph,
			growth: GrowthEngine::new(),
			rng,
			growth_timer: 0,
			width,
			height,
		}
	}

	/// One simulation step: advance pulse phases, run scheduled connection
	/// growth when the timer elapses, then roll the node-spawn chance.
	pub fn tick(&mut self) {
		self.graph.advance_pulses();

		self.growth_timer += 1;
		if self.growth_timer >= GROWTH_INTERVAL {
			self.growth_timer = 0;
			self.growth.grow_connections(&mut self.graph, &mut self.rng);
		}

		if self.rng.random::<f64>() < SPAWN_CHANCE {
			self.growth
				.spawn_node(&mut self.graph, self.width, self.height, &mut self.rng);
		}
	}

	/// Resize only changes the drawing area; existing nodes keep their
	/// positions.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::super::types::NodeCategory;
	use super::*;

	#[test]
	fn same_seed_replays_identically() {
		let mut a = NeuralGraphState::new(800.0, 600.0, 42);
		let mut b = NeuralGraphState::new(800.0, 600.0, 42);
		for _ in 0..300 {
			a.tick();
			b.tick();
		}
		assert_eq!(a.graph, b.graph);
	}

	#[test]
	fn different_seeds_diverge() {
		let mut a = NeuralGraphState::new(800.0, 600.0, 1);
		let mut b = NeuralGraphState::new(800.0, 600.0, 2);
		for _ in 0..300 {
			a.tick();
			b.tick();
		}
		assert_ne!(a.graph, b.graph);
	}

	#[test]
	fn invariants_hold_after_long_run() {
		let mut state = NeuralGraphState::new(800.0, 600.0, 99);
		for _ in 0..1500 {
			state.tick();
		}
		let graph = &state.graph;
		assert!(!graph.connections().is_empty());

		let mut pairs = HashSet::new();
		let mut degree_from_connections = vec![0usize; graph.node_count()];
		for conn in graph.connections() {
			assert_ne!(conn.from, conn.to);
			assert!(conn.opacity >= 0.2 && conn.opacity < 0.8);
			let pair = (conn.from.min(conn.to), conn.from.max(conn.to));
			assert!(pairs.insert(pair), "duplicate connection {pair:?}");
			degree_from_connections[conn.from] += 1;
			degree_from_connections[conn.to] += 1;

			// Adjacency symmetry.
			assert!(graph.nodes()[conn.from].links.contains(&conn.to));
			assert!(graph.nodes()[conn.to].links.contains(&conn.from));
		}

		for (idx, node) in graph.nodes().iter().enumerate() {
			assert_eq!(node.degree(), degree_from_connections[idx]);
			assert_eq!(node.category, NodeCategory::from_degree(node.degree()));
		}
	}

	#[test]
	fn resize_keeps_node_positions() {
		let mut state = NeuralGraphState::new(800.0, 600.0, 5);
		let before: Vec<(f64, f64)> = state.graph.nodes().iter().map(|n| (n.x, n.y)).collect();
		state.resize(1920.0, 1080.0);
		let after: Vec<(f64, f64)> = state.graph.nodes().iter().map(|n| (n.x, n.y)).collect();
		assert_eq!(before, after);
		assert_eq!(state.width, 1920.0);
		assert_eq!(state.height, 1080.0);
	}
}
