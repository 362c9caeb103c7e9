use std::collections::HashMap;

use rand::Rng;

use super::graph::NeuralGraph;
use super::types::{
	MAX_DEGREE, Node, SEARCH_RADIUS_DEFAULT, SEARCH_RADIUS_MAX, SEARCH_RADIUS_STEP,
	SPAWN_LINK_RADIUS,
};

/// Densifies the graph over time. Holds only the per-node search radii;
/// the graph itself is mutated in place through `&mut NeuralGraph`.
#[derive(Debug, Default)]
pub struct GrowthEngine {
	/// Current neighbor-search distance per node index, lazily defaulted.
	search_radii: HashMap<usize, f64>,
}

impl GrowthEngine {
	pub fn new() -> Self {
		Self::default()
	}

	pub(crate) fn radius(&self, idx: usize) -> f64 {
		self.search_radii
			.get(&idx)
			.copied()
			.unwrap_or(SEARCH_RADIUS_DEFAULT)
	}

	/// Scheduled connection growth: links the globally nearest pair of
	/// still-available nodes, gated by the source node's search radius.
	/// When nothing is in reach, every available node's radius widens so
	/// later attempts look farther afield.
	pub fn grow_connections(&mut self, graph: &mut NeuralGraph, rng: &mut impl Rng) {
		let available: Vec<usize> = (0..graph.node_count())
			.filter(|&i| graph.nodes()[i].degree() < MAX_DEGREE)
			.collect();
		if available.len() < 2 {
			return;
		}

		let mut best: Option<(usize, usize)> = None;
		let mut best_distance = f64::INFINITY;
		for &from in &available {
			// Only the source node's radius gates the pair; both orders of
			// each pair get examined, so the search stays near-symmetric.
			let search_radius = self.radius(from);
			for &to in &available {
				if from == to || graph.is_connected(from, to) {
					continue;
				}
				let distance = graph.nodes()[from].distance_to(&graph.nodes()[to]);
				if distance <= search_radius && distance < best_distance {
					best = Some((from, to));
					best_distance = distance;
				}
			}
		}

		match best {
			Some((from, to)) => {
				graph.connect(from, to, rng);
				self.search_radii.insert(from, SEARCH_RADIUS_DEFAULT);
				self.search_radii.insert(to, SEARCH_RADIUS_DEFAULT);
			}
			None => {
				for &idx in &available {
					let radius = self
						.search_radii
						.entry(idx)
						.or_insert(SEARCH_RADIUS_DEFAULT);
					*radius = (*radius + SEARCH_RADIUS_STEP).min(SEARCH_RADIUS_MAX);
				}
			}
		}
	}

	/// Adds one node at a random position and links it to every existing
	/// node within reach that still has spare degree.
	pub fn spawn_node(
		&mut self,
		graph: &mut NeuralGraph,
		width: f64,
		height: f64,
		rng: &mut impl Rng,
	) -> usize {
		let idx = graph.push_node(Node::random(width, height, rng));
		link_new_node(graph, idx, rng);
		graph.reclassify_all();
		idx
	}
}

/// Connects a freshly spawned node to nearby nodes. Existing nodes are
/// skipped once at max degree; the new node itself takes every link the
/// distance filter allows.
fn link_new_node(graph: &mut NeuralGraph, new_idx: usize, rng: &mut impl Rng) {
	for other in 0..new_idx {
		if graph.nodes()[other].degree() >= MAX_DEGREE {
			continue;
		}
		if graph.nodes()[new_idx].distance_to(&graph.nodes()[other]) < SPAWN_LINK_RADIUS {
			graph.connect(new_idx, other, rng);
		}
	}
}
