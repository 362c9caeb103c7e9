use rand::Rng;

use super::types::{Connection, Node, NodeCategory};

/// Owns every node and connection. Nodes are identified by their index in
/// the ordered node list; nothing is ever removed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeuralGraph {
	nodes: Vec<Node>,
	connections: Vec<Connection>,
}

impl NeuralGraph {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	/// Appends a node and returns its index.
	pub fn push_node(&mut self, node: Node) -> usize {
		self.nodes.push(node);
		self.nodes.len() - 1
	}

	pub fn is_connected(&self, a: usize, b: usize) -> bool {
		self.nodes[a].links.contains(&b)
	}

	/// Links two distinct, not-yet-connected nodes: stores the connection,
	/// updates both adjacency lists and reclassifies both endpoints.
	pub fn connect(&mut self, from: usize, to: usize, rng: &mut impl Rng) {
		debug_assert!(from != to);
		debug_assert!(!self.is_connected(from, to));

		self.connections.push(Connection::new(from, to, rng));
		self.nodes[from].links.push(to);
		self.nodes[to].links.push(from);
		self.reclassify(from);
		self.reclassify(to);
	}

	pub fn reclassify(&mut self, idx: usize) {
		let node = &mut self.nodes[idx];
		node.category = NodeCategory::from_degree(node.links.len());
	}

	pub fn reclassify_all(&mut self) {
		for node in &mut self.nodes {
			node.category = NodeCategory::from_degree(node.links.len());
		}
	}

	/// Advances every pulse phase by its speed, one step per frame.
	pub fn advance_pulses(&mut self) {
		for connection in &mut self.connections {
			connection.pulse += connection.pulse_speed;
		}
		for node in &mut self.nodes {
			node.pulse += node.pulse_speed;
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	use super::*;

	fn node_at(x: f64, y: f64) -> Node {
		Node {
			x,
			y,
			radius: 2.0,
			pulse: 0.0,
			pulse_speed: 0.02,
			category: NodeCategory::Isolated,
			links: Vec::new(),
		}
	}

	#[test]
	fn connect_is_symmetric_and_reclassifies() {
		let mut graph = NeuralGraph::new();
		let a = graph.push_node(node_at(0.0, 0.0));
		let b = graph.push_node(node_at(10.0, 0.0));
		let mut rng = SmallRng::seed_from_u64(1);

		graph.connect(a, b, &mut rng);

		assert!(graph.nodes()[a].links.contains(&b));
		assert!(graph.nodes()[b].links.contains(&a));
		assert!(graph.is_connected(a, b));
		assert!(graph.is_connected(b, a));
		assert_eq!(graph.nodes()[a].category, NodeCategory::LowConnection);
		assert_eq!(graph.nodes()[b].category, NodeCategory::LowConnection);
		assert_eq!(graph.connections().len(), 1);

		let conn = &graph.connections()[0];
		assert!(conn.opacity >= 0.2 && conn.opacity < 0.8);
		assert!(conn.pulse_speed >= 0.01 && conn.pulse_speed < 0.04);
	}

	#[test]
	fn pulses_advance_by_speed() {
		let mut graph = NeuralGraph::new();
		let a = graph.push_node(node_at(0.0, 0.0));
		let b = graph.push_node(node_at(5.0, 0.0));
		let mut rng = SmallRng::seed_from_u64(2);
		graph.connect(a, b, &mut rng);

		let node_pulse = graph.nodes()[a].pulse;
		let conn_pulse = graph.connections()[0].pulse;
		graph.advance_pulses();
		assert_eq!(
			graph.nodes()[a].pulse,
			node_pulse + graph.nodes()[a].pulse_speed
		);
		assert_eq!(
			graph.connections()[0].pulse,
			conn_pulse + graph.connections()[0].pulse_speed
		);
	}
}
