use std::ops::RangeInclusive;

use log::{debug, info};
use rand::Rng;

use super::types::{Connection, NetworkAgent, Node, Vec2};
use crate::data::Tier;

#[derive(Clone, Debug)]
pub struct NetworkParams {
	/// Top-left corner of the rectangle new nodes are scattered in.
	pub spawn_origin: Vec2,
	pub spawn_extent: Vec2,
	/// Upper bound on each velocity component, in units per frame.
	pub max_speed: f64,
	pub enterprise_radius: f64,
	pub professional_radius: f64,
	pub starter_radius: f64,
	pub connections_per_node: RangeInclusive<usize>,
}

impl Default for NetworkParams {
	fn default() -> Self {
		Self {
			spawn_origin: Vec2::new(100.0, 100.0),
			spawn_extent: Vec2::new(800.0, 500.0),
			max_speed: 0.25,
			enterprise_radius: 35.0,
			professional_radius: 28.0,
			starter_radius: 22.0,
			connections_per_node: 1..=3,
		}
	}
}

impl NetworkParams {
	pub fn radius_for(&self, tier: Tier) -> f64 {
		match tier {
			Tier::Enterprise => self.enterprise_radius,
			Tier::Professional => self.professional_radius,
			Tier::Starter => self.starter_radius,
		}
	}
}

pub struct NetworkState {
	nodes: Vec<Node>,
	connections: Vec<Connection>,
	hovered: Option<usize>,
	selected: Option<usize>,
	pub width: f64,
	pub height: f64,
}

impl NetworkState {
	pub fn new<R: Rng>(
		agents: &[NetworkAgent],
		width: f64,
		height: f64,
		params: &NetworkParams,
		rng: &mut R,
	) -> Self {
		let (origin, extent) = (params.spawn_origin, params.spawn_extent);
		let nodes: Vec<Node> = agents
			.iter()
			.map(|agent| Node {
				id: agent.id.clone(),
				position: Vec2::new(
					origin.x + rng.r#gen::<f64>() * extent.x,
					origin.y + rng.r#gen::<f64>() * extent.y,
				),
				velocity: Vec2::new(
					(rng.r#gen::<f64>() - 0.5) * 2.0 * params.max_speed,
					(rng.r#gen::<f64>() - 0.5) * 2.0 * params.max_speed,
				),
				radius: params.radius_for(agent.tier),
				name: agent.name.clone(),
				avatar: agent.avatar.clone(),
				tier: agent.tier,
				status: agent.status,
			})
			.collect();

		let mut connections = Vec::new();
		if !nodes.is_empty() {
			for (i, node) in nodes.iter().enumerate() {
				let fan_out = rng.gen_range(params.connections_per_node.clone());
				for _ in 0..fan_out {
					let target = rng.gen_range(0..nodes.len());
					if target != i {
						connections.push(Connection {
							source: node.id.clone(),
							target: nodes[target].id.clone(),
						});
					}
				}
			}
		}

		info!(
			"network graph initialized: {} nodes, {} connections",
			nodes.len(),
			connections.len()
		);

		Self {
			nodes,
			connections,
			hovered: None,
			selected: None,
			width,
			height,
		}
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	#[cfg(test)]
	pub(crate) fn push_connection(&mut self, conn: Connection) {
		self.connections.push(conn);
	}

	pub fn node(&self, id: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Whether the surface has been measured to a drawable size.
	pub fn has_area(&self) -> bool {
		self.width > 0.0 && self.height > 0.0
	}

	/// Advances every node by one frame and reflects it off the walls.
	pub fn update(&mut self) {
		if !self.has_area() {
			return;
		}
		let (width, height) = (self.width, self.height);
		for node in &mut self.nodes {
			node.position.x += node.velocity.x;
			node.position.y += node.velocity.y;
			reflect(&mut node.position.x, &mut node.velocity.x, node.radius, width);
			reflect(&mut node.position.y, &mut node.velocity.y, node.radius, height);
		}
	}

	/// Nodes left outside the new bounds are pulled back by the next `update`.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// First node, in creation order, whose circle strictly contains `point`.
	pub fn node_at(&self, point: Vec2) -> Option<usize> {
		self.nodes.iter().position(|n| n.contains(point))
	}

	/// Returns true when the hovered node changed.
	pub fn set_hover(&mut self, idx: Option<usize>) -> bool {
		let idx = idx.filter(|&i| i < self.nodes.len());
		if self.hovered == idx {
			return false;
		}
		self.hovered = idx;
		true
	}

	pub fn set_selection(&mut self, idx: Option<usize>) {
		let idx = idx.filter(|&i| i < self.nodes.len());
		if self.selected != idx {
			match idx {
				Some(i) => debug!("selected {} ({})", self.nodes[i].name, self.nodes[i].id),
				None => debug!("selection cleared"),
			}
		}
		self.selected = idx;
	}

	pub fn hovered(&self) -> Option<&Node> {
		self.hovered.map(|i| &self.nodes[i])
	}

	pub fn selected(&self) -> Option<&Node> {
		self.selected.map(|i| &self.nodes[i])
	}

	/// Hovered or selected.
	pub fn is_highlighted(&self, id: &str) -> bool {
		self.hovered().is_some_and(|n| n.id == id) || self.selected().is_some_and(|n| n.id == id)
	}

	/// Hit-tests a pointer move in surface coordinates. Returns whether a node
	/// is now under the pointer.
	pub fn pointer_moved(&mut self, point: Vec2) -> bool {
		let hit = self.node_at(point);
		self.set_hover(hit);
		hit.is_some()
	}

	pub fn pointer_left(&mut self) {
		self.set_hover(None);
	}

	pub fn clicked(&mut self, point: Vec2) -> Option<&Node> {
		let hit = self.node_at(point);
		self.set_selection(hit);
		self.selected()
	}
}

fn reflect(pos: &mut f64, vel: &mut f64, radius: f64, extent: f64) {
	if *pos < radius || *pos > extent - radius {
		*vel = -*vel;
		// lower bound last: a surface narrower than the node pins it at `radius`
		*pos = pos.min(extent - radius).max(radius);
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use proptest::prelude::*;
	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;
	use crate::data::{AGENTS, Status};

	fn agent(id: &str, tier: Tier) -> NetworkAgent {
		NetworkAgent {
			id: id.into(),
			name: id.to_uppercase(),
			avatar: id[..2].to_uppercase(),
			tier,
			status: Status::Online,
		}
	}

	fn sample_agents() -> Vec<NetworkAgent> {
		let tiers = [
			Tier::Enterprise,
			Tier::Professional,
			Tier::Starter,
			Tier::Enterprise,
			Tier::Professional,
			Tier::Professional,
			Tier::Starter,
			Tier::Enterprise,
			Tier::Professional,
		];
		tiers
			.iter()
			.enumerate()
			.map(|(i, &tier)| agent(&format!("agent-{i:03}"), tier))
			.collect()
	}

	fn state(seed: u64, width: f64, height: f64) -> NetworkState {
		let mut rng = ChaCha8Rng::seed_from_u64(seed);
		NetworkState::new(
			&sample_agents(),
			width,
			height,
			&NetworkParams::default(),
			&mut rng,
		)
	}

	fn in_bounds(state: &NetworkState) -> bool {
		state.nodes().iter().all(|n| {
			n.position.x >= n.radius
				&& n.position.x <= state.width - n.radius
				&& n.position.y >= n.radius
				&& n.position.y <= state.height - n.radius
		})
	}

	#[test]
	fn radii_follow_tiers() {
		let s = state(1, 800.0, 600.0);
		assert_eq!(s.nodes().len(), 9);

		let mut by_radius: HashMap<u64, usize> = HashMap::new();
		for node in s.nodes() {
			*by_radius.entry(node.radius.to_bits()).or_default() += 1;
		}
		assert_eq!(by_radius.len(), 3);
		assert_eq!(by_radius[&35.0f64.to_bits()], 3);
		assert_eq!(by_radius[&28.0f64.to_bits()], 4);
		assert_eq!(by_radius[&22.0f64.to_bits()], 2);
	}

	#[test]
	fn spawn_inside_spawn_rect_with_bounded_speed() {
		let s = state(7, 1000.0, 700.0);
		for node in s.nodes() {
			assert!((100.0..=900.0).contains(&node.position.x));
			assert!((100.0..=600.0).contains(&node.position.y));
			assert!(node.velocity.x.abs() <= 0.25);
			assert!(node.velocity.y.abs() <= 0.25);
		}
	}

	#[test]
	fn connections_bounded_and_never_self() {
		for seed in 0..32 {
			let s = state(seed, 800.0, 600.0);
			let n = s.nodes().len();
			assert!(s.connections().len() <= 3 * n);

			let mut outgoing: HashMap<&str, usize> = HashMap::new();
			for conn in s.connections() {
				assert_ne!(conn.source, conn.target);
				assert!(s.node(&conn.source).is_some());
				assert!(s.node(&conn.target).is_some());
				*outgoing.entry(conn.source.as_str()).or_default() += 1;
			}
			assert!(outgoing.values().all(|&c| c <= 3));
		}
	}

	#[test]
	fn empty_agent_list_builds_empty_graph() {
		let mut rng = ChaCha8Rng::seed_from_u64(0);
		let mut s = NetworkState::new(&[], 800.0, 600.0, &NetworkParams::default(), &mut rng);
		assert!(s.nodes().is_empty());
		assert!(s.connections().is_empty());
		s.update();
		assert!(s.clicked(Vec2::new(10.0, 10.0)).is_none());
	}

	#[test]
	fn single_agent_has_no_connections() {
		let mut rng = ChaCha8Rng::seed_from_u64(3);
		let agents = [agent("solo", Tier::Starter)];
		let s = NetworkState::new(&agents, 800.0, 600.0, &NetworkParams::default(), &mut rng);
		assert!(s.connections().is_empty());
	}

	#[test]
	fn bundled_registry_seeds_graph() {
		let agents: Vec<NetworkAgent> = AGENTS.iter().map(NetworkAgent::from).collect();
		let mut rng = ChaCha8Rng::seed_from_u64(11);
		let s = NetworkState::new(&agents, 800.0, 600.0, &NetworkParams::default(), &mut rng);
		assert_eq!(s.nodes().len(), AGENTS.len());
		assert_eq!(s.nodes()[0].avatar, "N7");
	}

	#[test]
	fn thousand_frames_stay_in_bounds() {
		let mut s = state(42, 800.0, 600.0);
		for _ in 0..1000 {
			s.update();
			assert!(in_bounds(&s));
		}
	}

	#[test]
	fn free_flight_keeps_velocity() {
		let mut s = state(5, 800.0, 600.0);
		s.nodes[0].position = Vec2::new(400.0, 300.0);
		s.nodes[0].velocity = Vec2::new(0.2, -0.1);
		s.update();
		assert_eq!(s.nodes[0].velocity, Vec2::new(0.2, -0.1));
		assert!((s.nodes[0].position.x - 400.2).abs() < 1e-9);
		assert!((s.nodes[0].position.y - 299.9).abs() < 1e-9);
	}

	#[test]
	fn wall_contact_flips_one_axis_once() {
		let mut s = state(5, 800.0, 600.0);
		let r = s.nodes[0].radius;
		s.nodes[0].position = Vec2::new(800.0 - r - 0.1, 300.0);
		s.nodes[0].velocity = Vec2::new(0.2, 0.1);

		s.update();
		assert_eq!(s.nodes[0].velocity, Vec2::new(-0.2, 0.1));
		assert_eq!(s.nodes[0].position.x, 800.0 - r);

		s.update();
		assert_eq!(s.nodes[0].velocity, Vec2::new(-0.2, 0.1));
	}

	#[test]
	fn zero_sized_surface_skips_update() {
		let mut s = state(9, 0.0, 0.0);
		let before: Vec<Vec2> = s.nodes().iter().map(|n| n.position).collect();
		s.update();
		let after: Vec<Vec2> = s.nodes().iter().map(|n| n.position).collect();
		assert_eq!(before, after);
	}

	#[test]
	fn narrow_surface_pins_node_without_panicking() {
		let mut s = state(9, 30.0, 30.0);
		s.update();
		for node in s.nodes() {
			assert_eq!(node.position.x, node.radius);
			assert_eq!(node.position.y, node.radius);
		}
	}

	#[test]
	fn shrink_recovers_on_next_frame() {
		let mut s = state(21, 800.0, 600.0);
		for _ in 0..10 {
			s.update();
		}
		s.resize(400.0, 300.0);
		s.update();
		assert_eq!(s.nodes().len(), 9);
		assert!(in_bounds(&s));
	}

	#[test]
	fn hit_test_is_strict_and_first_wins() {
		let mut s = state(2, 800.0, 600.0);
		s.nodes[0].position = Vec2::new(200.0, 200.0);
		s.nodes[1].position = Vec2::new(210.0, 200.0);
		let r0 = s.nodes[0].radius;

		assert_eq!(s.node_at(Vec2::new(205.0, 200.0)), Some(0));
		assert_eq!(s.node_at(Vec2::new(200.0, 200.0 - r0 + 0.01)), Some(0));
		assert_ne!(s.node_at(Vec2::new(200.0 - r0, 200.0)), Some(0));
	}

	#[test]
	fn click_selects_then_clears() {
		let mut s = state(4, 800.0, 600.0);
		for (i, node) in s.nodes.iter_mut().enumerate() {
			node.position = Vec2::new(60.0 + 80.0 * i as f64, 100.0);
		}
		let target = s.nodes[3].clone();

		let hit = s.clicked(target.position).map(|n| n.id.clone());
		assert_eq!(hit.as_deref(), Some(target.id.as_str()));

		let snapshot: Vec<(Vec2, Vec2, f64)> = s
			.nodes()
			.iter()
			.map(|n| (n.position, n.velocity, n.radius))
			.collect();
		assert!(s.clicked(Vec2::new(400.0, 500.0)).is_none());
		assert!(s.selected().is_none());

		let after: Vec<(Vec2, Vec2, f64)> = s
			.nodes()
			.iter()
			.map(|n| (n.position, n.velocity, n.radius))
			.collect();
		assert_eq!(snapshot, after);
	}

	#[test]
	fn hover_tracks_pointer_and_leave() {
		let mut s = state(4, 800.0, 600.0);
		s.nodes[2].position = Vec2::new(500.0, 400.0);
		for (i, node) in s.nodes.iter_mut().enumerate().filter(|(i, _)| *i != 2) {
			node.position = Vec2::new(60.0 + 50.0 * i as f64, 60.0);
		}

		assert!(s.pointer_moved(Vec2::new(505.0, 400.0)));
		assert_eq!(s.hovered().map(|n| n.id.as_str()), Some("agent-002"));
		assert!(s.is_highlighted("agent-002"));
		assert!(!s.is_highlighted("agent-001"));

		assert!(!s.set_hover(Some(2)));

		s.pointer_left();
		assert!(s.hovered().is_none());
		assert!(!s.is_highlighted("agent-002"));
	}

	#[test]
	fn out_of_range_indices_are_ignored() {
		let mut s = state(4, 800.0, 600.0);
		s.set_selection(Some(99));
		assert!(s.selected().is_none());
		assert!(!s.set_hover(Some(99)));
	}

	proptest! {
		#[test]
		fn nodes_never_leave_walls(seed in any::<u64>(), frames in 1usize..600) {
			let mut s = state(seed, 800.0, 600.0);
			for _ in 0..frames {
				s.update();
				prop_assert!(in_bounds(&s));
			}
		}

		#[test]
		fn reflection_flips_only_on_contact(
			x in 34.0f64..766.0,
			vx in prop_oneof![-0.25f64..-0.01, 0.01f64..0.25],
		) {
			let mut s = state(0, 800.0, 600.0);
			s.nodes[0].position = Vec2::new(x, 300.0);
			s.nodes[0].velocity = Vec2::new(vx, 0.0);
			let r = s.nodes[0].radius;
			let next = x + vx;
			let exits = next < r || next > 800.0 - r;

			s.update();
			let flipped = s.nodes[0].velocity.x != vx;
			prop_assert_eq!(flipped, exits);
			if flipped {
				prop_assert_eq!(s.nodes[0].velocity.x, -vx);
			}
		}
	}
}
