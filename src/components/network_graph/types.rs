use crate::data::{Agent, Status, Tier};

/// Agent record consumed by the network graph.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkAgent {
	pub id: String,
	pub name: String,
	pub avatar: String,
	pub tier: Tier,
	pub status: Status,
}

impl From<&Agent> for NetworkAgent {
	fn from(agent: &Agent) -> Self {
		Self {
			id: agent.id.into(),
			name: agent.name.into(),
			avatar: agent.avatar.into(),
			tier: agent.tier,
			status: agent.status,
		}
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
	pub x: f64,
	pub y: f64,
}

impl Vec2 {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Vec2) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

#[derive(Clone, Debug)]
pub struct Node {
	pub id: String,
	pub position: Vec2,
	pub velocity: Vec2,
	pub radius: f64,
	pub name: String,
	pub avatar: String,
	pub tier: Tier,
	pub status: Status,
}

impl Node {
	/// Strict containment: a point on the rim is outside.
	pub fn contains(&self, point: Vec2) -> bool {
		self.position.distance(point) < self.radius
	}
}

/// Decorative edge between two node ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
	pub source: String,
	pub target: String,
}
