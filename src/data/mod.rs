//! Static agent registry compiled into the app.

mod agents;

pub use agents::{AGENTS, Agent, Status, Tier, find_agent};
