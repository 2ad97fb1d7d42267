//! Browser entry point: mounts the agent network app.

// dependencies are used by the library target
#![allow(unused_crate_dependencies)]

use agent_network::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
