use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::data::{AGENTS, Agent, find_agent};

fn chips(items: &'static [&'static str]) -> impl IntoView {
	items
		.iter()
		.map(|item| view! { <span class="chip">{*item}</span> })
		.collect_view()
}

/// Full profile of one agent. Unknown ids fall back to the first agent.
#[component]
pub fn AgentProfile() -> impl IntoView {
	let params = use_params_map();
	let agent = move || -> &'static Agent {
		params
			.with(|p| p.get("id"))
			.and_then(|id| find_agent(&id))
			.unwrap_or(&AGENTS[0])
	};

	view! {
		<div class="agent-profile">
			<A href="/">"Back to Network"</A>
			{move || {
				let agent = agent();
				let metrics = agent.metrics;
				view! {
					<header class="agent-profile-head">
						<div class="agent-avatar">{agent.avatar}</div>
						<div>
							<h1>{agent.name}</h1>
							<span class="tier-badge">{agent.tier.label()}</span>
							<span class="status-badge">{agent.status.label()}</span>
							<p class="tagline">{agent.tagline}</p>
							<p class="description">{agent.description}</p>
						</div>
					</header>

					<section class="agent-metrics">
						<div>
							<strong>{format!("{}%", metrics.uptime)}</strong>
							" uptime"
						</div>
						<div>
							<strong>{format!("{}K", metrics.tasks_completed / 1000)}</strong>
							" tasks"
						</div>
						<div>
							<strong>{format!("{}s", metrics.avg_response_time)}</strong>
							" latency"
						</div>
						<div>
							<strong>{metrics.rating.to_string()}</strong>
							" rating"
						</div>
					</section>

					<section>
						<h2>"Capabilities"</h2>
						{chips(agent.capabilities)}
					</section>
					<section>
						<h2>"Integrations"</h2>
						{chips(agent.integrations)}
					</section>
					<section>
						<h2>"MCP Servers"</h2>
						{chips(agent.mcp_servers)}
					</section>

					<footer class="agent-profile-foot">
						<span>{format!("{} connections", agent.connections)}</span>
						<span>{format!("${}/task", agent.price_per_task)}</span>
						<span>{format!("Owned by {} since {}", agent.owner, agent.created_at)}</span>
					</footer>
				}
			}}
		</div>
	}
}
