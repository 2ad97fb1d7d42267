use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::network_graph::{NetworkAgent, NetworkGraphCanvas};
use crate::data::{AGENTS, Agent, Status, find_agent};

/// Route of an agent's full profile.
pub fn profile_path(id: &str) -> String {
	format!("/agents/{id}")
}

fn status_class(status: Status) -> &'static str {
	match status {
		Status::Online => "status-online",
		Status::Busy => "status-busy",
		Status::Offline => "status-offline",
	}
}

/// Agent network page: the animated graph plus a detail panel for the
/// selected node.
#[component]
pub fn Network() -> impl IntoView {
	let agents = Signal::derive(|| AGENTS.iter().map(NetworkAgent::from).collect::<Vec<_>>());
	let selected = RwSignal::new(None::<String>);
	let selected_agent = move || selected.get().and_then(|id| find_agent(&id));

	let profile_request = RwSignal::new(None::<String>);
	let navigate = use_navigate();
	Effect::new(move |_| {
		if let Some(id) = profile_request.get() {
			navigate(&profile_path(&id), Default::default());
		}
	});
	let on_view_agent = Callback::new(move |id: String| profile_request.set(Some(id)));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div class="network-page">
				<header class="network-header">
					<h1>"Agent Network"</h1>
					<p class="subtitle">"Visualize connections between agents in the registry"</p>
				</header>

				<div class="network-body">
					<div class="network-stage">
						<NetworkGraphCanvas agents=agents selected=selected />
						<Legend />
						<div class="network-hint">"Click a node to view details"</div>
					</div>

					<aside class="agent-panel" class:active=move || selected_agent().is_some()>
						{move || match selected_agent() {
							Some(agent) => {
								view! { <AgentSummary agent=agent on_view_agent=on_view_agent /> }
									.into_any()
							}
							None => {
								view! {
									<p class="agent-panel-empty">
										"Select an agent node to view details"
									</p>
								}
									.into_any()
							}
						}}
					</aside>
				</div>
			</div>
		</ErrorBoundary>
	}
}

#[component]
fn Legend() -> impl IntoView {
	view! {
		<div class="network-legend">
			<div class="legend-title">"Node Types"</div>
			<div class="legend-item tier-enterprise">"Enterprise"</div>
			<div class="legend-item tier-professional">"Professional"</div>
			<div class="legend-item tier-starter">"Starter"</div>
		</div>
	}
}

/// Detail panel for the selected agent. `on_view_agent` receives the agent id
/// when the full profile is requested.
#[component]
fn AgentSummary(agent: &'static Agent, on_view_agent: Callback<String>) -> impl IntoView {
	view! {
		<div class="agent-summary">
			<div class="agent-summary-head">
				<div class="agent-avatar">{agent.avatar}</div>
				<div>
					<h3>{agent.name}</h3>
					<p class="tagline">{agent.tagline}</p>
				</div>
			</div>

			<dl class="agent-facts">
				<dt>"Status"</dt>
				<dd class=status_class(agent.status)>{agent.status.label()}</dd>
				<dt>"Tier"</dt>
				<dd>{agent.tier.label()}</dd>
				<dt>"Connections"</dt>
				<dd>{agent.connections.to_string()}</dd>
				<dt>"Rating"</dt>
				<dd>{agent.metrics.rating.to_string()}</dd>
			</dl>

			<div class="agent-capabilities">
				<div class="section-label">"Capabilities"</div>
				{agent
					.capabilities
					.iter()
					.take(4)
					.map(|cap| view! { <span class="chip">{*cap}</span> })
					.collect_view()}
			</div>

			<button class="view-profile" on:click=move |_| on_view_agent.run(agent.id.to_string())>
				"View Full Profile"
			</button>
		</div>
	}
}
