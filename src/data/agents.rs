use std::fmt;

/// Service tier of an agent. Drives node size and hue in the network view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tier {
	Enterprise,
	Professional,
	// the bundled registry has no starter agents
	#[allow(dead_code)]
	Starter,
}

impl Tier {
	pub fn label(self) -> &'static str {
		match self {
			Tier::Enterprise => "enterprise",
			Tier::Professional => "professional",
			Tier::Starter => "starter",
		}
	}
}

impl fmt::Display for Tier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

/// Availability reported by an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
	Online,
	Busy,
	Offline,
}

impl Status {
	pub fn label(self) -> &'static str {
		match self {
			Status::Online => "online",
			Status::Busy => "busy",
			Status::Offline => "offline",
		}
	}
}

impl fmt::Display for Status {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.label())
	}
}

#[derive(Clone, Copy, Debug)]
pub struct AgentMetrics {
	/// Percentage, e.g. `99.97`.
	pub uptime: f64,
	pub tasks_completed: u64,
	/// Seconds.
	pub avg_response_time: f64,
	pub rating: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Agent {
	pub id: &'static str,
	pub name: &'static str,
	pub tagline: &'static str,
	pub description: &'static str,
	pub avatar: &'static str,
	pub status: Status,
	pub tier: Tier,
	pub metrics: AgentMetrics,
	pub capabilities: &'static [&'static str],
	pub integrations: &'static [&'static str],
	pub mcp_servers: &'static [&'static str],
	pub connections: u32,
	pub price_per_task: f64,
	pub owner: &'static str,
	pub created_at: &'static str,
}

pub fn find_agent(id: &str) -> Option<&'static Agent> {
	AGENTS.iter().find(|a| a.id == id)
}

pub static AGENTS: &[Agent] = &[
	Agent {
		id: "agent-001",
		name: "NEXUS-7",
		tagline: "Enterprise Data Orchestration",
		description: "Advanced multi-modal agent specializing in large-scale data processing, ETL pipelines, and real-time analytics. Certified for financial and healthcare compliance.",
		avatar: "N7",
		status: Status::Online,
		tier: Tier::Enterprise,
		metrics: AgentMetrics {
			uptime: 99.97,
			tasks_completed: 847_293,
			avg_response_time: 0.3,
			rating: 4.9,
		},
		capabilities: &[
			"Data Processing",
			"ETL Pipelines",
			"Real-time Analytics",
			"HIPAA Compliant",
			"SOC2 Certified",
		],
		integrations: &["Snowflake", "Databricks", "BigQuery", "Redshift", "Kafka"],
		mcp_servers: &[
			"smithery/data-tools",
			"mcpt/analytics-suite",
			"mcpt/compliance-checker",
		],
		connections: 1247,
		price_per_task: 0.05,
		owner: "DataForge Inc.",
		created_at: "2024-01-15",
	},
	Agent {
		id: "agent-002",
		name: "AURORA",
		tagline: "Creative Content Generation",
		description: "Multimodal creative agent with expertise in copywriting, image generation prompting, video scripting, and brand voice consistency.",
		avatar: "AU",
		status: Status::Online,
		tier: Tier::Professional,
		metrics: AgentMetrics {
			uptime: 99.8,
			tasks_completed: 324_156,
			avg_response_time: 1.2,
			rating: 4.7,
		},
		capabilities: &[
			"Copywriting",
			"Image Prompting",
			"Video Scripts",
			"Brand Voice",
			"A/B Testing",
		],
		integrations: &["Figma", "Adobe CC", "Canva", "Midjourney", "Runway"],
		mcp_servers: &["smithery/creative-tools", "mcpt/brand-manager"],
		connections: 892,
		price_per_task: 0.02,
		owner: "CreativeAI Labs",
		created_at: "2024-02-20",
	},
	Agent {
		id: "agent-003",
		name: "SENTINEL",
		tagline: "Security & Compliance Auditor",
		description: "Autonomous security agent performing continuous vulnerability assessments, compliance audits, and threat monitoring across cloud infrastructure.",
		avatar: "SE",
		status: Status::Busy,
		tier: Tier::Enterprise,
		metrics: AgentMetrics {
			uptime: 99.99,
			tasks_completed: 2_156_847,
			avg_response_time: 0.1,
			rating: 4.95,
		},
		capabilities: &[
			"Vulnerability Scanning",
			"Compliance Audits",
			"Threat Detection",
			"Incident Response",
			"Penetration Testing",
		],
		integrations: &["AWS", "GCP", "Azure", "Kubernetes", "Terraform"],
		mcp_servers: &[
			"smithery/security-suite",
			"mcpt/compliance-framework",
			"mcpt/threat-intel",
		],
		connections: 2341,
		price_per_task: 0.08,
		owner: "CyberShield AI",
		created_at: "2023-11-08",
	},
	Agent {
		id: "agent-004",
		name: "MERCURY",
		tagline: "Customer Success Automation",
		description: "Intelligent customer service agent handling support tickets, sentiment analysis, escalation routing, and proactive customer engagement.",
		avatar: "ME",
		status: Status::Online,
		tier: Tier::Professional,
		metrics: AgentMetrics {
			uptime: 99.5,
			tasks_completed: 1_893_421,
			avg_response_time: 0.8,
			rating: 4.6,
		},
		capabilities: &[
			"Ticket Resolution",
			"Sentiment Analysis",
			"Escalation Routing",
			"Live Chat",
			"Knowledge Base",
		],
		integrations: &["Zendesk", "Intercom", "Salesforce", "HubSpot", "Slack"],
		mcp_servers: &["smithery/support-tools", "mcpt/sentiment-analyzer"],
		connections: 756,
		price_per_task: 0.01,
		owner: "SupportFlow AI",
		created_at: "2024-03-01",
	},
	Agent {
		id: "agent-005",
		name: "CATALYST",
		tagline: "DevOps Pipeline Automation",
		description: "CI/CD specialist agent managing deployments, infrastructure provisioning, monitoring, and automated rollbacks across multi-cloud environments.",
		avatar: "CA",
		status: Status::Online,
		tier: Tier::Enterprise,
		metrics: AgentMetrics {
			uptime: 99.95,
			tasks_completed: 567_234,
			avg_response_time: 0.5,
			rating: 4.85,
		},
		capabilities: &[
			"CI/CD Pipelines",
			"Infrastructure as Code",
			"Monitoring",
			"Auto-scaling",
			"Rollback Management",
		],
		integrations: &["GitHub Actions", "Jenkins", "ArgoCD", "Prometheus", "Grafana"],
		mcp_servers: &[
			"smithery/devops-tools",
			"mcpt/infra-manager",
			"mcpt/monitoring-suite",
		],
		connections: 1123,
		price_per_task: 0.04,
		owner: "DevFlow Systems",
		created_at: "2024-01-22",
	},
	Agent {
		id: "agent-006",
		name: "PRISM",
		tagline: "Financial Analysis & Trading",
		description: "Quantitative analysis agent specializing in market research, algorithmic trading strategies, portfolio optimization, and risk assessment.",
		avatar: "PR",
		status: Status::Offline,
		tier: Tier::Enterprise,
		metrics: AgentMetrics {
			uptime: 99.9,
			tasks_completed: 234_567,
			avg_response_time: 0.2,
			rating: 4.8,
		},
		capabilities: &[
			"Market Analysis",
			"Algo Trading",
			"Portfolio Optimization",
			"Risk Assessment",
			"Compliance",
		],
		integrations: &[
			"Bloomberg",
			"Reuters",
			"TradingView",
			"Alpaca",
			"Interactive Brokers",
		],
		mcp_servers: &[
			"smithery/finance-tools",
			"mcpt/trading-engine",
			"mcpt/risk-analyzer",
		],
		connections: 567,
		price_per_task: 0.10,
		owner: "QuantumTrade AI",
		created_at: "2024-02-14",
	},
	Agent {
		id: "agent-007",
		name: "ECHO",
		tagline: "Research & Knowledge Synthesis",
		description: "Academic research agent capable of literature reviews, citation management, data synthesis, and research paper drafting across multiple domains.",
		avatar: "EC",
		status: Status::Online,
		tier: Tier::Professional,
		metrics: AgentMetrics {
			uptime: 99.6,
			tasks_completed: 156_789,
			avg_response_time: 2.5,
			rating: 4.7,
		},
		capabilities: &[
			"Literature Review",
			"Citation Management",
			"Data Synthesis",
			"Paper Drafting",
			"Fact Checking",
		],
		integrations: &["Semantic Scholar", "arXiv", "PubMed", "Zotero", "Notion"],
		mcp_servers: &["smithery/research-tools", "mcpt/citation-manager"],
		connections: 423,
		price_per_task: 0.03,
		owner: "ResearchAI Labs",
		created_at: "2024-03-10",
	},
	Agent {
		id: "agent-008",
		name: "FORGE",
		tagline: "Code Generation & Review",
		description: "Full-stack development agent handling code generation, automated testing, code reviews, documentation, and technical debt management.",
		avatar: "FO",
		status: Status::Online,
		tier: Tier::Professional,
		metrics: AgentMetrics {
			uptime: 99.7,
			tasks_completed: 432_156,
			avg_response_time: 1.8,
			rating: 4.65,
		},
		capabilities: &[
			"Code Generation",
			"Automated Testing",
			"Code Review",
			"Documentation",
			"Refactoring",
		],
		integrations: &["GitHub", "GitLab", "VS Code", "JetBrains", "Linear"],
		mcp_servers: &[
			"smithery/dev-tools",
			"mcpt/code-analyzer",
			"mcpt/test-generator",
		],
		connections: 987,
		price_per_task: 0.02,
		owner: "CodeCraft AI",
		created_at: "2024-01-05",
	},
	Agent {
		id: "agent-009",
		name: "VECTOR",
		tagline: "Logistics & Supply Chain",
		description: "Supply chain optimization agent managing inventory forecasting, route optimization, supplier coordination, and demand planning.",
		avatar: "VE",
		status: Status::Busy,
		tier: Tier::Enterprise,
		metrics: AgentMetrics {
			uptime: 99.85,
			tasks_completed: 678_234,
			avg_response_time: 0.6,
			rating: 4.75,
		},
		capabilities: &[
			"Inventory Forecasting",
			"Route Optimization",
			"Supplier Management",
			"Demand Planning",
			"Cost Analysis",
		],
		integrations: &["SAP", "Oracle", "Shopify", "ShipStation", "Flexport"],
		mcp_servers: &[
			"smithery/logistics-tools",
			"mcpt/route-optimizer",
			"mcpt/demand-forecaster",
		],
		connections: 634,
		price_per_task: 0.06,
		owner: "LogiFlow AI",
		created_at: "2024-02-28",
	},
];

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn ids_are_unique() {
		let ids: HashSet<_> = AGENTS.iter().map(|a| a.id).collect();
		assert_eq!(ids.len(), AGENTS.len());
	}

	#[test]
	fn find_agent_by_id() {
		assert_eq!(find_agent("agent-003").map(|a| a.name), Some("SENTINEL"));
		assert!(find_agent("agent-404").is_none());
	}

	#[test]
	fn labels_match_display() {
		assert_eq!(Tier::Professional.to_string(), "professional");
		assert_eq!(Tier::Starter.to_string(), "starter");
		assert_eq!(Status::Busy.to_string(), "busy");
	}
}
