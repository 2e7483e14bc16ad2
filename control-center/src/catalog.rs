//! Seeded dashboard content
//!
//! The dashboard ships with one canonical catalog of agents, workflows and
//! metrics. A JSON file can replace any of its sections; sections missing
//! from the file keep their seeded values.

use anyhow::{Context, Result};
use control_center_sdk::{
    Agent, AgentStatus, ColorTag, IconTag, LifecycleStatus, Metric, ProgressItem, Workflow,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Dashboard metric whose value follows the active workflow count
pub const ACTIVE_UNITS_LABEL: &str = "Active Units";

/// A highlight tile on the landing page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: IconTag,
    pub color: ColorTag,
}

/// Landing page copy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub tagline: String,
    pub title: String,
    pub highlight: String,
    pub subtitle: String,
    pub features: Vec<Feature>,
}

/// Everything the dashboard displays
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub hero: Hero,
    pub metrics: Vec<Metric>,
    pub progress: Vec<ProgressItem>,
    /// Bar heights (percent) of the throughput chart
    pub throughput: Vec<u64>,
    pub agents: Vec<Agent>,
    pub workflows: Vec<Workflow>,
}

/// Partial catalog as read from disk
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    hero: Option<Hero>,
    metrics: Option<Vec<Metric>>,
    progress: Option<Vec<ProgressItem>>,
    throughput: Option<Vec<u64>>,
    agents: Option<Vec<Agent>>,
    workflows: Option<Vec<Workflow>>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Catalog {
    /// Load a catalog file, falling back to seeded sections it omits
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json_str(&content)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;
        info!(
            path = %path.display(),
            agents = catalog.agents.len(),
            workflows = catalog.workflows.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::seeded();
        let custom_metrics = file.metrics.is_some();

        if let Some(hero) = file.hero {
            catalog.hero = hero;
        }
        if let Some(metrics) = file.metrics {
            catalog.metrics = metrics;
        }
        if let Some(progress) = file.progress {
            catalog.progress = progress;
        }
        if let Some(throughput) = file.throughput {
            catalog.throughput = throughput;
        }
        if let Some(agents) = file.agents {
            catalog.agents = agents;
        }
        if let Some(workflows) = file.workflows {
            catalog.workflows = workflows;
            if !custom_metrics {
                catalog.sync_active_units();
            }
        }

        Ok(catalog)
    }

    pub fn agent(&self, idx: usize) -> Option<&Agent> {
        self.agents.get(idx)
    }

    pub fn workflow(&self, idx: usize) -> Option<&Workflow> {
        self.workflows.get(idx)
    }

    pub fn active_workflow_count(&self) -> usize {
        self.workflows.iter().filter(|w| w.status.is_active()).count()
    }

    /// Rewrite the built-in active units metric from the current workflows
    fn sync_active_units(&mut self) {
        let count = self.active_workflow_count().to_string();
        if let Some(metric) = self.metrics.iter_mut().find(|m| m.label == ACTIVE_UNITS_LABEL) {
            metric.value = count;
        }
    }

    /// The built-in content
    pub fn seeded() -> Self {
        let mut catalog = Self {
            hero: Hero {
                tagline: "Next-generation production intelligence".to_string(),
                title: "The Elite of".to_string(),
                highlight: "Production".to_string(),
                subtitle: "Automate media creation from concept to omnichannel delivery, with unmatched precision and power.".to_string(),
                features: vec![
                    Feature {
                        title: "Ultimate Speed".to_string(),
                        description: "Production 10x faster than traditional methods.".to_string(),
                        icon: IconTag::Zap,
                        color: ColorTag::Blue,
                    },
                    Feature {
                        title: "Elite Quality".to_string(),
                        description: "Automated consistency checks on every pixel.".to_string(),
                        icon: IconTag::Shield,
                        color: ColorTag::Violet,
                    },
                    Feature {
                        title: "Maximum Reach".to_string(),
                        description: "Greater visibility across every strategic network.".to_string(),
                        icon: IconTag::TrendingUp,
                        color: ColorTag::Emerald,
                    },
                ],
            },
            metrics: vec![
                Metric {
                    label: "Requests Produced".to_string(),
                    value: "1.2M".to_string(),
                    delta: "+14k".to_string(),
                    icon: IconTag::Cpu,
                    color: ColorTag::Blue,
                },
                Metric {
                    label: ACTIVE_UNITS_LABEL.to_string(),
                    value: String::new(),
                    delta: "+1".to_string(),
                    icon: IconTag::Branch,
                    color: ColorTag::Violet,
                },
                Metric {
                    label: "Availability".to_string(),
                    value: "99.9%".to_string(),
                    delta: "+0.1%".to_string(),
                    icon: IconTag::Globe,
                    color: ColorTag::Emerald,
                },
                Metric {
                    label: "Active Volume".to_string(),
                    value: "4.2 TB".to_string(),
                    delta: "-2%".to_string(),
                    icon: IconTag::Zap,
                    color: ColorTag::Orange,
                },
            ],
            progress: vec![
                ProgressItem {
                    label: "Creative Production".to_string(),
                    current: 85.0,
                    total: 100.0,
                    color: ColorTag::Blue,
                },
                ProgressItem {
                    label: "Data Intelligence".to_string(),
                    current: 42.0,
                    total: 100.0,
                    color: ColorTag::Violet,
                },
                ProgressItem {
                    label: "Social Deployment".to_string(),
                    current: 92.0,
                    total: 100.0,
                    color: ColorTag::Emerald,
                },
            ],
            throughput: vec![30, 60, 45, 90, 55, 100, 40, 85, 60, 95, 45, 70, 30, 90],
            agents: seeded_agents(),
            workflows: seeded_workflows(),
        };
        catalog.sync_active_units();
        catalog
    }
}

fn seeded_agents() -> Vec<Agent> {
    vec![
        Agent {
            name: "Neo-Genesis".to_string(),
            role: "Media Generator".to_string(),
            mission: "Creates advanced cinematic video sequences with consistent lighting and motion.".to_string(),
            icon: IconTag::Video,
            color: ColorTag::Blue,
            performance_percent: 94.0,
            task_queue: strings(&["4K cinematic pass", "Temporal smoothing", "Color grade export"]),
            status: AgentStatus::Active,
        },
        Agent {
            name: "Social-Sentinel".to_string(),
            role: "Broadcast Analyst".to_string(),
            mission: "Monitors trends and distributes content across every platform.".to_string(),
            icon: IconTag::Share,
            color: ColorTag::Emerald,
            performance_percent: 88.0,
            task_queue: strings(&["TikTok trend sweep", "Schedule weekend drops"]),
            status: AgentStatus::Active,
        },
        Agent {
            name: "Deep-Cognition".to_string(),
            role: "Research Agent".to_string(),
            mission: "Synthesises intelligence into strategic reports for the squad.".to_string(),
            icon: IconTag::Brain,
            color: ColorTag::Violet,
            performance_percent: 71.0,
            task_queue: strings(&["Competitor digest", "Quarterly insight report"]),
            status: AgentStatus::Standby,
        },
        Agent {
            name: "Aura-Design".to_string(),
            role: "Visual Architect".to_string(),
            mission: "Designs interfaces and interactive components for every campaign.".to_string(),
            icon: IconTag::Palette,
            color: ColorTag::Pink,
            performance_percent: 90.0,
            task_queue: strings(&["Landing hero refresh", "Component audit", "Motion tokens"]),
            status: AgentStatus::Active,
        },
        Agent {
            name: "Target-Pulse".to_string(),
            role: "Performance Strategist".to_string(),
            mission: "Optimises ROI with predictive analysis of every channel.".to_string(),
            icon: IconTag::Target,
            color: ColorTag::Amber,
            performance_percent: 83.0,
            task_queue: strings(&["Budget reallocation", "Forecast Q3 reach"]),
            status: AgentStatus::Active,
        },
        Agent {
            name: "Shadow-Editor".to_string(),
            role: "Post-Production".to_string(),
            mission: "Automated editing and audio synchronisation for finished cuts.".to_string(),
            icon: IconTag::Eye,
            color: ColorTag::Red,
            performance_percent: 97.0,
            task_queue: strings(&["Sync voice-over", "Trim trailer", "Loudness normalisation"]),
            status: AgentStatus::Active,
        },
    ]
}

fn seeded_workflows() -> Vec<Workflow> {
    vec![
        Workflow {
            name: "Production Manager".to_string(),
            category: "Central System".to_string(),
            status: LifecycleStatus::Active,
            icon: IconTag::Brain,
            color: ColorTag::Violet,
            description: "Central control of the squad. Coordinates storage, communication and creation units so every deliverable ships on schedule.".to_string(),
            steps: strings(&["Collect briefs", "Assign units", "Track deliverables", "Archive outputs"]),
            logs: strings(&["[manager] 6 agents online", "[manager] 8 units registered"]),
        },
        Workflow {
            name: "Create Video Tool".to_string(),
            category: "Creative Production".to_string(),
            status: LifecycleStatus::Active,
            icon: IconTag::Video,
            color: ColorTag::Blue,
            description: "Instant production of cinematic videos with audio synchronisation and secure archiving.".to_string(),
            steps: strings(&["Parse storyboard", "Generate shots", "Sync audio", "Encode master", "Archive"]),
            logs: strings(&["[video] storyboard parsed", "[video] 12 shots generated"]),
        },
        Workflow {
            name: "Create Image Tool".to_string(),
            category: "Creative Production".to_string(),
            status: LifecycleStatus::Active,
            icon: IconTag::Image,
            color: ColorTag::Sky,
            description: "High-fidelity visual generation with an automatic delivery pipeline to the storage servers.".to_string(),
            steps: strings(&["Receive prompt", "Generate variations", "Upscale selection", "Deliver to storage"]),
            logs: strings(&["[image] prompt received", "[image] 4 variations rendered", "[image] upscale complete"]),
        },
        Workflow {
            name: "VFX Converter".to_string(),
            category: "Post-Production".to_string(),
            status: LifecycleStatus::Active,
            icon: IconTag::Zap,
            color: ColorTag::Amber,
            description: "Turns static assets into dynamic video sequences for advertising campaigns.".to_string(),
            steps: strings(&["Import asset", "Apply motion rig", "Render sequence"]),
            logs: strings(&["[vfx] asset imported"]),
        },
        Workflow {
            name: "Retouch Studio".to_string(),
            category: "Advanced Editing".to_string(),
            status: LifecycleStatus::Inactive,
            icon: IconTag::Palette,
            color: ColorTag::Pink,
            description: "Visual editing unit that adjusts content to specific requirements before publication.".to_string(),
            steps: strings(&["Load media", "Apply corrections", "Review", "Export"]),
            logs: strings(&["[retouch] last export 2 days ago"]),
        },
        Workflow {
            name: "Instagram Publisher".to_string(),
            category: "Social Deployment".to_string(),
            status: LifecycleStatus::Active,
            icon: IconTag::Instagram,
            color: ColorTag::Rose,
            description: "Publishes produced media straight to target audiences with caption management.".to_string(),
            steps: strings(&["Pick media", "Write caption", "Publish", "Collect engagement"]),
            logs: strings(&["[instagram] 3 posts scheduled"]),
        },
        Workflow {
            name: "X / Twitter Publisher".to_string(),
            category: "Social Deployment".to_string(),
            status: LifecycleStatus::Active,
            icon: IconTag::Twitter,
            color: ColorTag::Cyan,
            description: "Fast distribution of content and news to global information feeds.".to_string(),
            steps: strings(&["Draft thread", "Attach media", "Publish"]),
            logs: strings(&["[x] thread drafted"]),
        },
        Workflow {
            name: "Report Generator".to_string(),
            category: "Data Management".to_string(),
            status: LifecycleStatus::Active,
            icon: IconTag::FileText,
            color: ColorTag::Emerald,
            description: "Transforms raw data into structured, actionable documents instantly.".to_string(),
            steps: strings(&["Ingest data", "Summarise", "Format document", "Distribute"]),
            logs: strings(&["[report] weekly digest generated"]),
        },
    ]
}
