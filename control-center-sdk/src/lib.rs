//! Data model for the control-center dashboard
//!
//! Every record here is immutable display data: the dashboard seeds them
//! from literals (or a JSON catalog) and never mutates them afterwards.

use serde::{Deserialize, Serialize};

/// Icon identifiers understood by every icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconTag {
    Zap,
    Video,
    Share,
    Brain,
    Palette,
    Target,
    Eye,
    Image,
    FileText,
    Instagram,
    Twitter,
    Cpu,
    Branch,
    Globe,
    Shield,
    TrendingUp,
    Home,
    Dashboard,
    User,
    Settings,
    Sparkles,
    Chart,
}

/// Named accent colors used by cards, badges and bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Blue,
    Emerald,
    Violet,
    Pink,
    Amber,
    Red,
    Sky,
    Rose,
    Cyan,
    Orange,
    Slate,
}

impl ColorTag {
    /// Hex form of the accent, as used by the web palette
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTag::Blue => "#3B82F6",
            ColorTag::Emerald => "#10B981",
            ColorTag::Violet => "#8B5CF6",
            ColorTag::Pink => "#EC4899",
            ColorTag::Amber => "#F59E0B",
            ColorTag::Red => "#EF4444",
            ColorTag::Sky => "#0EA5E9",
            ColorTag::Rose => "#E1306C",
            ColorTag::Cyan => "#1DA1F2",
            ColorTag::Orange => "#F97316",
            ColorTag::Slate => "#64748B",
        }
    }

    /// RGB triple parsed from [`ColorTag::hex`]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

/// Direction of a metric's change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Up,
    Down,
}

impl TrendDirection {
    /// Only an explicit leading `+` counts as growth ("+14k"); "0", "0.1%"
    /// and "-3%" all read as Down
    pub fn from_delta(delta: &str) -> Self {
        if delta.trim_start().starts_with('+') {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        }
    }
}

/// A single labeled dashboard metric
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub delta: String,
    pub icon: IconTag,
    pub color: ColorTag,
}

impl Metric {
    pub fn trend(&self) -> TrendDirection {
        TrendDirection::from_delta(&self.delta)
    }
}

/// A labeled progress bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressItem {
    pub label: String,
    pub current: f64,
    pub total: f64,
    pub color: ColorTag,
}

impl ProgressItem {
    /// Completion in percent, clamped to `[0, 100]`.
    ///
    /// A non-positive or non-finite total yields 0.
    pub fn percentage(&self) -> f64 {
        clamp_percent(self.current, self.total)
    }

    /// [`ProgressItem::percentage`] as a ratio in `[0, 1]`
    pub fn ratio(&self) -> f64 {
        self.percentage() / 100.0
    }
}

/// `current / total * 100`, clamped to `[0, 100]`
pub fn clamp_percent(current: f64, total: f64) -> f64 {
    if !current.is_finite() || !total.is_finite() || total <= 0.0 {
        return 0.0;
    }
    (current / total * 100.0).clamp(0.0, 100.0)
}

/// Availability badge shown on agent tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentStatus {
    #[default]
    Active,
    Standby,
}

impl AgentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentStatus::Active => "active",
            AgentStatus::Standby => "standby",
        }
    }
}

/// A specialised agent in the squad
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    pub name: String,
    pub role: String,
    pub mission: String,
    pub icon: IconTag,
    pub color: ColorTag,
    pub performance_percent: f64,
    pub task_queue: Vec<String>,
    #[serde(default)]
    pub status: AgentStatus,
}

impl Agent {
    /// Performance clamped to `[0, 100]`
    pub fn performance(&self) -> f64 {
        clamp_percent(self.performance_percent, 100.0)
    }
}

/// Lifecycle badge of a workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    #[default]
    Active,
    Inactive,
}

impl LifecycleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleStatus::Active => "active",
            LifecycleStatus::Inactive => "inactive",
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, LifecycleStatus::Active)
    }
}

/// Status lines appended after the seeded log of an active workflow
pub const ACTIVE_TRAILER: [&str; 2] = ["[system] pipeline healthy", "[system] awaiting next trigger..."];

/// Status lines appended after the seeded log of an inactive workflow
pub const INACTIVE_TRAILER: [&str; 2] = ["[system] pipeline paused", "[system] no trigger scheduled"];

/// A production workflow in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub status: LifecycleStatus,
    pub icon: IconTag,
    pub color: ColorTag,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub logs: Vec<String>,
}

impl Workflow {
    /// Steps paired with their 1-based position
    pub fn numbered_steps(&self) -> impl Iterator<Item = (usize, &str)> {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| (i + 1, step.as_str()))
    }

    /// Seeded log lines followed by the fixed status trailer
    pub fn log_lines(&self) -> Vec<String> {
        let trailer = if self.status.is_active() {
            ACTIVE_TRAILER
        } else {
            INACTIVE_TRAILER
        };
        self.logs
            .iter()
            .cloned()
            .chain(trailer.iter().map(|line| line.to_string()))
            .collect()
    }
}

/// Which catalog an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Agent,
    Workflow,
}
