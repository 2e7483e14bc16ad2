//! Page routing and shell-owned view state

use std::fmt;
use std::str::FromStr;

use control_center_sdk::{EntityKind, IconTag};

/// Application page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
    Tasks,
    Agents,
    Workflows,
    Settings,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Home,
        Page::Dashboard,
        Page::Tasks,
        Page::Agents,
        Page::Workflows,
        Page::Settings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dashboard => "dashboard",
            Page::Tasks => "tasks",
            Page::Agents => "agents",
            Page::Workflows => "workflows",
            Page::Settings => "settings",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Tasks => "Operations",
            Page::Agents => "Experts",
            Page::Workflows => "Production",
            Page::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> IconTag {
        match self {
            Page::Home => IconTag::Home,
            Page::Dashboard => IconTag::Dashboard,
            Page::Tasks => IconTag::Target,
            Page::Agents => IconTag::User,
            Page::Workflows => IconTag::Branch,
            Page::Settings => IconTag::Settings,
        }
    }

    /// Number key that jumps to this page
    pub fn hotkey(&self) -> char {
        match self {
            Page::Home => '1',
            Page::Dashboard => '2',
            Page::Tasks => '3',
            Page::Agents => '4',
            Page::Workflows => '5',
            Page::Settings => '6',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Page> {
        Page::ALL.into_iter().find(|p| p.hotkey() == c)
    }

    fn position(&self) -> usize {
        Page::ALL.iter().position(|p| p == self).unwrap_or(0)
    }

    pub fn next(&self) -> Page {
        Page::ALL[(self.position() + 1) % Page::ALL.len()]
    }

    pub fn previous(&self) -> Page {
        Page::ALL[(self.position() + Page::ALL.len() - 1) % Page::ALL.len()]
    }

    /// The entity gallery shown on this page, if any
    pub fn gallery(&self) -> Option<EntityKind> {
        match self {
            Page::Agents => Some(EntityKind::Agent),
            Page::Workflows => Some(EntityKind::Workflow),
            _ => None,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Page::ALL
            .into_iter()
            .find(|p| p.as_str() == lowered)
            .ok_or_else(|| format!("unknown page '{}'", s))
    }
}

/// Visual mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; `None` for anything unrecognised
    pub fn parse(value: &str) -> Option<Theme> {
        match value.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// The entity shown in the detail drawer
///
/// Indices refer to positions in the immutable catalogs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    None,
    Agent(usize),
    Workflow(usize),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn agent(&self) -> Option<usize> {
        match self {
            Selection::Agent(idx) => Some(*idx),
            _ => None,
        }
    }

    pub fn workflow(&self) -> Option<usize> {
        match self {
            Selection::Workflow(idx) => Some(*idx),
            _ => None,
        }
    }
}

/// Navigation, selection and theme owned by the shell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub page: Page,
    pub selection: Selection,
    pub theme: Theme,
    /// Bumped on every non-null selection; each value is a fresh drawer mount
    pub drawer_generation: u64,
}
