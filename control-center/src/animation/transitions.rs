//! Declarative transition table
//!
//! Each trigger maps to a fixed list of descriptors. The [`Animator`]
//! resolves selectors to concrete elements and turns descriptors into tweens.
//!
//! [`Animator`]: super::Animator

use super::easing::Easing;
use crate::app::CardId;

/// Animated visual property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Opacity,
    /// Horizontal offset as a fraction of the element's width
    TranslateX,
    /// Vertical offset in layout pixels (see [`PX_PER_ROW`])
    TranslateY,
    Scale,
}

/// Layout pixels per terminal row when mapping `TranslateY`
pub const PX_PER_ROW: f32 = 20.0;

impl Property {
    /// Value of the property when nothing animates it
    pub fn rest(&self) -> f32 {
        match self {
            Property::Opacity | Property::Scale => 1.0,
            Property::TranslateX | Property::TranslateY => 0.0,
        }
    }
}

/// A concrete animated element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Page,
    HeroTitle,
    HeroSubtitle,
    Feature(usize),
    Drawer,
    Card(CardId),
}

/// Which elements a descriptor applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Page,
    HeroTitle,
    HeroSubtitle,
    /// Every landing feature tile, staggered in order
    Features,
    Drawer,
    /// The card carried by the trigger
    TriggerCard,
}

/// State change or mount event that starts transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    PageEnter,
    HeroEnter { features: usize },
    DrawerMount,
    HoverEnter(CardId),
    HoverLeave(CardId),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub selector: Selector,
    pub property: Property,
    /// Start value; `None` starts from the currently displayed value
    pub from: Option<f32>,
    pub to: f32,
    pub duration_ms: u64,
    pub delay_ms: u64,
    /// Extra delay per element when the selector matches several
    pub stagger_ms: u64,
    pub easing: Easing,
}

const PAGE_ENTER: &[Transition] = &[
    Transition {
        selector: Selector::Page,
        property: Property::Opacity,
        from: Some(0.0),
        to: 1.0,
        duration_ms: 600,
        delay_ms: 0,
        stagger_ms: 0,
        easing: Easing::Power4Out,
    },
    Transition {
        selector: Selector::Page,
        property: Property::TranslateY,
        from: Some(20.0),
        to: 0.0,
        duration_ms: 600,
        delay_ms: 0,
        stagger_ms: 0,
        easing: Easing::Power4Out,
    },
];

// Timeline: title at 0s, subtitle overlaps by 0.6s, features overlap by 0.4s
const HERO_ENTER: &[Transition] = &[
    Transition {
        selector: Selector::HeroTitle,
        property: Property::TranslateY,
        from: Some(100.0),
        to: 0.0,
        duration_ms: 1000,
        delay_ms: 0,
        stagger_ms: 0,
        easing: Easing::Power4Out,
    },
    Transition {
        selector: Selector::HeroTitle,
        property: Property::Opacity,
        from: Some(0.0),
        to: 1.0,
        duration_ms: 1000,
        delay_ms: 0,
        stagger_ms: 0,
        easing: Easing::Power4Out,
    },
    Transition {
        selector: Selector::HeroSubtitle,
        property: Property::TranslateY,
        from: Some(20.0),
        to: 0.0,
        duration_ms: 800,
        delay_ms: 400,
        stagger_ms: 0,
        easing: Easing::Power1Out,
    },
    Transition {
        selector: Selector::HeroSubtitle,
        property: Property::Opacity,
        from: Some(0.0),
        to: 1.0,
        duration_ms: 800,
        delay_ms: 400,
        stagger_ms: 0,
        easing: Easing::Power1Out,
    },
    Transition {
        selector: Selector::Features,
        property: Property::Scale,
        from: Some(0.8),
        to: 1.0,
        duration_ms: 600,
        delay_ms: 800,
        stagger_ms: 200,
        easing: Easing::BackOut(1.7),
    },
    Transition {
        selector: Selector::Features,
        property: Property::Opacity,
        from: Some(0.0),
        to: 1.0,
        duration_ms: 600,
        delay_ms: 800,
        stagger_ms: 200,
        easing: Easing::Power1Out,
    },
];

const DRAWER_MOUNT: &[Transition] = &[Transition {
    selector: Selector::Drawer,
    property: Property::TranslateX,
    from: Some(1.0),
    to: 0.0,
    duration_ms: 500,
    delay_ms: 0,
    stagger_ms: 0,
    easing: Easing::Power3Out,
}];

/// Scale of a hovered card
pub const HOVER_SCALE: f32 = 1.04;

const HOVER_ENTER: &[Transition] = &[Transition {
    selector: Selector::TriggerCard,
    property: Property::Scale,
    from: None,
    to: HOVER_SCALE,
    duration_ms: 200,
    delay_ms: 0,
    stagger_ms: 0,
    easing: Easing::Power1Out,
}];

const HOVER_LEAVE: &[Transition] = &[Transition {
    selector: Selector::TriggerCard,
    property: Property::Scale,
    from: None,
    to: 1.0,
    duration_ms: 200,
    delay_ms: 0,
    stagger_ms: 0,
    easing: Easing::Power1Out,
}];

pub fn transitions_for(trigger: &Trigger) -> &'static [Transition] {
    match trigger {
        Trigger::PageEnter => PAGE_ENTER,
        Trigger::HeroEnter { .. } => HERO_ENTER,
        Trigger::DrawerMount => DRAWER_MOUNT,
        Trigger::HoverEnter(_) => HOVER_ENTER,
        Trigger::HoverLeave(_) => HOVER_LEAVE,
    }
}

/// Resolve a selector to the elements it animates for this trigger
pub fn resolve(selector: Selector, trigger: &Trigger) -> Vec<Target> {
    match selector {
        Selector::Page => vec![Target::Page],
        Selector::HeroTitle => vec![Target::HeroTitle],
        Selector::HeroSubtitle => vec![Target::HeroSubtitle],
        Selector::Features => match trigger {
            Trigger::HeroEnter { features } => (0..*features).map(Target::Feature).collect(),
            _ => Vec::new(),
        },
        Selector::Drawer => vec![Target::Drawer],
        Selector::TriggerCard => match trigger {
            Trigger::HoverEnter(card) | Trigger::HoverLeave(card) => vec![Target::Card(*card)],
            _ => Vec::new(),
        },
    }
}
