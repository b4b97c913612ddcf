//! Page copy and the fixed lists the sections render
//!
//! Everything here is immutable and rendered in declaration order.

use crate::components::icon::Icon;

/// Studio name as shown in the header, footer, and copyright line
pub const BRAND: &str = "Bit Burrow Co";

/// Short line under the brand mark
pub const TAGLINE: &str = "Handcrafted software";

/// A product shown in the apps section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppCard {
    pub title: &'static str,
    pub description: &'static str,
}

/// A practice highlighted in the features section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// A milestone on the about section timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

/// A focus area listed in the hero panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusArea {
    pub icon: Icon,
    pub label: &'static str,
}

pub const APPS: &[AppCard] = &[
    AppCard {
        title: "Burrow Ledger",
        description: "A mindful ledger for indie studios. Surface profit health, cash runway, and team loads in one place.",
    },
    AppCard {
        title: "Moss Signals",
        description: "Operational analytics that stay out of your way. Drop in tracking, get the story, and stay focused.",
    },
    AppCard {
        title: "Cabin Dispatch",
        description: "Field service routing for teams that care about customer experience as much as the job.",
    },
];

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        icon: Icon::Hammer,
        title: "Made for change",
        description: "Composable systems that welcome iteration and scale.",
    },
    FeatureCard {
        icon: Icon::Code,
        title: "Types first",
        description: "Readable TypeScript, tidy dependencies, and tight feedback loops.",
    },
    FeatureCard {
        icon: Icon::CircuitBoard,
        title: "Edge aware",
        description: "Serverless and edge-native deployments that stay maintainable.",
    },
    FeatureCard {
        icon: Icon::Leaf,
        title: "Sustainability",
        description: "Lean, maintainable software with small footprints.",
    },
];

pub const PRINCIPLES: &[&str] = &[
    "Design for clarity. Communicate intent in code and UI.",
    "Prefer small pieces, well-fitted. Compose instead of accrete.",
    "Measure, observe, and iterate. Leave a map for others.",
    "Accessibility by default. Performance with humility.",
];

pub const TAGS: &[&str] = &[
    "TypeScript",
    "React",
    "Node",
    "Python",
    "Edge + Serverless",
    "Design Systems",
    "Accessibility",
];

pub const TIMELINE: &[TimelineEntry] = &[
    TimelineEntry {
        year: "2019",
        title: "First tunnel",
        detail: "Two engineers and a workbench start taking on small product builds.",
    },
    TimelineEntry {
        year: "2021",
        title: "Burrow Ledger ships",
        detail: "Our first in-house product goes live for indie studios.",
    },
    TimelineEntry {
        year: "2023",
        title: "Edge-native practice",
        detail: "Serverless and edge deployments become the default for client work.",
    },
    TimelineEntry {
        year: "2025",
        title: "Deeper roots",
        detail: "A steady, senior team focused on software that lasts.",
    },
];

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        icon: Icon::Code,
        label: "Product engineering",
    },
    FocusArea {
        icon: Icon::Hammer,
        label: "Design systems",
    },
    FocusArea {
        icon: Icon::CircuitBoard,
        label: "Edge-native infrastructure",
    },
];

/// Tools named in the hero collaboration row
pub const COLLABORATION_TOOLS: &str = "Slack, Linear, Figma, GitHub";
