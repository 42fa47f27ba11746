//! Fixed style presets for every variant-bearing node kind.
//!
//! Variant names arrive as free strings in node data. Each enum resolves a
//! name to a preset and falls back to the kind's default for anything it does
//! not recognise, so rendering never depends on the name being valid.

/// Join class fragments, skipping empty ones.
pub fn cx(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardVariant {
    Default,
    Elevated,
    Outlined,
    Gradient,
}

impl CardVariant {
    pub const ALL: [CardVariant; 4] = [
        CardVariant::Default,
        CardVariant::Elevated,
        CardVariant::Outlined,
        CardVariant::Gradient,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "default" => Some(CardVariant::Default),
            "elevated" => Some(CardVariant::Elevated),
            "outlined" => Some(CardVariant::Outlined),
            "gradient" => Some(CardVariant::Gradient),
            _ => None,
        }
    }

    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or(CardVariant::Default)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CardVariant::Default => "default",
            CardVariant::Elevated => "elevated",
            CardVariant::Outlined => "outlined",
            CardVariant::Gradient => "gradient",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            CardVariant::Default => "bg-white shadow-sm border border-gray-200",
            CardVariant::Elevated => "bg-white shadow-md border border-gray-100",
            CardVariant::Outlined => "bg-white border border-gray-200",
            CardVariant::Gradient => "text-white bg-gradient-to-br from-blue-600 to-cyan-500",
        }
    }

    /// Built-in title used when a card-group expands this variant.
    pub fn title(self) -> &'static str {
        match self {
            CardVariant::Default => "Default",
            CardVariant::Elevated => "Elevated",
            CardVariant::Outlined => "Outlined",
            CardVariant::Gradient => "Gradient",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CardVariant::Default => "Basic card with shadow",
            CardVariant::Elevated => "Card with large shadow",
            CardVariant::Outlined => "Card with border",
            CardVariant::Gradient => "Card with gradient bg",
        }
    }

    pub fn is_gradient(self) -> bool {
        self == CardVariant::Gradient
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    Default,
    Primary,
    Secondary,
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Default,
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Ghost,
    ];

    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "default" => Some(ButtonVariant::Default),
            "primary" => Some(ButtonVariant::Primary),
            "secondary" => Some(ButtonVariant::Secondary),
            "ghost" => Some(ButtonVariant::Ghost),
            _ => None,
        }
    }

    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or(ButtonVariant::Default)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Ghost => "ghost",
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            // primary and default share one preset
            ButtonVariant::Default | ButtonVariant::Primary => {
                "bg-blue-600 text-white hover:bg-blue-700"
            }
            ButtonVariant::Secondary => "bg-gray-100 text-gray-900 hover:bg-gray-200",
            ButtonVariant::Ghost => "bg-transparent text-gray-700 hover:bg-gray-100",
        }
    }
}

pub const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md px-3 py-2 text-sm font-medium transition-colors";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BubbleRole {
    User,
    Assistant,
    System,
}

impl BubbleRole {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "user" => Some(BubbleRole::User),
            "assistant" => Some(BubbleRole::Assistant),
            "system" => Some(BubbleRole::System),
            _ => None,
        }
    }

    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or(BubbleRole::Assistant)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BubbleRole::User => "user",
            BubbleRole::Assistant => "assistant",
            BubbleRole::System => "system",
        }
    }

    pub fn alignment(self) -> &'static str {
        match self {
            BubbleRole::User => "justify-end",
            BubbleRole::Assistant | BubbleRole::System => "justify-start",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BubbleVariant {
    Default,
    Gradient,
}

impl BubbleVariant {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "default" => Some(BubbleVariant::Default),
            "gradient" => Some(BubbleVariant::Gradient),
            _ => None,
        }
    }

    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::parse).unwrap_or(BubbleVariant::Default)
    }
}

pub const BUBBLE_BASE: &str = "max-w-[85%] rounded-2xl px-4 py-2 text-sm";

pub fn bubble_classes(role: BubbleRole, variant: BubbleVariant) -> &'static str {
    match (role, variant) {
        (BubbleRole::User, BubbleVariant::Gradient) => {
            "text-white bg-gradient-to-r from-blue-600 to-cyan-500 rounded-br-sm"
        }
        (BubbleRole::User, BubbleVariant::Default) => "text-white bg-blue-600 rounded-br-sm",
        (BubbleRole::System, _) => "text-gray-700 bg-gray-100 border border-gray-200",
        (BubbleRole::Assistant, BubbleVariant::Gradient) => {
            "text-white bg-gradient-to-r from-slate-700 to-slate-900 rounded-bl-sm"
        }
        (BubbleRole::Assistant, BubbleVariant::Default) => {
            "text-gray-800 bg-white rounded-bl-sm border border-gray-200 shadow-sm"
        }
    }
}

pub const FIELD_CLASSES: &str = "w-full rounded-md border border-gray-300 bg-white px-3 py-2 text-sm text-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500";
pub const FIELD_LABEL: &str = "block text-xs font-medium text-gray-700 mb-1";
pub const FORM_CLASSES: &str = "w-full rounded-xl border border-gray-200 bg-white p-4 shadow-sm";
pub const LIKE_BUTTON: &str = "inline-flex items-center gap-2 rounded-md border border-gray-200 bg-white px-3 py-2 text-sm text-gray-900 hover:bg-gray-50";

/// Capitalize the first character ("secondary" -> "Secondary").
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
