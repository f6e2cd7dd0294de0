use crate::habits::HabitLevel;
use crate::models::Category;

pub const PRIMARY: &str = "#4267B2";
pub const SUCCESS: &str = "#4CAF50";
pub const TEXT: &str = "#232F34";
pub const SUB_TEXT: &str = "#4A6572";
pub const BACKGROUND: &str = "#F8F9FB";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub color: &'static str,
    pub icon: &'static str,
}

const FALLBACK: Theme = Theme {
    color: PRIMARY,
    icon: "🧠",
};

pub fn category_theme(category: Category) -> Theme {
    match category {
        Category::Health => Theme {
            color: "#FF7A5A",
            icon: "🚶",
        },
        Category::Study => Theme {
            color: "#3EC8AC",
            icon: "📚",
        },
        Category::Work => Theme {
            color: "#7D70BA",
            icon: "💻",
        },
        Category::Growth => Theme {
            color: "#F7C137",
            icon: "🧠",
        },
    }
}

/// Lookup by raw key; anything unrecognised, including the "all" tab, gets
/// the primary color.
pub fn theme_for_key(key: &str) -> Theme {
    Category::from_key(key)
        .map(category_theme)
        .unwrap_or(FALLBACK)
}

/// Icon tile background: the category color at low alpha.
pub fn tint(color: &str) -> String {
    format!("{color}20")
}

/// Left border color of a habit card. The width stays the same at every level.
pub fn card_border(category: Category, level: HabitLevel) -> &'static str {
    match level {
        HabitLevel::NotStarted => "transparent",
        _ => category_theme(category).color,
    }
}
