use crate::errors::HabitError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Health,
    Study,
    Work,
    Growth,
}

impl Category {
    /// Every category in tab order.
    pub const ALL: [Category; 4] = [
        Category::Health,
        Category::Study,
        Category::Work,
        Category::Growth,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Category::Health => "health",
            Category::Study => "study",
            Category::Work => "work",
            Category::Growth => "growth",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Health => "Health",
            Category::Study => "Study",
            Category::Work => "Work",
            Category::Growth => "Growth",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Category::ALL
            .into_iter()
            .find(|category| category.key() == key)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = HabitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let key = value.trim().to_ascii_lowercase();
        Category::from_key(&key).ok_or_else(|| HabitError::UnknownCategory(value.to_string()))
    }
}

/// One tracked daily behavior.
///
/// `current` is kept within `0..=total` by [`crate::habits::HabitStore`];
/// `completed` is flipped independently by the toggle operation and is not
/// derived from `current`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub completed: bool,
    /// Seed data only, never recomputed.
    pub streak: u32,
    pub total: u32,
    pub current: u32,
}

/// Sum of completed vs. required units across a set of habits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Progress {
    pub completed_units: u64,
    pub total_units: u64,
    pub percentage: f64,
}

impl Progress {
    pub fn from_units(completed_units: u64, total_units: u64) -> Self {
        let percentage = if total_units > 0 {
            completed_units as f64 / total_units as f64 * 100.0
        } else {
            0.0
        };

        Self {
            completed_units,
            total_units,
            percentage,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitView {
    #[serde(flatten)]
    pub habit: Habit,
    pub level: u8,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Serialize)]
pub struct HabitListResponse {
    pub date: String,
    pub category: String,
    pub revision: u64,
    pub habits: Vec<HabitView>,
}

#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub habit: Option<HabitView>,
    pub progress: Progress,
    pub revision: u64,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct CategoryStats {
    pub category: Category,
    pub habits: u32,
    pub completed_habits: u32,
    pub completed_units: u64,
    pub total_units: u64,
    pub percentage: f64,
}

#[derive(Debug, Serialize, Default, PartialEq, Eq)]
pub struct LevelCounts {
    pub not_started: u32,
    pub started: u32,
    pub in_progress: u32,
    pub done: u32,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub overall: Progress,
    pub categories: Vec<CategoryStats>,
    pub levels: LevelCounts,
}
