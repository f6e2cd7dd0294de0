//! Tab selection. Kept apart from [`HabitStore`] so the view decides what it
//! shows without touching the records themselves.

use crate::errors::HabitError;
use crate::habits::HabitStore;
use crate::models::{Category, Habit};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Tabs in display order.
    pub const TABS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Health),
        CategoryFilter::Only(Category::Study),
        CategoryFilter::Only(Category::Work),
        CategoryFilter::Only(Category::Growth),
    ];

    pub fn key(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.key(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, habit: &Habit) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => habit.category == category,
        }
    }

    /// Snapshot of the matching records, in stored order.
    pub fn apply(self, habits: &[Habit]) -> Vec<Habit> {
        habits
            .iter()
            .filter(|habit| self.matches(habit))
            .cloned()
            .collect()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CategoryFilter {
    type Err = HabitError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        value.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = HabitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.key().to_string()
    }
}

/// The tab currently selected on screen.
#[derive(Debug, Clone, Default)]
pub struct TabSelection {
    active: CategoryFilter,
}

impl TabSelection {
    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    /// Returns `true` when the selection actually changed.
    pub fn select(&mut self, filter: CategoryFilter) -> bool {
        let changed = self.active != filter;
        self.active = filter;
        changed
    }

    pub fn visible(&self, store: &HabitStore) -> Vec<Habit> {
        filtered_habits(store, self.active)
    }
}

pub fn filtered_habits(store: &HabitStore, filter: CategoryFilter) -> Vec<Habit> {
    filter.apply(store.habits())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_habits;

    fn ids(habits: &[Habit]) -> Vec<&str> {
        habits.iter().map(|habit| habit.id.as_str()).collect()
    }

    #[test]
    fn all_returns_every_record_in_order() {
        let store = HabitStore::new(sample_habits()).unwrap();
        let habits = filtered_habits(&store, CategoryFilter::All);
        assert_eq!(ids(&habits), vec!["1", "2", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn work_returns_two_records_in_order() {
        let store = HabitStore::new(sample_habits()).unwrap();
        let habits = filtered_habits(&store, CategoryFilter::Only(Category::Work));
        assert_eq!(ids(&habits), vec!["3", "6"]);
    }

    #[test]
    fn filtered_length_matches_category_count() {
        let store = HabitStore::new(sample_habits()).unwrap();
        for category in Category::ALL {
            let expected = store
                .habits()
                .iter()
                .filter(|habit| habit.category == category)
                .count();
            let habits = filtered_habits(&store, CategoryFilter::Only(category));
            assert_eq!(habits.len(), expected, "{category}");
            assert!(habits.iter().all(|habit| habit.category == category));
        }
    }

    #[test]
    fn selection_does_not_change_aggregate_progress() {
        let store = HabitStore::new(sample_habits()).unwrap();
        let mut tabs = TabSelection::default();
        let before = store.aggregate_progress();

        for filter in CategoryFilter::TABS {
            tabs.select(filter);
            assert_eq!(store.aggregate_progress(), before);
        }
    }

    #[test]
    fn select_reports_changes() {
        let mut tabs = TabSelection::default();
        assert_eq!(tabs.active(), CategoryFilter::All);
        assert!(tabs.select(CategoryFilter::Only(Category::Study)));
        assert!(!tabs.select(CategoryFilter::Only(Category::Study)));
        assert_eq!(tabs.active().key(), "study");
    }

    #[test]
    fn snapshot_is_detached_from_later_toggles() {
        let mut store = HabitStore::new(sample_habits()).unwrap();
        let tabs = TabSelection::default();
        let snapshot = tabs.visible(&store);

        store.toggle("7");
        assert!(!snapshot[6].completed);
        assert!(store.get("7").unwrap().completed);
    }

    #[test]
    fn filter_parses_and_serializes_as_key() {
        assert_eq!("ALL".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "growth".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(Category::Growth))
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
        assert_eq!(
            serde_json::to_string(&CategoryFilter::Only(Category::Work)).unwrap(),
            "\"work\""
        );
    }
}
