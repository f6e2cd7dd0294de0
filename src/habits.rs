//! The habit collection and everything derived from it.

use crate::errors::HabitError;
use crate::models::{Habit, Progress};
use serde::Serialize;
use std::collections::HashSet;

/// Ordered, id-unique collection of habits for today.
///
/// Records are only ever mutated through [`HabitStore::toggle`]. Every
/// effective toggle bumps [`HabitStore::revision`], which the presentation
/// layer watches to know when to re-render.
#[derive(Debug, Clone, Default)]
pub struct HabitStore {
    habits: Vec<Habit>,
    revision: u64,
}

impl HabitStore {
    /// Builds a store from seed records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`HabitError::DuplicateId`] if two records share an id and
    /// [`HabitError::ProgressOutOfRange`] if a record has `current > total`.
    pub fn new(habits: Vec<Habit>) -> Result<Self, HabitError> {
        let mut seen = HashSet::with_capacity(habits.len());
        for habit in &habits {
            if !seen.insert(habit.id.as_str()) {
                return Err(HabitError::DuplicateId(habit.id.clone()));
            }
            if habit.current > habit.total {
                return Err(HabitError::ProgressOutOfRange {
                    id: habit.id.clone(),
                    current: habit.current,
                    total: habit.total,
                });
            }
        }

        Ok(Self { habits, revision: 0 })
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Progress over the whole collection, whatever tab is selected.
    pub fn aggregate_progress(&self) -> Progress {
        aggregate(self.habits.iter())
    }

    /// Flips `completed` on the habit with `id` and moves `current` one step
    /// in the same direction, clamped to `0..=total`.
    ///
    /// Unknown ids leave the store untouched and return `None`.
    pub fn toggle(&mut self, id: &str) -> Option<&Habit> {
        let index = self.habits.iter().position(|habit| habit.id == id)?;
        let habit = &mut self.habits[index];

        habit.completed = !habit.completed;
        habit.current = if habit.completed {
            habit.current.saturating_add(1).min(habit.total)
        } else {
            habit.current.saturating_sub(1)
        };
        self.revision += 1;

        Some(&self.habits[index])
    }
}

pub fn aggregate<'a>(habits: impl IntoIterator<Item = &'a Habit>) -> Progress {
    let (completed, total) = habits.into_iter().fold((0u64, 0u64), |(done, all), habit| {
        (done + u64::from(habit.current), all + u64::from(habit.total))
    });
    Progress::from_units(completed, total)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitLevel {
    NotStarted,
    Started,
    InProgress,
    Done,
}

impl HabitLevel {
    pub fn as_u8(self) -> u8 {
        match self {
            HabitLevel::NotStarted => 0,
            HabitLevel::Started => 1,
            HabitLevel::InProgress => 2,
            HabitLevel::Done => 3,
        }
    }
}

/// Buckets today's `current / total` ratio for display emphasis.
pub fn habit_level(habit: &Habit) -> HabitLevel {
    if habit.total == 0 {
        return HabitLevel::NotStarted;
    }

    let ratio = f64::from(habit.current) / f64::from(habit.total);
    if ratio >= 1.0 {
        HabitLevel::Done
    } else if ratio >= 0.5 {
        HabitLevel::InProgress
    } else if ratio > 0.0 {
        HabitLevel::Started
    } else {
        HabitLevel::NotStarted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::seed::sample_habits;

    fn habit(id: &str, category: Category, completed: bool, current: u32, total: u32) -> Habit {
        Habit {
            id: id.to_string(),
            name: format!("habit {id}"),
            description: String::new(),
            category,
            completed,
            streak: 0,
            total,
            current,
        }
    }

    fn state(store: &HabitStore, id: &str) -> (bool, u32, u32) {
        let habit = store.get(id).expect("missing habit");
        (habit.completed, habit.current, habit.total)
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = HabitStore::new(vec![
            habit("a", Category::Health, false, 0, 1),
            habit("a", Category::Work, false, 0, 1),
        ]);
        assert_eq!(result.unwrap_err(), HabitError::DuplicateId("a".to_string()));
    }

    #[test]
    fn new_rejects_current_above_total() {
        let result = HabitStore::new(vec![habit("a", Category::Health, false, 5, 4)]);
        assert_eq!(
            result.unwrap_err(),
            HabitError::ProgressOutOfRange {
                id: "a".to_string(),
                current: 5,
                total: 4
            }
        );
    }

    #[test]
    fn repeated_toggles_alternate_between_one_and_zero() {
        let mut store = HabitStore::new(vec![habit("w", Category::Health, false, 0, 4)]).unwrap();

        let mut seen = Vec::new();
        for _ in 0..4 {
            store.toggle("w");
            seen.push(state(&store, "w"));
        }

        assert_eq!(
            seen,
            vec![(true, 1, 4), (false, 0, 4), (true, 1, 4), (false, 0, 4)]
        );
    }

    #[test]
    fn toggle_reaches_total_from_one_below() {
        let mut store = HabitStore::new(vec![habit("w", Category::Health, false, 3, 4)]).unwrap();

        store.toggle("w");
        assert_eq!(state(&store, "w"), (true, 4, 4));

        store.toggle("w");
        assert_eq!(state(&store, "w"), (false, 3, 4));
    }

    #[test]
    fn toggle_twice_from_full_returns_to_full() {
        let mut store = HabitStore::new(vec![habit("m", Category::Growth, true, 2, 2)]).unwrap();

        store.toggle("m");
        assert_eq!(state(&store, "m"), (false, 1, 2));
        store.toggle("m");
        assert_eq!(state(&store, "m"), (true, 2, 2));
    }

    #[test]
    fn toggle_clamps_at_both_boundaries() {
        let mut store = HabitStore::new(vec![
            habit("full", Category::Work, false, 3, 3),
            habit("empty", Category::Study, true, 0, 3),
        ])
        .unwrap();

        // Completing an already full habit cannot exceed its target.
        store.toggle("full");
        assert_eq!(state(&store, "full"), (true, 3, 3));
        store.toggle("full");
        assert_eq!(state(&store, "full"), (false, 2, 3));

        store.toggle("empty");
        assert_eq!(state(&store, "empty"), (false, 0, 3));
        store.toggle("empty");
        assert_eq!(state(&store, "empty"), (true, 1, 3));
    }

    #[test]
    fn toggle_with_zero_total_keeps_current_at_zero() {
        let mut store = HabitStore::new(vec![habit("z", Category::Health, false, 0, 0)]).unwrap();
        store.toggle("z");
        assert_eq!(state(&store, "z"), (true, 0, 0));
        store.toggle("z");
        assert_eq!(state(&store, "z"), (false, 0, 0));
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let mut store = HabitStore::new(sample_habits()).unwrap();
        let before = store.habits().to_vec();

        assert!(store.toggle("missing").is_none());
        assert_eq!(store.habits(), before.as_slice());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn toggle_touches_only_the_target_and_bumps_revision() {
        let mut store = HabitStore::new(sample_habits()).unwrap();
        let before = store.habits().to_vec();

        let updated = store.toggle("5").cloned().expect("habit 5 exists");
        assert_eq!((updated.completed, updated.current), (true, 1));
        assert_eq!(store.revision(), 1);

        for (old, new) in before.iter().zip(store.habits()) {
            if old.id != "5" {
                assert_eq!(old, new);
            }
        }
    }

    #[test]
    fn invariant_holds_after_many_toggles() {
        let mut store = HabitStore::new(sample_habits()).unwrap();
        let ids: Vec<String> = store.habits().iter().map(|h| h.id.clone()).collect();

        for step in 0..200usize {
            let id = &ids[(step * 5 + step / 3) % ids.len()];
            store.toggle(id);
            for habit in store.habits() {
                assert!(habit.current <= habit.total, "{habit:?}");
            }
        }
    }

    #[test]
    fn aggregate_progress_of_empty_store_is_zero() {
        let store = HabitStore::default();
        assert_eq!(store.aggregate_progress(), Progress::from_units(0, 0));
        assert_eq!(store.aggregate_progress().percentage, 0.0);
    }

    #[test]
    fn aggregate_progress_sums_the_seed() {
        let store = HabitStore::new(sample_habits()).unwrap();
        let progress = store.aggregate_progress();
        assert_eq!(progress.completed_units, 9);
        assert_eq!(progress.total_units, 18);
        assert!((progress.percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn level_boundaries() {
        let level = |current, total| habit_level(&habit("x", Category::Work, false, current, total));
        assert_eq!(level(0, 4), HabitLevel::NotStarted);
        assert_eq!(level(1, 4), HabitLevel::Started);
        assert_eq!(level(2, 4), HabitLevel::InProgress);
        assert_eq!(level(3, 4), HabitLevel::InProgress);
        assert_eq!(level(4, 4), HabitLevel::Done);
        assert_eq!(level(0, 0), HabitLevel::NotStarted);
        assert_eq!(level(4, 4).as_u8(), 3);
        assert_eq!(level(0, 4).as_u8(), 0);
    }
}
