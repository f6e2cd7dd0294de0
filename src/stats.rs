use crate::habits::{aggregate, habit_level, HabitLevel, HabitStore};
use crate::models::{Category, CategoryStats, LevelCounts, StatsResponse};

pub fn build_stats(store: &HabitStore) -> StatsResponse {
    let categories = Category::ALL
        .into_iter()
        .map(|category| {
            let members: Vec<_> = store
                .habits()
                .iter()
                .filter(|habit| habit.category == category)
                .collect();
            let progress = aggregate(members.iter().copied());

            CategoryStats {
                category,
                habits: members.len() as u32,
                completed_habits: members.iter().filter(|habit| habit.completed).count() as u32,
                completed_units: progress.completed_units,
                total_units: progress.total_units,
                percentage: progress.percentage,
            }
        })
        .collect();

    let mut levels = LevelCounts::default();
    for habit in store.habits() {
        let slot = match habit_level(habit) {
            HabitLevel::NotStarted => &mut levels.not_started,
            HabitLevel::Started => &mut levels.started,
            HabitLevel::InProgress => &mut levels.in_progress,
            HabitLevel::Done => &mut levels.done,
        };
        *slot += 1;
    }

    StatsResponse {
        overall: store.aggregate_progress(),
        categories,
        levels,
    }
}
