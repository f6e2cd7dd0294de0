use crate::errors::HabitError;
use crate::habits::HabitStore;
use crate::models::{Category, Habit};
use std::path::Path;
use tokio::fs;
use tracing::{error, info};

/// The built-in sample day.
pub fn sample_habits() -> Vec<Habit> {
    vec![
        sample("1", "Morning exercise", "Up at 6:30 for a 30 minute workout", Category::Health, true, 42, 3, 3),
        sample("2", "Reading", "30 minutes with a professional book", Category::Study, true, 36, 3, 2),
        sample("3", "Coding practice", "Finish one programming challenge", Category::Work, false, 28, 2, 1),
        sample("4", "Meditation", "15 minutes of meditation to stay focused", Category::Growth, true, 55, 2, 2),
        sample("5", "Drink water", "Drink 8 cups of water", Category::Health, false, 118, 4, 0),
        sample("6", "English vocabulary", "Memorise 10 English words", Category::Work, false, 23, 3, 1),
        sample("7", "Journal", "Write a journal entry before bed", Category::Growth, false, 47, 1, 0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    name: &str,
    description: &str,
    category: Category,
    completed: bool,
    streak: u32,
    total: u32,
    current: u32,
) -> Habit {
    Habit {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        completed,
        streak,
        total,
        current,
    }
}

/// Builds the store for this process, preferring a JSON seed file when one is
/// configured and usable.
pub async fn load_store(path: Option<&Path>) -> HabitStore {
    if let Some(path) = path {
        let seeded = read_seed_file(path)
            .await
            .and_then(|habits| habits.map(HabitStore::new).transpose());
        match seeded {
            Ok(Some(store)) => {
                info!("seeded {} habits from {}", store.len(), path.display());
                return store;
            }
            Ok(None) => {}
            Err(err) => error!("ignoring seed file {}: {err}", path.display()),
        }
    }

    HabitStore::new(sample_habits()).unwrap_or_default()
}

/// `Ok(None)` when the file does not exist.
pub async fn read_seed_file(path: &Path) -> Result<Option<Vec<Habit>>, HabitError> {
    match fs::read(path).await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|err| HabitError::SeedParse(err.to_string())),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(HabitError::SeedRead(err.to_string())),
    }
}
