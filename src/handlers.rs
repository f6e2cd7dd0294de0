use crate::errors::AppError;
use crate::filter::CategoryFilter;
use crate::habits::habit_level;
use crate::models::{
    CategoryRequest, CategoryResponse, Habit, HabitListResponse, HabitView, Progress, StatsResponse,
    ToggleResponse,
};
use crate::state::AppState;
use crate::stats::build_stats;
use crate::theme::category_theme;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use chrono::Local;
use tracing::{debug, info};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_string();
    let filter = state.tabs.lock().await.active();
    let habits = state.habits.lock().await;
    let visible = filter.apply(habits.habits());

    Html(render_index(
        &date,
        filter,
        &visible,
        habits.aggregate_progress(),
        habits.revision(),
    ))
}

pub async fn list_habits(State(state): State<AppState>) -> Json<HabitListResponse> {
    let filter = state.tabs.lock().await.active();
    let habits = state.habits.lock().await;

    Json(HabitListResponse {
        date: today_string(),
        category: filter.key().to_string(),
        revision: habits.revision(),
        habits: filter.apply(habits.habits()).iter().map(to_view).collect(),
    })
}

pub async fn get_progress(State(state): State<AppState>) -> Json<Progress> {
    let habits = state.habits.lock().await;
    Json(habits.aggregate_progress())
}

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let habits = state.habits.lock().await;
    Json(build_stats(&habits))
}

pub async fn api_toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ToggleResponse> {
    Json(apply_toggle(&state, &id).await)
}

pub async fn toggle_habit(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    apply_toggle(&state, &id).await;
    Redirect::to("/")
}

pub async fn get_category(State(state): State<AppState>) -> Json<CategoryResponse> {
    let filter = state.tabs.lock().await.active();
    Json(CategoryResponse {
        category: filter.key().to_string(),
    })
}

pub async fn set_category(
    State(state): State<AppState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategoryResponse>, AppError> {
    let filter = apply_category(&state, &payload.category).await?;
    Ok(Json(CategoryResponse {
        category: filter.key().to_string(),
    }))
}

pub async fn select_category(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect, AppError> {
    apply_category(&state, &key).await?;
    Ok(Redirect::to("/"))
}

async fn apply_toggle(state: &AppState, id: &str) -> ToggleResponse {
    let mut habits = state.habits.lock().await;
    let habit = habits.toggle(id).map(|habit| {
        info!(
            "toggled habit {id}: {}/{} completed={}",
            habit.current, habit.total, habit.completed
        );
        to_view(habit)
    });
    if habit.is_none() {
        debug!("toggle ignored, no habit with id {id}");
    }

    ToggleResponse {
        habit,
        progress: habits.aggregate_progress(),
        revision: habits.revision(),
    }
}

async fn apply_category(state: &AppState, key: &str) -> Result<CategoryFilter, AppError> {
    let filter: CategoryFilter = key.parse()?;
    if state.tabs.lock().await.select(filter) {
        info!("category filter set to {filter}");
    }
    Ok(filter)
}

fn to_view(habit: &Habit) -> HabitView {
    let theme = category_theme(habit.category);
    HabitView {
        level: habit_level(habit).as_u8(),
        color: theme.color.to_string(),
        icon: theme.icon.to_string(),
        habit: habit.clone(),
    }
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
