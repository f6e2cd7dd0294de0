use crate::filter::CategoryFilter;
use crate::habits::{habit_level, HabitLevel};
use crate::models::{Habit, Progress};
use crate::theme::{self, card_border, category_theme, theme_for_key, tint};
use maud::{html, Markup};

pub fn render_index(
    date: &str,
    active: CategoryFilter,
    habits: &[Habit],
    progress: Progress,
    revision: u64,
) -> String {
    INDEX_HTML
        .replace("{{PRIMARY}}", theme::PRIMARY)
        .replace("{{SUCCESS}}", theme::SUCCESS)
        .replace("{{TEXT}}", theme::TEXT)
        .replace("{{SUB_TEXT}}", theme::SUB_TEXT)
        .replace("{{BACKGROUND}}", theme::BACKGROUND)
        .replace("{{DATE}}", date)
        .replace("{{REVISION}}", &revision.to_string())
        .replace("{{TABS}}", &render_tabs(active).into_string())
        .replace("{{COMPLETED}}", &progress.completed_units.to_string())
        .replace("{{TOTAL}}", &progress.total_units.to_string())
        .replace("{{PERCENT}}", &format!("{:.1}", progress.percentage))
        .replace("{{PERCENT_LABEL}}", &format!("{:.0}", progress.percentage))
        .replace("{{HABITS}}", &render_habits(habits).into_string())
}

fn render_tabs(active: CategoryFilter) -> Markup {
    html!(
        @for tab in CategoryFilter::TABS {
            (render_tab(tab, tab == active))
        }
    )
}

/// The "all" tab has no category, so its key resolves to the fallback color.
fn render_tab(tab: CategoryFilter, is_active: bool) -> Markup {
    let class = if is_active { "tab active" } else { "tab" };
    let style = if is_active {
        format!("background: {};", theme_for_key(tab.key()).color)
    } else {
        String::new()
    };

    html!(
        form method="post" action=(format!("/category/{}", tab.key())) {
            button class=(class) type="submit" style=(style) { (tab.label()) }
        }
    )
}

fn render_habits(habits: &[Habit]) -> Markup {
    html!(
        @if habits.is_empty() {
            div class="empty" {
                span class="empty-icon" { "📅" }
                h2 { "No habits yet" }
                p { "Nothing to track in this category today." }
            }
        } @else {
            @for habit in habits {
                (render_card(habit))
            }
        }
    )
}

fn render_card(habit: &Habit) -> Markup {
    let level = habit_level(habit);
    let theme = category_theme(habit.category);
    let classes = if level == HabitLevel::Done {
        "habit level-3"
    } else {
        "habit"
    };
    let action = if habit.completed {
        "action completed"
    } else {
        "action"
    };

    html!(
        form method="post" action=(format!("/habits/{}/toggle", habit.id)) {
            button
                class=(classes)
                type="submit"
                data-level=(level.as_u8())
                style=(format!("border-left-color: {};", card_border(habit.category, level)))
            {
                span class="status" { "Today: " (habit.current) "/" (habit.total) }
                span class="icon" style=(format!("background: {};", tint(theme.color))) {
                    (theme.icon)
                }
                span class="info" {
                    span class="name" { (habit.name) }
                    span class="desc" { (habit.description) }
                    span class="streak" { "Check-ins: " (habit.streak) }
                }
                span class=(action) { "✓" }
            }
        }
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <meta name="habit-revision" content="{{REVISION}}" />
  <title>Habit Diary</title>
  <style>
    :root {
      --primary: {{PRIMARY}};
      --success: {{SUCCESS}};
      --ink: {{TEXT}};
      --sub-ink: {{SUB_TEXT}};
      --bg: {{BACKGROUND}};
      --card: #ffffff;
      --shadow: 0 6px 18px rgba(45, 49, 66, 0.08);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", "Helvetica Neue", sans-serif;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(480px, 100%);
      padding: 24px 16px 96px;
      display: grid;
      gap: 20px;
      animation: rise 400ms ease;
    }

    header h1 {
      margin: 0;
      font-size: 1.6rem;
    }

    header p {
      margin: 4px 0 0;
      color: var(--sub-ink);
    }

    form {
      margin: 0;
    }

    button {
      appearance: none;
      border: none;
      font: inherit;
      color: inherit;
      cursor: pointer;
    }

    .tabs {
      display: flex;
      gap: 8px;
      overflow-x: auto;
    }

    .tab {
      padding: 8px 18px;
      border-radius: 999px;
      background: #E9ECEF;
      color: #6C757D;
      font-weight: 600;
    }

    .tab.active {
      background: var(--primary);
      color: white;
    }

    .progress {
      background: var(--card);
      border-radius: 16px;
      padding: 16px;
      box-shadow: var(--shadow);
      display: grid;
      gap: 10px;
    }

    .progress-title {
      display: flex;
      justify-content: space-between;
      font-weight: 600;
    }

    .bar {
      height: 10px;
      border-radius: 999px;
      background: #E9ECEF;
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      background: var(--primary);
      border-radius: 999px;
      transition: width 250ms ease;
    }

    .habits {
      display: grid;
      gap: 12px;
    }

    .habit {
      position: relative;
      width: 100%;
      text-align: left;
      background: var(--card);
      border-radius: 16px;
      padding: 16px;
      box-shadow: var(--shadow);
      border-left: 4px solid transparent;
      display: flex;
      align-items: center;
      gap: 14px;
    }

    .habit.level-3 {
      background: #FBFFFB;
    }

    .status {
      position: absolute;
      top: 10px;
      right: 16px;
      font-size: 0.75rem;
      color: var(--sub-ink);
    }

    .icon {
      width: 44px;
      height: 44px;
      border-radius: 12px;
      display: grid;
      place-items: center;
      font-size: 20px;
      flex-shrink: 0;
    }

    .info {
      display: grid;
      gap: 2px;
      flex: 1;
    }

    .name {
      font-weight: 600;
    }

    .desc,
    .streak {
      font-size: 0.85rem;
      color: var(--sub-ink);
    }

    .action {
      width: 32px;
      height: 32px;
      border-radius: 50%;
      border: 2px solid #DEE2E6;
      display: grid;
      place-items: center;
      flex-shrink: 0;
    }

    .action.completed {
      background: var(--success);
      border-color: var(--success);
      color: white;
    }

    .empty {
      text-align: center;
      padding: 48px 16px;
      color: var(--sub-ink);
    }

    .empty-icon {
      font-size: 48px;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(12px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Today</h1>
      <p>{{DATE}}</p>
    </header>

    <nav class="tabs">
      {{TABS}}
    </nav>

    <section class="progress">
      <div class="progress-title">
        <span>Today's progress</span>
        <span id="progress-units">{{COMPLETED}}/{{TOTAL}} ({{PERCENT_LABEL}}%)</span>
      </div>
      <div class="bar">
        <div class="bar-fill" style="width: {{PERCENT}}%;"></div>
      </div>
    </section>

    <section class="habits">
      {{HABITS}}
    </section>
  </main>
</body>
</html>
"#;
