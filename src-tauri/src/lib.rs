//! Dayplan Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - commands: Tauri command handlers

use std::path::PathBuf;

use tauri::{Emitter, Manager};
use tracing::{error, info};

mod commands;
mod domain;
mod repository;

use repository::{init_db, DbState, EvaluationRepository, GoalRepository, TaskRepository};

/// Application state shared across commands
pub struct AppState {
    pub goal_repo: GoalRepository,
    pub task_repo: TaskRepository,
    pub evaluation_repo: EvaluationRepository,
    pub db_path: PathBuf,
}

/// Get database path from app handle
fn get_db_path(app_handle: &tauri::AppHandle) -> PathBuf {
    let app_dir = app_handle.path().app_data_dir().unwrap();
    std::fs::create_dir_all(&app_dir).unwrap();
    app_dir.join("dayplan.db")
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tauri::Builder::default()
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                    // Focus the existing window when a new instance tries to start
                    #[cfg(desktop)]
                    if let Some(window) = _app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            let app_handle = app.handle().clone();
            let db_path = get_db_path(&app_handle);

            // Create initial empty DbState and manage state IMMEDIATELY so
            // the window opens without waiting for the database
            let db_state = DbState::new();
            app.manage(AppState {
                goal_repo: GoalRepository::new(db_state.clone()),
                task_repo: TaskRepository::new(db_state.clone()),
                evaluation_repo: EvaluationRepository::new(db_state.clone()),
                db_path: db_path.clone(),
            });

            // Initialize database asynchronously in background
            tauri::async_runtime::spawn(async move {
                match init_db(&db_path) {
                    Ok(conn) => {
                        *db_state.conn.lock().await = Some(conn);
                        info!("background db init complete");

                        // Notify frontend so it reloads its collections
                        if let Err(e) = app_handle.emit("db-initialized", ()) {
                            error!(error = %e, "failed to emit db-initialized");
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "background db init failed");
                    }
                }
            });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // Goals
            commands::create_goal,
            commands::list_goals,
            commands::get_goal,
            commands::update_goal,
            commands::set_goal_status,
            commands::delete_goal,
            // Tasks
            commands::create_task,
            commands::list_tasks,
            commands::list_tasks_by_date,
            commands::update_task,
            commands::set_task_goal,
            commands::toggle_task,
            commands::delete_task,
            // Evaluations
            commands::save_evaluation,
            commands::get_evaluation,
            commands::list_evaluations,
            commands::delete_evaluation,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
