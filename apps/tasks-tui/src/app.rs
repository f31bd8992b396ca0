//! Interactive event loop for the task board TUI.
//!
//! Each user action issues at most one request and awaits it inline, so
//! mutations are serialized per session. A failed request is logged, surfaced
//! in the status line, and leaves local state untouched.

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use eyre::WrapErr;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::error;

use crate::api::{ApiError, CreateTask, TaskStatus, TasksApi, UpdateTask};
use crate::board::Board;
use crate::ui;

/// The running application: API handle plus the owned board state.
pub struct App {
    api: TasksApi,
    board: Board,
}

impl App {
    pub fn new(api: TasksApi) -> Self {
        Self {
            api,
            board: Board::default(),
        }
    }

    /// Start the interactive TUI loop.
    pub async fn run(mut self) -> eyre::Result<()> {
        // Set up terminal.
        enable_raw_mode().wrap_err("enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).wrap_err("enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).wrap_err("create terminal")?;

        let result = self.event_loop(&mut terminal).await;

        // Restore terminal regardless of result.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> eyre::Result<()> {
        // Initial load; an unreachable server leaves the (empty) list as-is.
        self.load().await;

        loop {
            terminal.draw(|f| ui::draw(f, &self.board))?;

            // Poll for terminal events (non-blocking, 50ms timeout).
            if event::poll(std::time::Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    match (key.code, key.modifiers) {
                        (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                        // Esc cancels an edit; with no edit open it quits.
                        (KeyCode::Esc, _) => {
                            if self.board.edit.is_some() {
                                self.board.cancel_edit();
                            } else {
                                break;
                            }
                        }
                        (KeyCode::Enter, _) => {
                            if self.board.edit.is_some() {
                                self.commit_edit().await;
                            } else {
                                self.add_task().await;
                            }
                        }
                        (KeyCode::Backspace, _) => {
                            if let Some(draft) = self.board.edit.as_mut() {
                                draft.text.pop();
                            } else {
                                self.board.input.pop();
                            }
                        }
                        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
                            self.toggle_selected().await
                        }
                        (KeyCode::Char('e'), KeyModifiers::CONTROL) => self.board.begin_edit(),
                        (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                            self.delete_selected().await
                        }
                        (KeyCode::Up, _) => self.board.select_prev(),
                        (KeyCode::Down, _) => self.board.select_next(),
                        (KeyCode::Left, _) => {
                            if self.board.edit.is_none() {
                                self.board.cycle_filter_back();
                            }
                        }
                        (KeyCode::Right, _) => {
                            if self.board.edit.is_none() {
                                self.board.cycle_filter_forward();
                            }
                        }
                        // Regular character input.
                        (KeyCode::Char(c), modifiers)
                            if !modifiers.contains(KeyModifiers::CONTROL) =>
                        {
                            if let Some(draft) = self.board.edit.as_mut() {
                                draft.text.push(c);
                            } else {
                                self.board.input.push(c);
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        Ok(())
    }

    /// Fetch the full list and replace local state.
    async fn load(&mut self) {
        match self.api.list().await {
            Ok(tasks) => {
                self.board.set_tasks(tasks);
                self.board.status_line.clear();
            }
            Err(err) => self.report("Failed to load tasks", &err),
        }
    }

    /// Create a task from the input line. Whitespace-only input is a no-op.
    async fn add_task(&mut self) {
        let name = self.board.input.trim().to_string();
        if name.is_empty() {
            return;
        }

        let input = CreateTask {
            name,
            status: TaskStatus::Active,
        };

        match self.api.create(&input).await {
            Ok(task) => {
                self.board.push_task(task);
                self.board.input.clear();
                self.board.status_line.clear();
            }
            Err(err) => self.report("Failed to add task", &err),
        }
    }

    /// Resend the selected task with its status inverted.
    async fn toggle_selected(&mut self) {
        let Some(task) = self.board.selected_task() else {
            return;
        };

        let id = task.id;
        let mut update = UpdateTask::full(task);
        update.status = Some(task.status.toggled());

        match self.api.update(id, &update).await {
            Ok(Some(task)) => {
                self.board.replace_task(task);
                self.board.status_line.clear();
            }
            Ok(None) => {
                self.board.status_line = "Task no longer exists on the server".to_string();
            }
            Err(err) => self.report("Failed to update task", &err),
        }
    }

    /// Send the edited name. No-op when the draft trims to empty; edit state
    /// is only cleared once the server has answered.
    async fn commit_edit(&mut self) {
        let Some(draft) = self.board.edit.clone() else {
            return;
        };

        let name = draft.text.trim().to_string();
        if name.is_empty() {
            return;
        }

        match self.api.update(draft.id, &UpdateTask::rename(name)).await {
            Ok(Some(task)) => {
                self.board.replace_task(task);
                self.board.cancel_edit();
                self.board.status_line.clear();
            }
            Ok(None) => {
                self.board.cancel_edit();
                self.board.status_line = "Task no longer exists on the server".to_string();
            }
            Err(err) => self.report("Failed to rename task", &err),
        }
    }

    /// Delete the selected task and drop it from local state.
    async fn delete_selected(&mut self) {
        let Some(task) = self.board.selected_task() else {
            return;
        };
        let id = task.id;

        match self.api.delete(id).await {
            Ok(()) => {
                self.board.remove_task(id);
                self.board.status_line.clear();
            }
            Err(err) => self.report("Failed to delete task", &err),
        }
    }

    fn report(&mut self, context: &str, err: &ApiError) {
        error!(error = %err, "{}", context);
        self.board.status_line = format!("{context}: {err}");
    }
}
