//! UI state for the task board.
//!
//! All client state lives in one owned [`Board`] value passed down from the
//! event loop; mutations patch it from server responses rather than
//! re-fetching the list.

use uuid::Uuid;

use crate::api::{Task, TaskStatus};

/// Which subset of tasks the list shows. Purely local; switching filters
/// never issues a network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl StatusFilter {
    pub fn allows(self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => status == TaskStatus::Active,
            StatusFilter::Completed => status == TaskStatus::Completed,
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Active,
            StatusFilter::Active => StatusFilter::Completed,
            StatusFilter::Completed => StatusFilter::All,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Completed => "Completed",
        }
    }
}

/// An in-progress rename of a single task. At most one exists at a time.
#[derive(Debug, Clone)]
pub struct EditDraft {
    pub id: Uuid,
    pub text: String,
}

/// The whole client-side state of the task board.
#[derive(Debug, Default)]
pub struct Board {
    /// Full local task list, as last fetched or incrementally patched
    pub tasks: Vec<Task>,
    /// Active display filter
    pub filter: StatusFilter,
    /// New-task input text
    pub input: String,
    /// Edit-in-progress, if any
    pub edit: Option<EditDraft>,
    /// Cursor into the visible list
    pub selected: usize,
    /// Last outcome or error, shown in the header
    pub status_line: String,
}

impl Board {
    /// The displayed subset: local list intersected with the filter.
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.allows(task.status))
            .collect()
    }

    /// The task under the cursor, if the visible list is non-empty.
    pub fn selected_task(&self) -> Option<&Task> {
        self.visible().get(self.selected).copied()
    }

    /// Replace the whole list (initial load).
    pub fn set_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.clamp_selection();
    }

    /// Append a newly created task.
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Swap the local entry matching the server response.
    pub fn replace_task(&mut self, task: Task) {
        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
            *slot = task;
        }
    }

    /// Drop the entry with the given id.
    pub fn remove_task(&mut self, id: Uuid) {
        self.tasks.retain(|task| task.id != id);
        self.clamp_selection();
    }

    /// Start editing the selected task, seeding the draft with its name.
    /// No-op when nothing is selected.
    pub fn begin_edit(&mut self) {
        let target = self
            .selected_task()
            .map(|task| (task.id, task.name.clone()));

        if let Some((id, text)) = target {
            self.edit = Some(EditDraft { id, text });
        }
    }

    /// Abandon the edit without touching the task.
    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn cycle_filter_forward(&mut self) {
        self.filter = self.filter.next();
        self.clamp_selection();
    }

    pub fn cycle_filter_back(&mut self) {
        self.filter = self.filter.prev();
        self.clamp_selection();
    }

    pub fn select_next(&mut self) {
        let count = self.visible().len();
        if count > 0 && self.selected + 1 < count {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor inside the visible list after it shrinks.
    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            self.selected = 0;
        } else if self.selected >= count {
            self.selected = count - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn task(name: &str, status: TaskStatus) -> Task {
        Task {
            id: Uuid::new_v4(),
            name: name.to_string(),
            status,
            priority: "medium".to_string(),
            due_date: Utc::now(),
        }
    }

    fn board_with(tasks: Vec<Task>) -> Board {
        let mut board = Board::default();
        board.set_tasks(tasks);
        board
    }

    #[test]
    fn test_filters_partition_the_list() {
        let mut board = board_with(vec![
            task("a", TaskStatus::Active),
            task("b", TaskStatus::Completed),
            task("c", TaskStatus::Active),
        ]);

        assert_eq!(board.visible().len(), 3);

        board.filter = StatusFilter::Active;
        let active: Vec<_> = board.visible().iter().map(|t| t.name.clone()).collect();
        assert_eq!(active, vec!["a", "c"]);

        board.filter = StatusFilter::Completed;
        let completed: Vec<_> = board.visible().iter().map(|t| t.name.clone()).collect();
        assert_eq!(completed, vec!["b"]);
    }

    #[test]
    fn test_filter_cycle_round_trips() {
        let filter = StatusFilter::All;
        assert_eq!(filter.next().next().next(), StatusFilter::All);
        assert_eq!(filter.next().prev(), StatusFilter::All);
    }

    #[test]
    fn test_begin_edit_seeds_draft_with_current_name() {
        let mut board = board_with(vec![task("original", TaskStatus::Active)]);

        board.begin_edit();

        let draft = board.edit.as_ref().expect("edit started");
        assert_eq!(draft.text, "original");
        assert_eq!(draft.id, board.tasks[0].id);
    }

    #[test]
    fn test_cancel_edit_leaves_task_unchanged() {
        let mut board = board_with(vec![task("original", TaskStatus::Active)]);

        board.begin_edit();
        board.edit.as_mut().unwrap().text = "scribbles".to_string();
        board.cancel_edit();

        assert!(board.edit.is_none());
        assert_eq!(board.tasks[0].name, "original");
    }

    #[test]
    fn test_begin_edit_with_empty_list_is_noop() {
        let mut board = board_with(vec![]);
        board.begin_edit();
        assert!(board.edit.is_none());
    }

    #[test]
    fn test_replace_task_swaps_matching_entry() {
        let mut board = board_with(vec![task("before", TaskStatus::Active)]);

        let mut updated = board.tasks[0].clone();
        updated.name = "after".to_string();
        updated.status = TaskStatus::Completed;
        board.replace_task(updated);

        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.tasks[0].name, "after");
        assert_eq!(board.tasks[0].status, TaskStatus::Completed);
    }

    #[test]
    fn test_remove_task_clamps_selection() {
        let mut board = board_with(vec![
            task("a", TaskStatus::Active),
            task("b", TaskStatus::Active),
        ]);
        board.selected = 1;

        let id = board.tasks[1].id;
        board.remove_task(id);

        assert_eq!(board.tasks.len(), 1);
        assert_eq!(board.selected, 0);
    }

    #[test]
    fn test_selection_stays_inside_visible_subset() {
        let mut board = board_with(vec![
            task("a", TaskStatus::Active),
            task("b", TaskStatus::Active),
            task("c", TaskStatus::Completed),
        ]);
        board.selected = 1;

        // All -> Active -> Completed: only one task remains visible
        board.cycle_filter_forward();
        board.cycle_filter_forward();

        assert_eq!(board.filter, StatusFilter::Completed);
        assert_eq!(board.selected, 0);

        board.select_next();
        assert_eq!(board.selected, 0);
    }

    #[test]
    fn test_visible_empty_when_nothing_matches() {
        let mut board = board_with(vec![task("a", TaskStatus::Active)]);
        board.filter = StatusFilter::Completed;
        assert!(board.visible().is_empty());
    }
}
