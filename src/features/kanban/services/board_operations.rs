use serde::{Deserialize, Serialize};

use crate::core::models::{Column, Task, TaskIdGenerator};

/// A position in one column's task list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub column: Column,
    pub index: usize,
}

impl Slot {
    pub fn new(column: Column, index: usize) -> Self {
        Self { column, index }
    }
}

/// Result of a finished drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    // Released outside any column
    Aborted,
    // `destination.index` is in the destination list's index space after the
    // task has been taken out of its source list
    Dropped { source: Slot, destination: Slot },
}

/// Where a dragged card was released: in front of the card rendered at
/// `before`, or at the end of the column when `before` is None.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub column: Column,
    pub before: Option<usize>,
}

impl DropTarget {
    pub fn before(column: Column, index: usize) -> Self {
        Self { column, before: Some(index) }
    }

    pub fn append(column: Column) -> Self {
        Self { column, before: None }
    }
}

#[derive(Debug, Clone, Default)]
pub struct BoardState {
    columns: [Vec<Task>; 3],
    ids: TaskIdGenerator,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self, column: Column) -> &[Task] {
        &self.columns[column.slot()]
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }

    // Appends a task and returns its id; blank content is ignored
    pub fn add_task(&mut self, column: Column, content: &str) -> Option<String> {
        if content.trim().is_empty() {
            return None;
        }
        let id = self.ids.next_id();
        self.columns[column.slot()].push(Task::new(id.clone(), content.to_string()));
        Some(id)
    }

    pub fn delete_task(&mut self, column: Column, task_id: &str) -> bool {
        let tasks = &mut self.columns[column.slot()];
        match tasks.iter().position(|t| t.id == task_id) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// Applies a drag result. Returns false when nothing changed: an aborted
    /// drag, a drop back onto the same position, or indices that do not fit
    /// the current lists. Bounds are checked before anything is removed, so a
    /// rejected move never loses or duplicates a task.
    pub fn move_task(&mut self, outcome: DragOutcome) -> bool {
        let (source, destination) = match outcome {
            DragOutcome::Aborted => return false,
            DragOutcome::Dropped { source, destination } => (source, destination),
        };

        let source_len = self.tasks(source.column).len();
        if source.index >= source_len {
            return false;
        }

        if source.column == destination.column {
            // post-removal list has source_len - 1 items, so valid inserts are 0..source_len
            if destination.index >= source_len || destination.index == source.index {
                return false;
            }
            let tasks = &mut self.columns[source.column.slot()];
            let task = tasks.remove(source.index);
            tasks.insert(destination.index, task);
        } else {
            if destination.index > self.tasks(destination.column).len() {
                return false;
            }
            let task = self.columns[source.column.slot()].remove(source.index);
            self.columns[destination.column.slot()].insert(destination.index, task);
        }
        true
    }

    /// Turns a drag origin and the drop target into a `DragOutcome`.
    /// Within one column the target index is shifted down when it lies past
    /// the origin, because the card leaves the list before it is reinserted.
    pub fn resolve_drop(&self, origin: Option<Slot>, target: DropTarget) -> DragOutcome {
        let Some(source) = origin else {
            return DragOutcome::Aborted;
        };

        let target_len = self.tasks(target.column).len();
        let mut index = target.before.unwrap_or(target_len).min(target_len);
        if target.column == source.column && index > source.index {
            index -= 1;
        }

        DragOutcome::Dropped {
            source,
            destination: Slot::new(target.column, index),
        }
    }
}
