use leptos::prelude::*;

use crate::core::models::Column;
use crate::features::kanban::services::{BoardState, DragOutcome, DropTarget, Slot};

// Board state plus the card currently being dragged. Both live for as long
// as the page that called `use_board`.
#[derive(Clone, Copy)]
pub struct BoardHook {
    pub board: RwSignal<BoardState>,
    pub dragging: RwSignal<Option<Slot>>,
}

pub fn use_board() -> BoardHook {
    BoardHook {
        board: RwSignal::new(BoardState::new()),
        dragging: RwSignal::new(None),
    }
}

impl BoardHook {
    pub fn add_task(&self, column: Column, content: String) -> Option<String> {
        let mut added = None;
        // maybe_update only notifies subscribers when the board really changed
        self.board.maybe_update(|board| {
            added = board.add_task(column, &content);
            added.is_some()
        });
        match &added {
            Some(id) => log::debug!("Added task {} to {}", id, column),
            None => log::debug!("Ignored blank task for {}", column),
        }
        added
    }

    pub fn delete_task(&self, column: Column, task_id: &str) {
        self.board.maybe_update(|board| board.delete_task(column, task_id));
        log::debug!("Delete task {} from {}", task_id, column);
    }

    pub fn start_drag(&self, origin: Slot) {
        self.dragging.set(Some(origin));
    }

    pub fn drop_on(&self, target: DropTarget) {
        let origin = self.dragging.get_untracked();
        self.dragging.set(None);
        let outcome = self.board.with_untracked(|board| board.resolve_drop(origin, target));
        self.apply(outcome);
    }

    // dragend fires after drop; if a drop already consumed the origin there
    // is nothing left to do
    pub fn end_drag(&self) {
        if self.dragging.get_untracked().is_some() {
            self.dragging.set(None);
            self.apply(DragOutcome::Aborted);
        }
    }

    fn apply(&self, outcome: DragOutcome) {
        let mut changed = false;
        self.board.maybe_update(|board| {
            changed = board.move_task(outcome);
            changed
        });
        if changed {
            log::debug!("Moved task: {:?}", outcome);
        } else {
            log::debug!("Drop left the board unchanged: {:?}", outcome);
        }
    }
}
