use leptos::prelude::*;

use crate::core::models::Task;
use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::{DropTarget, Slot};

// A draggable card; the whole card is the drag handle
#[component]
pub fn TaskCard(task: Task, position: Slot, board: BoardHook) -> impl IntoView {
    let drag_id = task.id.clone();
    let delete_id = task.id;

    view! {
        <div
            class="task-item"
            draggable="true"
            class:dragging=move || board.dragging.get() == Some(position)
            on:dragstart=move |ev| {
                // Firefox will not start a drag without data attached
                if let Some(data) = ev.data_transfer() {
                    if let Err(e) = data.set_data("text/plain", &drag_id) {
                        log::debug!("Could not attach drag data for {}: {:?}", drag_id, e);
                    }
                }
                board.start_drag(position);
            }
            on:dragend=move |_| board.end_drag()
            on:dragover=move |ev| ev.prevent_default()
            on:drop=move |ev| {
                ev.prevent_default();
                ev.stop_propagation();
                board.drop_on(DropTarget::before(position.column, position.index));
            }
        >
            <span>{task.content}</span>
            <button
                class="delete-button"
                title="Delete task"
                on:click=move |_| board.delete_task(position.column, &delete_id)
            >
                "×"
            </button>
        </div>
    }
}
