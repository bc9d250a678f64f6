use leptos::prelude::*;

use crate::core::models::Column;
use crate::features::kanban::components::TaskCard;
use crate::features::kanban::hooks::BoardHook;
use crate::features::kanban::services::{DropTarget, Slot};

#[component]
pub fn KanbanColumn(column: Column, board: BoardHook) -> impl IntoView {
    let tasks = board.board;

    view! {
        <div
            class="column"
            data-column=column.id()
            on:dragover=move |ev| ev.prevent_default()
            on:drop=move |ev| {
                ev.prevent_default();
                board.drop_on(DropTarget::append(column));
            }
        >
            <div class="column-header">
                <h3>{column.heading()}</h3>
                <span class="task-count">{move || tasks.with(|b| b.tasks(column).len())}</span>
            </div>
            <div class="task-list">
                {move || {
                    tasks.with(|b| {
                        b.tasks(column)
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(index, task)| {
                                view! { <TaskCard task=task position=Slot::new(column, index) board=board /> }
                            })
                            .collect::<Vec<_>>()
                    })
                }}
            </div>
        </div>
    }
}
