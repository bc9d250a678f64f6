use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::Column;
use crate::core::services::{notify, sign_out};
use crate::features::kanban::hooks::BoardHook;

#[component]
pub fn KanbanHeader(#[prop(into)] title: String, board: BoardHook) -> impl IntoView {
    let (new_task, set_new_task) = signal(String::new());
    let (selected_column, set_selected_column) = signal(Column::default());

    let submit = move || {
        let content = new_task.get_untracked();
        if board.add_task(selected_column.get_untracked(), content).is_some() {
            set_new_task.set(String::new());
        }
    };

    let handle_signout = move |_| {
        spawn_local(async move {
            match sign_out().await {
                Ok(()) => {
                    log::info!("Sign out request completed");
                    notify("Signed out Successfully!");
                }
                Err(e) => {
                    log::error!("Sign out failed: {}", e);
                    notify(&e.to_string());
                }
            }
        });
    };

    view! {
        <div class="navbar">
            <h2>{title}</h2>
            <span class="task-total">
                {move || board.board.with(|b| format!("{} tasks", b.total_tasks()))}
            </span>
            <div class="navbar-links">
                <div class="add-task">
                    <input
                        type="text"
                        placeholder="Add new task"
                        prop:value=move || new_task.get()
                        on:input=move |ev| set_new_task.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <select on:change=move |ev| {
                        match event_target_value(&ev).parse::<Column>() {
                            Ok(column) => set_selected_column.set(column),
                            Err(e) => log::warn!("{}", e),
                        }
                    }>
                        {Column::all()
                            .into_iter()
                            .map(|column| {
                                view! {
                                    <option
                                        value=column.id()
                                        selected=move || selected_column.get() == column
                                    >
                                        {column.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button on:click=move |_| submit()>"Add Task"</button>
                </div>
                <button class="signout-button" on:click=handle_signout>"Signout"</button>
            </div>
        </div>
    }
}
