use leptos::prelude::*;

use crate::core::config::AppConfig;
use crate::core::models::Column;
use crate::features::kanban::{use_board, KanbanColumn, KanbanHeader};

// The board itself. State is local to this page and starts empty on every
// mount.
#[component]
pub fn Private() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let board = use_board();

    view! {
        <div class="private-container">
            <KanbanHeader title=config.title board=board />
            <div class="columns-container">
                {Column::all()
                    .into_iter()
                    .map(|column| view! { <KanbanColumn column=column board=board /> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
