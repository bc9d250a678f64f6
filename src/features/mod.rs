pub mod auth;
pub mod kanban;
