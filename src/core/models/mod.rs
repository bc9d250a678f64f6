pub mod column;
pub mod task;
pub mod user;

pub use column::Column;
pub use task::{Task, TaskIdGenerator};
pub use user::User;
