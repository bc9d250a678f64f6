pub mod require_user;

pub use require_user::RequireUser;
