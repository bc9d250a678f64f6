pub mod home;
pub mod not_found;
pub mod private;

pub use home::Home;
pub use not_found::NotFound;
pub use private::Private;
