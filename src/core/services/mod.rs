pub mod identity;
pub mod notify;

pub use identity::*;
pub use notify::*;
