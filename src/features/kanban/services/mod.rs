pub mod board_operations;

pub use board_operations::*;
