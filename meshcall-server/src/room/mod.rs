mod adapter;
mod memory_adapter;
mod ready;
mod room_manager;

pub use adapter::*;
pub use memory_adapter::*;
pub use ready::*;
pub use room_manager::*;
