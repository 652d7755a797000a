pub use meshcall_core::model::{ClientId, Message, RoomId};

pub mod model {
    pub use meshcall_core::model::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use meshcall_server::*;
}
