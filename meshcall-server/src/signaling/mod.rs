mod dispatcher;
mod router;
mod signaling_service;
mod subscription;
mod ws_handler;

pub use dispatcher::*;
pub use router::*;
pub use signaling_service::*;
pub use subscription::*;
pub use ws_handler::*;
