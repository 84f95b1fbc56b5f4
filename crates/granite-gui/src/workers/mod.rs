mod decode;
mod dispatch;

pub use dispatch::spawn_worker;
pub(crate) use dispatch::{send, send_log};
