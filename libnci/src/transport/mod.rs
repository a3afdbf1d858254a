// libnci/src/transport/mod.rs

pub mod mock;
pub mod traits;

pub use mock::{MockSink, SentCommand};
pub use traits::CommandSink;
