pub mod channels;
pub mod instance;

pub use channels::ChannelBuffer;
pub use instance::{DotBuffer, DotInstance};
