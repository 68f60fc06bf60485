mod client;
mod loader;

/// The port used when the remote URL does not specify one.
/// This is the same default as the Spark Connect server.
pub const DEFAULT_SPARK_CONNECT_PORT: u16 = 15002;

pub use client::*;
pub use loader::deserialize_non_empty_string;
