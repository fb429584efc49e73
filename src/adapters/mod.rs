// Adapters layer: concrete CommandInvoker implementations.

pub mod http;
pub mod memory;

pub use http::HttpInvoker;
pub use memory::MemoryBackend;
