pub mod json;
pub mod memory;
pub mod text;

pub use json::JsonSink;
pub use memory::MemorySink;
pub use text::TextSink;
