//! Binary buffer primitives shared by the steam-kv codecs.

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
