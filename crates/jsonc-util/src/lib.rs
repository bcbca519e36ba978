//! Shared foundation for the jsonc decoder: the arena allocator and the
//! error/position types used by both the lexer and the parser.

mod arena;
mod error;
mod position;

pub use arena::{Arena, DEFAULT_REGION_SIZE};
pub use error::{Error, ErrorCode};
pub use position::Position;

pub type Result<T> = std::result::Result<T, Error>;
