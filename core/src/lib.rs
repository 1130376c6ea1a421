pub use chip8::{Chip8, Event};
pub use error::Error;
pub use state::FrameBuffer;

mod chip8;
pub mod constants;
mod error;
mod instruction;
mod opcode;
mod operations;
pub mod state;
