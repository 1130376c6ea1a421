/// Everything that can go wrong while loading or running a program
///
/// Run-time variants latch the machine into a halted state when they surface
/// from instruction execution; `InvalidProgram` and `InvalidKey` are caller
/// contract failures and leave the machine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("program of {size} bytes exceeds the {capacity} byte program area")]
    InvalidProgram { size: usize, capacity: usize },

    #[error("no instruction matches opcode {0:#06X}")]
    InvalidOpcode(u16),

    #[error("call stack overflowed")]
    StackOverflow,

    #[error("returned with an empty call stack")]
    StackUnderflow,

    #[error("memory address {0:#07X} is out of range")]
    AddressOutOfRange(usize),

    #[error("key {0:#04X} is not on the 16-key pad")]
    InvalidKey(u8),
}
