/// Horizontal pixel count of the Chip-8 display
pub const DISPLAY_WIDTH: usize = 64;

/// Vertical pixel count of the Chip-8 display
pub const DISPLAY_HEIGHT: usize = 32;

/// Total addressable memory in bytes
pub const MEMORY_SIZE: usize = 4096;

/// Address at which loaded programs begin; everything below it is reserved
/// for the interpreter (in practice, the sprite sheet)
pub const PROGRAM_START: usize = 0x200;

/// Number of return addresses the call stack can hold
pub const STACK_DEPTH: usize = 16;

/// Logical ticks per second; timers decrement once per tick
pub const TICK_RATE: u32 = 60;

/// Instructions executed per tick unless reconfigured
pub const DEFAULT_SPEED: u32 = 12;

/// Upper bound on the ticks a single `advance` call will catch up on after
/// a delayed host callback
pub const DEFAULT_MAX_CATCH_UP: u32 = 30;

/// Sprites for the hexadecimal digits 0..F
///
/// Each sprite is 5 bytes tall and uses the high 4 bits of each byte as one
/// row of pixels. They live at the bottom of memory so that `I = Vx * 5`
/// addresses the sprite for the digit in Vx.
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
