use std::time::Instant;

use crate::constants::{DEFAULT_MAX_CATCH_UP, DEFAULT_SPEED, MEMORY_SIZE, PROGRAM_START, TICK_RATE};
use crate::error::Error;
use crate::instruction;
use crate::opcode::Opcode;
use crate::state::{FrameBuffer, State};

/// A host-visible side effect of advancing the machine
///
/// The host receives these as the return value of [`Chip8::advance`] instead
/// of through callbacks, so the core carries no UI dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The sound timer is running; the buzzer should be audible
    SoundStart,
    /// The sound timer has run out; the buzzer should be silent
    SoundStop,
    /// Execution failed and the machine is now halted until a new one is
    /// constructed. Emitted exactly once per fault
    Fault(Error),
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Owns the machine [`State`] plus everything the state itself doesn't
/// track: the pressed-key latch, the instructions-per-tick speed, the fault
/// latch, and the wall-clock baseline of the frame scheduler.
///
/// Supplies interfaces for:
/// - loading programs
/// - pressing and releasing keys
/// - advancing the machine in real time or by an explicit tick count
/// - inspecting the frame buffer for rendering by some display
pub struct Chip8 {
    state: State,
    pressed_keys: [bool; 16],
    speed: u32,
    max_catch_up: u32,
    fault: Option<Error>,
    last_frame: Option<Instant>,
}

impl Chip8 {
    pub fn new() -> Self {
        Chip8 {
            state: State::new(),
            pressed_keys: [false; 16],
            speed: DEFAULT_SPEED,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
            fault: None,
            last_frame: None,
        }
    }

    /// Copies a program image into memory at 0x200
    ///
    /// # Arguments
    /// * `rom` the raw program bytes
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), Error> {
        let capacity = MEMORY_SIZE - PROGRAM_START;
        if rom.len() > capacity {
            return Err(Error::InvalidProgram {
                size: rom.len(),
                capacity,
            });
        }
        self.state.memory[PROGRAM_START..PROGRAM_START + rom.len()].copy_from_slice(rom);
        Ok(())
    }

    /// Advances the machine by however much wall-clock time has passed
    ///
    /// Call once per host display refresh. Elapsed time since the previous
    /// call is converted to whole ticks (nearest 1/60 s, floored at one so a
    /// late callback never stalls the machine, capped at the catch-up limit);
    /// the very first call is the timing baseline and runs a single tick.
    pub fn advance(&mut self) -> Vec<Event> {
        let now = Instant::now();
        let ticks = match self.last_frame.replace(now) {
            None => 1,
            Some(last) => {
                let elapsed = now.duration_since(last).as_secs_f64();
                (elapsed * f64::from(TICK_RATE)).round().max(1.0) as u32
            }
        };
        self.advance_ticks(ticks.min(self.max_catch_up))
    }

    /// Advances the machine by an explicit number of ticks
    ///
    /// Each tick decrements both timers once (floored at zero) and runs
    /// `speed` instructions. Execution is skipped while the machine waits
    /// for a key or has faulted; timer bookkeeping continues regardless.
    pub fn advance_ticks(&mut self, ticks: u32) -> Vec<Event> {
        let mut events = Vec::new();

        let elapsed = ticks.min(0xFF) as u8;
        self.state.delay_timer = self.state.delay_timer.saturating_sub(elapsed);
        self.state.sound_timer = self.state.sound_timer.saturating_sub(elapsed);
        events.push(if self.state.sound_timer > 0 {
            Event::SoundStart
        } else {
            Event::SoundStop
        });

        for _ in 0..ticks.saturating_mul(self.speed) {
            if self.fault.is_some() || self.state.register_needing_key.is_some() {
                // Nothing can unblock either condition mid-call; key events
                // only arrive between advance calls
                break;
            }
            if let Err(fault) = self.execute_one() {
                self.fault = Some(fault);
                events.push(Event::Fault(fault));
            }
        }

        events
    }

    /// Fetches, decodes, and executes the instruction at pc
    ///
    /// pc is advanced past the instruction word before it executes, so
    /// jumps overwrite it and skips add to it. On failure pc stays
    /// advanced and the rest of the state is untouched.
    fn execute_one(&mut self) -> Result<(), Error> {
        let op = self.fetch()?;
        let operation = instruction::from_op(op).ok_or(Error::InvalidOpcode(op.raw()))?;
        self.state = operation(op, &self.state, self.pressed_keys)?;
        Ok(())
    }

    /// Reads the two instruction bytes at pc and advances pc past them
    fn fetch(&mut self) -> Result<Opcode, Error> {
        let pc = self.state.pc as usize;
        let high = self.state.read_byte(pc)?;
        let low = self.state.read_byte(pc + 1)?;
        self.state.pc += 0x2;
        Ok(Opcode(u16::from(high) << 8 | u16::from(low)))
    }

    /// Latches a key down
    ///
    /// If the machine is suspended waiting for a key, the key index lands
    /// in the remembered register and execution resumes on the next tick.
    ///
    /// # Arguments
    /// * `key` the key index, 0x0..=0xF
    pub fn press(&mut self, key: u8) -> Result<(), Error> {
        if key > 0xF {
            return Err(Error::InvalidKey(key));
        }
        self.pressed_keys[key as usize] = true;
        if let Some(register) = self.state.register_needing_key.take() {
            self.state.v[register as usize] = key;
        }
        Ok(())
    }

    /// Latches a key up
    ///
    /// # Arguments
    /// * `key` the key index, 0x0..=0xF
    pub fn release(&mut self, key: u8) -> Result<(), Error> {
        if key > 0xF {
            return Err(Error::InvalidKey(key));
        }
        self.pressed_keys[key as usize] = false;
        Ok(())
    }

    /// Whether the pixel at (x, y) is lit; x in [0, 64), y in [0, 32)
    pub fn is_lit(&self, x: usize, y: usize) -> bool {
        self.state.frame_buffer[y][x] != 0
    }

    /// Returns a frame buffer snapshot if the display changed since the
    /// last call
    pub fn get_frame(&mut self) -> Option<FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Instructions executed per tick
    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Sets the instructions-per-tick quota
    ///
    /// No bounds are enforced here; hosts should clamp to a sane range
    /// (the bundled frontend uses 1..=30)
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }

    /// Caps how many missed ticks a single `advance` call will replay
    pub fn set_max_catch_up(&mut self, ticks: u32) {
        self.max_catch_up = ticks;
    }
}

impl Default for Chip8 {
    fn default() -> Self {
        Self::new()
    }
}
