use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use log::{error, info, warn};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chirp8_core::{Chip8, Event as MachineEvent};
use chirp8_display::Display;

use crate::keymap::keymap;
use crate::sound::{Buzzer, Mute, Sound};

/// Host refresh interval; the machine advances once per frame
const FRAME_TIME: Duration = Duration::from_nanos(1_000_000_000 / 60);

/// Bounds for the speed keys; the core itself doesn't clamp
const MIN_SPEED: u32 = 1;
const MAX_SPEED: u32 = 30;

pub fn run(rom: &Path, mute: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut chip8 = Chip8::new();

    let image = fs::read(rom)?;
    chip8.load_rom(&image)?;
    info!("loaded {} byte program from {}", image.len(), rom.display());

    // Get SDL2 context
    let sdl = sdl2::init()?;
    let mut display = Display::new(&sdl)?;
    let mut events = sdl.event_pump()?;

    let mut sound: Box<dyn Sound> = if mute {
        Box::new(Mute)
    } else {
        Box::new(Buzzer::new())
    };

    'frame: loop {
        let frame_start = Instant::now();

        // Handle input
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'frame,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(index)) => chip8.press(index)?,
                    (Keycode::Up, _) => {
                        let speed = (chip8.speed() + 1).min(MAX_SPEED);
                        chip8.set_speed(speed);
                        info!("speed set to {} instructions per tick", speed);
                    }
                    (Keycode::Down, _) => {
                        let speed = chip8.speed().saturating_sub(1).max(MIN_SPEED);
                        chip8.set_speed(speed);
                        info!("speed set to {} instructions per tick", speed);
                    }
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => {
                    if let Some(index) = keymap(key) {
                        chip8.release(index)?;
                    }
                }
                _ => continue,
            }
        }

        // Update state and apply the side effects it reports
        for machine_event in chip8.advance() {
            match machine_event {
                MachineEvent::SoundStart => {
                    if let Err(err) = sound.start() {
                        warn!("buzzer unavailable, muting: {}", err);
                        sound = Box::new(Mute);
                    }
                }
                MachineEvent::SoundStop => {
                    if let Err(err) = sound.stop() {
                        warn!("buzzer unavailable, muting: {}", err);
                        sound = Box::new(Mute);
                    }
                }
                MachineEvent::Fault(fault) => error!("machine halted: {}", fault),
            }
        }

        // If the frame buffer changed, render the new frame
        if let Some(frame) = chip8.get_frame() {
            display.render(&frame)?;
        }

        // Handle timing
        let elapsed = frame_start.elapsed();
        if FRAME_TIME > elapsed {
            std::thread::sleep(FRAME_TIME - elapsed);
        }
    }

    Ok(())
}
