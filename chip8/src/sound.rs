use std::error::Error;

use beep::beep;

/// Something that can hold a buzzer tone
///
/// The interpreter reports sound-timer state every frame, so `start` and
/// `stop` must tolerate being called repeatedly.
pub trait Sound {
    fn start(&mut self) -> Result<(), Box<dyn Error>>;
    fn stop(&mut self) -> Result<(), Box<dyn Error>>;
}

const BUZZER_PITCH: u16 = 440; // A4

/// Drives the PC speaker
pub struct Buzzer {
    is_sounding: bool,
}

impl Buzzer {
    pub fn new() -> Self {
        Buzzer { is_sounding: false }
    }
}

impl Sound for Buzzer {
    fn start(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_sounding {
            return Ok(());
        }
        beep(BUZZER_PITCH)?;
        self.is_sounding = true;
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        if !self.is_sounding {
            return Ok(());
        }
        beep(0)?;
        self.is_sounding = false;
        Ok(())
    }
}

/// For hosts without a speaker, or users without patience
pub struct Mute;

impl Sound for Mute {
    fn start(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }

    fn stop(&mut self) -> Result<(), Box<dyn Error>> {
        Ok(())
    }
}
