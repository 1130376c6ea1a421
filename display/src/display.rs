use sdl2::pixels::PixelFormatEnum;
use sdl2::render::WindowCanvas;

use chirp8_core::constants::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use chirp8_core::FrameBuffer;

const SCALE: usize = 10;

/// # Display
/// Renders 64x32 black/white frame buffer snapshots into an SDL2 window.
///
/// The interpreter owns the frame buffer; this type only ever sees by-value
/// snapshots handed to `render`, so it can never mutate machine state.
pub struct Display {
    canvas: WindowCanvas,
}

impl Display {
    /// Creates a window-backed display bound to an sdl2 context
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    pub fn new(sdl: &sdl2::Sdl) -> Result<Self, String> {
        let video = sdl.video()?;
        let window = video
            .window(
                "chirp8",
                (DISPLAY_WIDTH * SCALE) as u32,
                (DISPLAY_HEIGHT * SCALE) as u32,
            )
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        Ok(Display { canvas })
    }

    /// Formats a frame buffer for rendering as an SDL2 RGB24 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes representing
    /// concatenated rows of RGB pixels, so this:
    /// - flattens the 2D frame buffer by concatenating its rows
    /// - triplicates each cell into identical R, G, and B components
    /// - multiplies each value by 255 to convert lit/unlit to intensity
    ///
    /// # Arguments
    /// * `frame` a frame buffer snapshot
    fn frame_to_texture(frame: &FrameBuffer) -> Vec<u8> {
        frame
            .iter()
            .flat_map(|row| row.iter())
            .flat_map(|cell| std::iter::repeat(cell).take(3))
            .map(|cell| cell * 255)
            .collect()
    }

    /// Renders a frame buffer snapshot
    ///
    /// # Arguments
    /// * `frame` a frame buffer snapshot
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                DISPLAY_WIDTH as u32,
                DISPLAY_HEIGHT as u32,
            )
            .map_err(|e| e.to_string())?;

        texture
            .with_lock(None, |buffer: &mut [u8], _pitch: usize| {
                buffer.copy_from_slice(&Display::frame_to_texture(frame));
            })
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
