use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb};
use crate::control::ControlState;
use crate::mode::{Frame, ModeId, ModeRegistry};
use crate::random::{DEFAULT_SEED, Random8};
use crate::ring::{NUM_LEDS, PixelBuffer};

/// Configuration for the renderer
#[derive(Debug, Clone, Copy)]
pub struct RendererConfig {
    /// Seed of the shared random generator
    pub seed: u16,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
        }
    }
}

/// One rendered frame, ready to be flushed
#[derive(Debug, Clone, Copy)]
pub struct RenderedFrame<'f> {
    /// Unscaled pixel colors for both rings
    pub pixels: &'f [Rgb],
    /// Brightness to apply when writing
    pub brightness: u8,
    /// Mode-requested delay before the next frame
    pub delay: Duration,
    /// Mode id this frame was rendered with
    pub mode: u8,
}

/// Render loop step - the main orchestrator
///
/// Reads the control state once per frame, runs the selected mode against
/// the persistent pixel buffer and reports the mode's pacing.
pub struct Renderer<'a> {
    control: &'a ControlState,
    registry: ModeRegistry,
    rng: Random8,
    buffer: PixelBuffer,
    previous_mode: Option<u8>,
}

impl<'a> Renderer<'a> {
    pub fn new(control: &'a ControlState, config: &RendererConfig) -> Self {
        Self {
            control,
            registry: ModeRegistry::new(),
            rng: Random8::new(config.seed),
            buffer: [BLACK; NUM_LEDS],
            previous_mode: None,
        }
    }

    /// Process one frame
    ///
    /// Mode and brightness are sampled once at the start, so a change made
    /// mid-frame shows up on the next call.
    pub fn render(&mut self, now: Instant) -> RenderedFrame<'_> {
        let mode = self.control.mode();
        let brightness = self.control.brightness();
        let just_entered = self.previous_mode != Some(mode);

        if just_entered {
            #[cfg(feature = "esp32-log")]
            match ModeId::from_raw(mode) {
                Some(id) => println!("[Renderer] mode -> {} ({})", mode, id.as_str()),
                None => println!("[Renderer] unknown mode {}, rendering blank", mode),
            }
            self.previous_mode = Some(mode);
        }

        let mut frame = Frame {
            now,
            brightness,
            just_entered,
            rng: &mut self.rng,
        };
        let delay = self.registry.render(mode, &mut frame, &mut self.buffer);

        RenderedFrame {
            pixels: &self.buffer,
            brightness,
            delay,
            mode,
        }
    }

    /// Mode of the last rendered frame
    pub fn current_mode(&self) -> Option<ModeId> {
        self.previous_mode.and_then(ModeId::from_raw)
    }

    /// Pixels of the last rendered frame
    pub fn pixels(&self) -> &[Rgb] {
        &self.buffer
    }
}
