//! Output sinks
//!
//! Adapts any `smart-leds` strip driver to [`OutputDriver`]. Global
//! brightness is applied here, at write time, so the render buffer keeps
//! the unscaled colors that decaying modes feed back into the next frame.

#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::{SmartLedsWrite, brightness};

use crate::{OutputDriver, color::Rgb};

/// [`OutputDriver`] over a `smart-leds` writer
pub struct SmartLedsOutput<W> {
    writer: W,
    brightness: u8,
}

impl<W> SmartLedsOutput<W> {
    /// Wrap a strip writer, starting at full brightness
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: 255,
        }
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Give the writer back
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    fn write(&mut self, colors: &[Rgb]) {
        let scaled = brightness(colors.iter().copied(), self.brightness);
        if self.writer.write(scaled).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput] strip write failed, frame dropped");
        }
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }
}
