//! Push-button producer
//!
//! Four active-low lines with pull-ups: idle reads high, a press pulls the
//! line low. Each falling edge is one action, after which the line ignores
//! further edges for a settle window.

use embassy_time::{Duration, Instant, Timer};
use embedded_hal::digital::InputPin;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::control::ControlState;

/// Button lines in pin order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    ModeUp,
    ModeDown,
    BrightnessUp,
    BrightnessDown,
}

impl Button {
    pub const ALL: [Self; 4] = [
        Self::ModeUp,
        Self::ModeDown,
        Self::BrightnessUp,
        Self::BrightnessDown,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModeUp => "mode_up",
            Self::ModeDown => "mode_down",
            Self::BrightnessUp => "brightness_up",
            Self::BrightnessDown => "brightness_down",
        }
    }
}

/// Configuration for the button handler
#[derive(Debug, Clone, Copy)]
pub struct ButtonConfig {
    /// Time between two reads of the lines
    pub poll_interval: Duration,
    /// Time a line ignores edges after a press
    pub settle: Duration,
    /// Brightness change per press
    pub brightness_step: u8,
}

impl ButtonConfig {
    pub const DEFAULT: Self = Self {
        poll_interval: Duration::from_millis(10),
        settle: Duration::from_millis(50),
        brightness_step: 10,
    };
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy)]
struct LineState {
    was_high: bool,
    settle_until: Instant,
}

/// Polls the four lines and applies presses to the control state
pub struct ButtonHandler<'a, P: InputPin> {
    control: &'a ControlState,
    config: ButtonConfig,
    pins: [P; 4],
    lines: [LineState; 4],
}

impl<'a, P: InputPin> ButtonHandler<'a, P> {
    /// Pins are given in [`Button::ALL`] order
    pub fn new(control: &'a ControlState, pins: [P; 4], config: ButtonConfig) -> Self {
        Self {
            control,
            config,
            pins,
            lines: [LineState {
                was_high: true,
                settle_until: Instant::from_millis(0),
            }; 4],
        }
    }

    /// Read every line once and apply the presses found
    ///
    /// Returns the buttons that fired, in pin order.
    pub fn poll(&mut self, now: Instant) -> Vec<Button, 4> {
        let mut pressed = Vec::new();
        for ((pin, line), button) in self
            .pins
            .iter_mut()
            .zip(self.lines.iter_mut())
            .zip(Button::ALL)
        {
            // A line that cannot be read counts as released
            let high = pin.is_high().unwrap_or(true);
            let falling = line.was_high && !high;
            line.was_high = high;

            if !falling || now < line.settle_until {
                continue;
            }
            line.settle_until = now + self.config.settle;
            // Capacity matches the number of lines
            let _ = pressed.push(button);
        }

        for &button in &pressed {
            self.apply(button);
        }
        pressed
    }

    fn apply(&self, button: Button) {
        let step = self.config.brightness_step;
        match button {
            Button::ModeUp => {
                let _mode = self.control.next_mode();
                #[cfg(feature = "esp32-log")]
                println!("[Buttons] {} -> mode {}", button.as_str(), _mode);
            }
            Button::ModeDown => {
                let _mode = self.control.previous_mode();
                #[cfg(feature = "esp32-log")]
                println!("[Buttons] {} -> mode {}", button.as_str(), _mode);
            }
            Button::BrightnessUp => {
                let _brightness = self.control.raise_brightness(step);
                #[cfg(feature = "esp32-log")]
                println!("[Buttons] {} -> brightness {}", button.as_str(), _brightness);
            }
            Button::BrightnessDown => {
                let _brightness = self.control.lower_brightness(step);
                #[cfg(feature = "esp32-log")]
                println!("[Buttons] {} -> brightness {}", button.as_str(), _brightness);
            }
        }
    }

    /// Poll forever at the configured interval
    pub async fn run(&mut self) -> ! {
        loop {
            self.poll(Instant::now());
            Timer::after(self.config.poll_interval).await;
        }
    }
}
