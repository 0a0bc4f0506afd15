//! Shared control state
//!
//! The only state shared between tasks. Each field is an independent atomic
//! scalar: producers write with a single store after validating, readers
//! take a single load. Tearing between `mode` and `brightness` is fine,
//! a change simply shows up on the next frame that reads it.

use core::fmt;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::mode::MODE_COUNT;

/// Mode selected on cold boot
pub const DEFAULT_MODE: u8 = 0;

/// Ring brightness on cold boot
pub const DEFAULT_BRIGHTNESS: u8 = 50;

/// Rejected control input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlError {
    /// Mode id outside `0..MODE_COUNT`
    ModeOutOfRange(i32),
    /// Brightness outside `0..=255`
    BrightnessOutOfRange(i32),
    /// Parameter is not an integer
    InvalidNumber,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeOutOfRange(mode) => {
                write!(f, "mode {mode} is out of range 0..{MODE_COUNT}")
            }
            Self::BrightnessOutOfRange(brightness) => {
                write!(f, "brightness {brightness} is out of range 0..=255")
            }
            Self::InvalidNumber => f.write_str("value is not an integer"),
        }
    }
}

/// Current mode and brightness
#[derive(Debug)]
pub struct ControlState {
    mode: AtomicU8,
    brightness: AtomicU8,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlState {
    /// Create the cold-boot state (`mode 0`, `brightness 50`)
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(DEFAULT_MODE),
            brightness: AtomicU8::new(DEFAULT_BRIGHTNESS),
        }
    }

    pub fn mode(&self) -> u8 {
        self.mode.load(Ordering::Relaxed)
    }

    pub fn brightness(&self) -> u8 {
        self.brightness.load(Ordering::Relaxed)
    }

    /// Select a mode. Out-of-range ids leave the state unchanged.
    pub fn set_mode(&self, mode: u8) -> Result<(), ControlError> {
        if mode >= MODE_COUNT {
            return Err(ControlError::ModeOutOfRange(i32::from(mode)));
        }
        self.mode.store(mode, Ordering::Relaxed);
        Ok(())
    }

    /// Select a mode from an untrusted integer
    pub fn set_mode_raw(&self, mode: i32) -> Result<u8, ControlError> {
        let mode = u8::try_from(mode).map_err(|_| ControlError::ModeOutOfRange(mode))?;
        self.set_mode(mode)?;
        Ok(mode)
    }

    pub fn set_brightness(&self, brightness: u8) {
        self.brightness.store(brightness, Ordering::Relaxed);
    }

    /// Set brightness from an untrusted integer; out-of-range values are rejected
    pub fn set_brightness_raw(&self, brightness: i32) -> Result<u8, ControlError> {
        let value = u8::try_from(brightness)
            .map_err(|_| ControlError::BrightnessOutOfRange(brightness))?;
        self.set_brightness(value);
        Ok(value)
    }

    /// Advance to the next mode, wrapping to 0 after the last one
    pub fn next_mode(&self) -> u8 {
        let mode = self.mode();
        let next = if mode + 1 >= MODE_COUNT { 0 } else { mode + 1 };
        self.mode.store(next, Ordering::Relaxed);
        next
    }

    /// Go back one mode, wrapping to the last one before 0
    pub fn previous_mode(&self) -> u8 {
        let mode = self.mode();
        let previous = if mode == 0 || mode >= MODE_COUNT {
            MODE_COUNT - 1
        } else {
            mode - 1
        };
        self.mode.store(previous, Ordering::Relaxed);
        previous
    }

    /// Raise brightness by `step`, clamped to 255
    pub fn raise_brightness(&self, step: u8) -> u8 {
        let brightness = self.brightness().saturating_add(step);
        self.set_brightness(brightness);
        brightness
    }

    /// Lower brightness by `step`, clamped to 0
    pub fn lower_brightness(&self, step: u8) -> u8 {
        let brightness = self.brightness().saturating_sub(step);
        self.set_brightness(brightness);
        brightness
    }
}
