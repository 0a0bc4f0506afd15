//! Network command producer
//!
//! Transport-agnostic handler for the HTTP-style control interface:
//! `/set?mode=<int>&brightness=<int>` updates the control state and always
//! redirects to `/`, `/` reports the current state, anything else is not
//! found. The two parameters are validated and applied independently.

use core::fmt::Write;

use heapless::String;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::control::{ControlError, ControlState};
use crate::mode::ModeId;

/// Capacity of the status banner
pub const BANNER_CAPACITY: usize = 64;

/// Parameters of a `/set` request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetRequest<'q> {
    pub mode: Option<&'q str>,
    pub brightness: Option<&'q str>,
}

impl<'q> SetRequest<'q> {
    /// Extract `mode` and `brightness` from a query string; unknown keys are ignored
    pub fn parse(query: &'q str) -> Self {
        let mut request = Self::default();
        for pair in query.split('&') {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "mode" => request.mode = Some(value),
                "brightness" => request.brightness = Some(value),
                _ => {}
            }
        }
        request
    }
}

/// What a `/set` request did to each parameter; `None` when absent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetOutcome {
    pub mode: Option<Result<u8, ControlError>>,
    pub brightness: Option<Result<u8, ControlError>>,
}

/// Reply to hand back to the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Redirect to the given location
    Redirect(&'static str),
    /// 200 with a plain-text body
    Text(String<BANNER_CAPACITY>),
    NotFound,
}

fn parse_int(value: &str) -> Result<i32, ControlError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| ControlError::InvalidNumber)
}

/// Control endpoint bound to the shared state
pub struct CommandEndpoint<'a> {
    control: &'a ControlState,
}

impl<'a> CommandEndpoint<'a> {
    pub const fn new(control: &'a ControlState) -> Self {
        Self { control }
    }

    /// Validate and store each present parameter
    pub fn apply_set(&self, request: &SetRequest<'_>) -> SetOutcome {
        let mode = request
            .mode
            .map(|value| parse_int(value).and_then(|mode| self.control.set_mode_raw(mode)));
        let brightness = request.brightness.map(|value| {
            parse_int(value).and_then(|brightness| self.control.set_brightness_raw(brightness))
        });

        #[cfg(feature = "esp32-log")]
        {
            if let Some(Err(err)) = mode {
                println!("[Command] mode rejected: {}", err);
            }
            if let Some(Err(err)) = brightness {
                println!("[Command] brightness rejected: {}", err);
            }
        }

        SetOutcome { mode, brightness }
    }

    /// Route a request
    pub fn handle(&self, path: &str, query: &str) -> Response {
        match path {
            "/set" => {
                self.apply_set(&SetRequest::parse(query));
                Response::Redirect("/")
            }
            "/" => Response::Text(self.banner()),
            _ => Response::NotFound,
        }
    }

    /// Short status line, e.g. `mode 0 (rainbow_cycle), brightness 50`
    pub fn banner(&self) -> String<BANNER_CAPACITY> {
        let mode = self.control.mode();
        let name = ModeId::from_raw(mode).map_or("blank", ModeId::as_str);
        let mut banner = String::new();
        // Longest mode name fits the capacity
        let _ = write!(
            banner,
            "mode {} ({}), brightness {}",
            mode,
            name,
            self.control.brightness()
        );
        banner
    }
}
