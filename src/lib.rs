#![no_std]

pub mod button;
pub mod color;
pub mod command;
pub mod control;
pub mod frame_scheduler;
pub mod gamma;
pub mod heartbeat;
pub mod math8;
pub mod mode;
pub mod output;
pub mod random;
pub mod renderer;
pub mod ring;

pub use button::{Button, ButtonConfig, ButtonHandler};
pub use command::{CommandEndpoint, Response, SetOutcome, SetRequest};
pub use control::{ControlError, ControlState, DEFAULT_BRIGHTNESS, DEFAULT_MODE};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use heartbeat::{Heartbeat, HeartbeatConfig, HeartbeatFrame, LinkStatus, StatusHeartbeat};
pub use mode::{MODE_COUNT, ModeId, ModeRegistry};
pub use output::SmartLedsOutput;
pub use renderer::{RenderedFrame, Renderer, RendererConfig};
pub use ring::{NUM_LEDS, PixelBuffer, RING_LEDS};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Schedulers are generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Global brightness for subsequent writes, applied by the driver.
    ///
    /// Sinks without a brightness control ignore it.
    fn set_brightness(&mut self, _brightness: u8) {}
}
