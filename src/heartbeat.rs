//! Status heartbeat on a single indicator pixel
//!
//! Connected: the pixel breathes `0 -> 255 -> 0` and moves to the next hue
//! partition every time the level returns to 0. Disconnected: red blink,
//! breathing phase discarded.

use core::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use embassy_time::{Duration, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::color::{BLACK, RED, Rgb, hsv};
use crate::gamma::gamma8;

/// "Is any client associated" signal
pub trait LinkStatus {
    fn is_connected(&self) -> bool;
}

impl LinkStatus for AtomicBool {
    fn is_connected(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Number of associated clients
impl LinkStatus for AtomicUsize {
    fn is_connected(&self) -> bool {
        self.load(Ordering::Relaxed) > 0
    }
}

impl<T: LinkStatus + ?Sized> LinkStatus for &T {
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}

/// Configuration for the heartbeat
#[derive(Debug, Clone, Copy)]
pub struct HeartbeatConfig {
    /// Red blink toggle period while disconnected
    pub blink_interval: Duration,
    /// Breathing step period while connected
    pub pulse_interval: Duration,
    /// Level change per breathing step
    pub level_step: u8,
    /// Number of hues the breathing cycles through
    pub partitions: u16,
}

impl HeartbeatConfig {
    pub const DEFAULT: Self = Self {
        blink_interval: Duration::from_millis(200),
        pulse_interval: Duration::from_millis(10),
        level_step: 3,
        partitions: 12,
    };

    /// Hue advance per completed breath
    #[allow(clippy::cast_possible_truncation)]
    pub const fn hue_step(&self) -> u8 {
        if self.partitions == 0 {
            return 0;
        }
        (256 / self.partitions) as u8
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One heartbeat output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeartbeatFrame {
    pub color: Rgb,
    pub delay: Duration,
}

/// Heartbeat state machine
#[derive(Debug, Clone)]
pub struct Heartbeat {
    config: HeartbeatConfig,
    connected: Option<bool>,
    blink_lit: bool,
    level: u8,
    rising: bool,
    hue: u8,
}

impl Heartbeat {
    pub const fn new(config: HeartbeatConfig) -> Self {
        Self {
            config,
            connected: None,
            blink_lit: false,
            level: 0,
            rising: true,
            hue: 0,
        }
    }

    /// Advance one iteration given the current connectivity
    pub fn step(&mut self, connected: bool) -> HeartbeatFrame {
        if self.connected != Some(connected) {
            #[cfg(feature = "esp32-log")]
            println!(
                "[Heartbeat] {}",
                if connected { "client connected" } else { "no client, blinking" }
            );
            self.connected = Some(connected);
            self.blink_lit = false;
        }

        if connected {
            self.breathe()
        } else {
            self.blink()
        }
    }

    fn blink(&mut self) -> HeartbeatFrame {
        self.level = 0;
        self.rising = true;
        self.blink_lit = !self.blink_lit;
        HeartbeatFrame {
            color: if self.blink_lit { RED } else { BLACK },
            delay: self.config.blink_interval,
        }
    }

    fn breathe(&mut self) -> HeartbeatFrame {
        let step = self.config.level_step;
        if self.rising {
            self.level = self.level.saturating_add(step);
            if self.level == u8::MAX {
                self.rising = false;
            }
        } else {
            self.level = self.level.saturating_sub(step);
            if self.level == 0 {
                self.rising = true;
                self.hue = self.hue.wrapping_add(self.config.hue_step());
            }
        }

        HeartbeatFrame {
            color: hsv(self.hue, 255, gamma8(self.level)),
            delay: self.config.pulse_interval,
        }
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    pub const fn level(&self) -> u8 {
        self.level
    }
}

impl Default for Heartbeat {
    fn default() -> Self {
        Self::new(HeartbeatConfig::DEFAULT)
    }
}

/// Heartbeat wired to a link signal and an indicator sink
pub struct StatusHeartbeat<O: OutputDriver, L: LinkStatus> {
    heartbeat: Heartbeat,
    output: O,
    link: L,
}

impl<O: OutputDriver, L: LinkStatus> StatusHeartbeat<O, L> {
    pub fn new(output: O, link: L, config: HeartbeatConfig) -> Self {
        Self {
            heartbeat: Heartbeat::new(config),
            output,
            link,
        }
    }

    /// Sample the link, write the pixel and return the delay before the next tick
    pub fn tick(&mut self) -> Duration {
        let frame = self.heartbeat.step(self.link.is_connected());
        self.output.write(&[frame.color]);
        frame.delay
    }

    pub async fn run(&mut self) -> ! {
        loop {
            let delay = self.tick();
            Timer::after(delay).await;
        }
    }

    pub fn heartbeat(&self) -> &Heartbeat {
        &self.heartbeat
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
