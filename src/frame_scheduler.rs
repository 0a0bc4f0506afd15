//! Frame scheduling and timing utilities.
//!
//! Pacing follows the delay returned by each mode. `tick` is portable and
//! leaves the waiting to the caller; `run` does the waiting with an
//! `embassy-time` timer for use inside an executor task.

use embassy_time::{Duration, Instant, Timer};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{OutputDriver, Renderer};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Mode id the frame was rendered with.
    pub mode: u8,
}

/// Frame scheduler driving the renderer into an output sink.
///
/// This scheduler:
/// - Tracks frame deadlines with drift correction
/// - Calls the renderer and pushes brightness changes to the sink
/// - Flushes every frame and returns timing info
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver);
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     Timer::at(result.next_deadline).await;
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver> {
    output: O,
    renderer: Renderer<'a>,
    next_frame: Instant,
    last_delay: Duration,
    brightness: Option<u8>,
}

impl<'a, O: OutputDriver> FrameScheduler<'a, O> {
    pub fn new(renderer: Renderer<'a>, driver: O) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            last_delay: Duration::from_millis(0),
            brightness: None,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Falling more than two frames behind resets the schedule instead of
        // rendering the backlog in a burst
        let max_drift_ms = self.last_delay.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        let frame = self.renderer.render(now);

        if self.brightness != Some(frame.brightness) {
            #[cfg(feature = "esp32-log")]
            println!("[FrameScheduler] brightness -> {}", frame.brightness);
            self.output.set_brightness(frame.brightness);
            self.brightness = Some(frame.brightness);
        }
        self.output.write(frame.pixels);

        self.last_delay = frame.delay;
        self.next_frame += frame.delay;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            mode: frame.mode,
        }
    }

    /// Render forever, sleeping until each frame's deadline
    pub async fn run(&mut self) -> ! {
        loop {
            let result = self.tick(Instant::now());
            Timer::at(result.next_deadline).await;
        }
    }

    pub fn renderer(&self) -> &Renderer<'a> {
        &self.renderer
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
