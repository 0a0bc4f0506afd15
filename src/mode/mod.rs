//! Mode system with compile-time known mode variants
//!
//! All modes are stored in an enum to avoid heap allocations.
//! Each mode implements the `Mode` trait and owns its persistent state,
//! which the [`ModeRegistry`] keeps alive (frozen) while another mode runs.

mod burst;
mod chase;
mod fill;
mod oscillator;
mod rainbow;
mod sparkle;
mod wave;
mod wipe;

use embassy_time::{Duration, Instant};

pub use burst::{BarGraph, Shockwave};
pub use chase::{
    BandSweep, BandValue, ColorBounce, LASER_SWEEP, OrbitingComets, RadialSurge,
    RunningLights, SONIC_SLICER, SPINNING_BAR, SweepStyle, TheatreChase,
};
pub use fill::{
    BassDrop, Blank, FlashWhite, FullThrottlePulse, RaveStrobe, SolidFill, ThunderPulse,
};
pub use oscillator::{Juggle, Sinelon};
pub use rainbow::RainbowCycle;
pub use sparkle::{FireflyDance, Sparkle, StrobeFade};
pub use wave::{EchoWaves, LiquidRipple, NeonGrid, PsychedelicSwirl};
pub use wipe::SideWipe;

use crate::{random::Random8, ring::PixelBuffer};

/// Number of selectable modes
pub const MODE_COUNT: u8 = 27;

/// Per-frame inputs handed to the active mode
pub struct Frame<'a> {
    /// Frame timestamp, drives the oscillators
    pub now: Instant,
    /// Control brightness snapshot, for modes that bake it into their colors
    pub brightness: u8,
    /// Set on the first frame after the mode was (re)selected
    pub just_entered: bool,
    /// Shared random generator
    pub rng: &'a mut Random8,
}

pub trait Mode {
    /// Render a single frame and return the delay before the next one
    fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration;
}

macro_rules! mode_ids {
    ($($variant:ident = $id:literal => $name:literal),* $(,)?) => {
        /// Known mode ids that can be requested.
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        #[repr(u8)]
        pub enum ModeId {
            $($variant = $id),*
        }

        impl ModeId {
            /// Every mode in catalogue order
            pub const ALL: [Self; MODE_COUNT as usize] = [$(Self::$variant),*];

            pub const fn from_raw(value: u8) -> Option<Self> {
                Some(match value {
                    $($id => Self::$variant,)*
                    _ => return None,
                })
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),*
                }
            }

            pub fn parse_from_str(s: &str) -> Option<Self> {
                match s {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

mode_ids! {
    RainbowCycle = 0 => "rainbow_cycle",
    SolidBlue = 1 => "solid_blue",
    FlashWhite = 2 => "flash_white",
    TheatreChase = 3 => "theatre_chase",
    SideWipe = 4 => "side_wipe",
    Sparkle = 5 => "sparkle",
    Sinelon = 6 => "sinelon",
    Juggle = 7 => "juggle",
    RunningLights = 8 => "running_lights",
    LaserSweep = 9 => "laser_sweep",
    StrobeFade = 10 => "strobe_fade",
    OrbitingComets = 11 => "orbiting_comets",
    ColorBounce = 12 => "color_bounce",
    PsychedelicSwirl = 13 => "psychedelic_swirl",
    NeonGrid = 14 => "neon_grid",
    EchoWaves = 15 => "echo_waves",
    FireflyDance = 16 => "firefly_dance",
    SpinningBar = 17 => "spinning_bar",
    LiquidRipple = 18 => "liquid_ripple",
    FullThrottlePulse = 19 => "full_throttle_pulse",
    RaveStrobe = 20 => "rave_strobe",
    ThunderPulse = 21 => "thunder_pulse",
    Shockwave = 22 => "shockwave",
    BassDrop = 23 => "bass_drop",
    BarGraph = 24 => "bar_graph",
    SonicSlicer = 25 => "sonic_slicer",
    RadialSurge = 26 => "radial_surge",
}

impl ModeId {
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Fresh state for this mode
    pub fn to_slot(self) -> ModeSlot {
        match self {
            Self::RainbowCycle => ModeSlot::Rainbow(RainbowCycle::new()),
            Self::SolidBlue => ModeSlot::Solid(SolidFill::default()),
            Self::FlashWhite => ModeSlot::Flash(FlashWhite::default()),
            Self::TheatreChase => ModeSlot::TheatreChase(TheatreChase::default()),
            Self::SideWipe => ModeSlot::SideWipe(SideWipe::new()),
            Self::Sparkle => ModeSlot::Sparkle(Sparkle),
            Self::Sinelon => ModeSlot::Sinelon(Sinelon::default()),
            Self::Juggle => ModeSlot::Juggle(Juggle::default()),
            Self::RunningLights => ModeSlot::RunningLights(RunningLights::default()),
            Self::LaserSweep => ModeSlot::Sweep(BandSweep::new(LASER_SWEEP)),
            Self::StrobeFade => ModeSlot::StrobeFade(StrobeFade::default()),
            Self::OrbitingComets => ModeSlot::OrbitingComets(OrbitingComets::default()),
            Self::ColorBounce => ModeSlot::ColorBounce(ColorBounce::default()),
            Self::PsychedelicSwirl => ModeSlot::PsychedelicSwirl(PsychedelicSwirl::default()),
            Self::NeonGrid => ModeSlot::NeonGrid(NeonGrid::default()),
            Self::EchoWaves => ModeSlot::EchoWaves(EchoWaves::default()),
            Self::FireflyDance => ModeSlot::FireflyDance(FireflyDance::default()),
            Self::SpinningBar => ModeSlot::Sweep(BandSweep::new(SPINNING_BAR)),
            Self::LiquidRipple => ModeSlot::LiquidRipple(LiquidRipple::default()),
            Self::FullThrottlePulse => {
                ModeSlot::FullThrottlePulse(FullThrottlePulse::default())
            }
            Self::RaveStrobe => ModeSlot::RaveStrobe(RaveStrobe::default()),
            Self::ThunderPulse => ModeSlot::ThunderPulse(ThunderPulse::default()),
            Self::Shockwave => ModeSlot::Shockwave(Shockwave::default()),
            Self::BassDrop => ModeSlot::BassDrop(BassDrop::default()),
            Self::BarGraph => ModeSlot::BarGraph(BarGraph::default()),
            Self::SonicSlicer => ModeSlot::Sweep(BandSweep::new(SONIC_SLICER)),
            Self::RadialSurge => ModeSlot::RadialSurge(RadialSurge::default()),
        }
    }
}

/// Mode slot - enum containing all possible modes
#[derive(Debug, Clone)]
pub enum ModeSlot {
    Rainbow(RainbowCycle),
    Solid(SolidFill),
    Flash(FlashWhite),
    TheatreChase(TheatreChase),
    SideWipe(SideWipe),
    Sparkle(Sparkle),
    Sinelon(Sinelon),
    Juggle(Juggle),
    RunningLights(RunningLights),
    /// Laser sweep, spinning bar and sonic slicer
    Sweep(BandSweep),
    StrobeFade(StrobeFade),
    OrbitingComets(OrbitingComets),
    ColorBounce(ColorBounce),
    PsychedelicSwirl(PsychedelicSwirl),
    NeonGrid(NeonGrid),
    EchoWaves(EchoWaves),
    FireflyDance(FireflyDance),
    LiquidRipple(LiquidRipple),
    FullThrottlePulse(FullThrottlePulse),
    RaveStrobe(RaveStrobe),
    ThunderPulse(ThunderPulse),
    Shockwave(Shockwave),
    BassDrop(BassDrop),
    BarGraph(BarGraph),
    RadialSurge(RadialSurge),
}

impl ModeSlot {
    /// Render the current mode
    pub fn render(&mut self, frame: &mut Frame<'_>, leds: &mut PixelBuffer) -> Duration {
        match self {
            Self::Rainbow(mode) => mode.render(frame, leds),
            Self::Solid(mode) => mode.render(frame, leds),
            Self::Flash(mode) => mode.render(frame, leds),
            Self::TheatreChase(mode) => mode.render(frame, leds),
            Self::SideWipe(mode) => mode.render(frame, leds),
            Self::Sparkle(mode) => mode.render(frame, leds),
            Self::Sinelon(mode) => mode.render(frame, leds),
            Self::Juggle(mode) => mode.render(frame, leds),
            Self::RunningLights(mode) => mode.render(frame, leds),
            Self::Sweep(mode) => mode.render(frame, leds),
            Self::StrobeFade(mode) => mode.render(frame, leds),
            Self::OrbitingComets(mode) => mode.render(frame, leds),
            Self::ColorBounce(mode) => mode.render(frame, leds),
            Self::PsychedelicSwirl(mode) => mode.render(frame, leds),
            Self::NeonGrid(mode) => mode.render(frame, leds),
            Self::EchoWaves(mode) => mode.render(frame, leds),
            Self::FireflyDance(mode) => mode.render(frame, leds),
            Self::LiquidRipple(mode) => mode.render(frame, leds),
            Self::FullThrottlePulse(mode) => mode.render(frame, leds),
            Self::RaveStrobe(mode) => mode.render(frame, leds),
            Self::ThunderPulse(mode) => mode.render(frame, leds),
            Self::Shockwave(mode) => mode.render(frame, leds),
            Self::BassDrop(mode) => mode.render(frame, leds),
            Self::BarGraph(mode) => mode.render(frame, leds),
            Self::RadialSurge(mode) => mode.render(frame, leds),
        }
    }
}

/// Catalogue of every mode's state, indexed by mode id
#[derive(Debug, Clone)]
pub struct ModeRegistry {
    slots: [ModeSlot; MODE_COUNT as usize],
}

impl Default for ModeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeRegistry {
    pub fn new() -> Self {
        Self {
            slots: ModeId::ALL.map(ModeId::to_slot),
        }
    }

    /// Render mode `id`; ids outside the catalogue render blank
    pub fn render(
        &mut self,
        id: u8,
        frame: &mut Frame<'_>,
        leds: &mut PixelBuffer,
    ) -> Duration {
        match self.slots.get_mut(usize::from(id)) {
            Some(slot) => slot.render(frame, leds),
            None => Blank.render(frame, leds),
        }
    }
}
