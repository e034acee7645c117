//! Scroll-triggered reveal and count-up animation logic
//!
//! Pure state machines with no browser dependency:
//! - `RevealTracker`: reveal-once visibility per element
//! - `CounterAnimation`: linear count-up to an exact target
//! - `RevealSchedule`: staggered delays for lists
//! - `SlideCycle`: auto-rotating showcase index
//! - `MotionConfig`: the timing constants shared by all of the above
//!
//! The reactive wrappers live in `crate::ui::motion`.

mod carousel;
pub mod config;
mod counter;
mod reveal;
mod stagger;

pub use carousel::SlideCycle;
pub use config::{
    DEFAULT_COUNTER_DURATION_MS, DEFAULT_COUNTER_TICK_MS, DEFAULT_REVEAL_THRESHOLD, MotionConfig,
    SECTION_REVEAL_THRESHOLD,
};
pub use counter::{Activation, CounterAnimation, CounterPhase, Tick};
pub use reveal::{IntersectionSample, RevealPhase, RevealTracker};
pub use stagger::{RevealOffset, RevealSchedule, delay_style, reveal_classes};
