//! Visibility-driven presentation effects.
//!
//! Each behavior is a one-shot state machine per observed element:
//! `pending --intersects--> revealed`, terminal at `revealed`, with the
//! observation released on transition and on component teardown.

mod count_up;
mod typewriter;
mod visibility;

pub use count_up::{COUNT_UP_MS, ParsedStat, format_stat, parse_stat, run_count_up};
pub use typewriter::typewriter;
pub use visibility::once_visible;
