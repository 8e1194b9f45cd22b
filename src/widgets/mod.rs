//! Self-contained widget state.
//!
//! Each widget owns its state and knows nothing about the others; the
//! terminal front-end renders whatever state a widget currently holds.

mod dice;
mod holiday;
mod shove_box;

pub use dice::{roll, DiceOutcome, TwoDice, DIE_FACES};
pub use holiday::{CycleHoliday, Holiday};
pub use shove_box::{ShoveBox, ShoveSettings};
