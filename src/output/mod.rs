//! Handing rendered audio to the outside world.

pub mod sox;
pub mod wav;
