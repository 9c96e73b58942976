//! This namespace contains all the parts converting from a pitch to wave data.

pub mod envelope;
pub mod filter;
pub mod oscillator;
pub mod tuning;
