pub mod config;
pub mod error;
pub mod note;
pub mod output;
pub mod render;
pub mod synth;
pub mod wave;

pub use config::ToneConfig;
pub use error::{Error, Result};
pub use render::{render, RenderedTone};
