//! Easy interface for getting sound to play using a sox subprocess.
use std::io::{self, Write};
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};
use crate::wave::{SampleBuffer, SampleFormat, SamplerInfo};

/// The `play` invocation reading raw samples of the given layout from stdin.
pub fn play_command(info: SamplerInfo) -> Command {
    let sample_type = match info.format {
        SampleFormat::F32 => "f32",
    };
    let mut command = Command::new("play");
    command
        .arg("--channels")
        .arg(format!("{}", info.channels))
        .arg("--rate")
        .arg(format!("{}", info.sample_rate))
        .arg("--type")
        .arg(sample_type)
        .arg("/dev/stdin");
    command
}

/// Play the buffer on the default speakers.
pub fn play(buffer: &SampleBuffer) -> Result<()> {
    debug!("sending {} samples to sox", buffer.len());
    stream_to_player(buffer).map_err(|source| Error::Io { source })
}

fn stream_to_player(buffer: &SampleBuffer) -> io::Result<()> {
    let mut player = play_command(buffer.info).stdin(Stdio::piped()).spawn()?;

    let mut audio_stream = player
        .stdin
        .take()
        .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "sox has no stdin"))?;

    let mut bytes = vec![0u8; buffer.byte_len()];
    let n = buffer.copy_bytes_to(&mut bytes);
    debug_assert_eq!(n, buffer.len());
    let result = audio_stream.write_all(&bytes);

    drop(audio_stream);
    let status = player.wait()?;
    if !status.success() {
        return Err(io::Error::new(
            io::ErrorKind::Other,
            format!("sox exited with {}", status),
        ));
    }

    result
}
