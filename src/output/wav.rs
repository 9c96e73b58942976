//! WAV encoding of rendered tones.

use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use hound::{WavSpec, WavWriter};
use log::debug;

use crate::error::{Error, Result};
use crate::wave::{SampleBuffer, SampleFormat, SamplerInfo};

impl From<SamplerInfo> for WavSpec {
    fn from(info: SamplerInfo) -> Self {
        let sample_format = match info.format {
            SampleFormat::F32 => hound::SampleFormat::Float,
        };
        WavSpec {
            channels: info.channels,
            sample_rate: info.sample_rate,
            bits_per_sample: info.format.bits_per_sample(),
            sample_format,
        }
    }
}

/// Write the samples as a WAV stream to any seekable writer.
pub fn write<W: Write + Seek>(writer: W, buffer: &SampleBuffer) -> Result<()> {
    let mut wav = WavWriter::new(writer, buffer.info.into()).map_err(encode_error)?;
    for &sample in buffer.samples() {
        wav.write_sample(sample).map_err(encode_error)?;
    }
    wav.finalize().map_err(encode_error)
}

/// Encode the samples as an in-memory WAV file.
///
/// # Examples
///
/// ```
/// use note_tone::config::ToneConfig;
/// use note_tone::output::wav;
///
/// let tone = note_tone::render::render(&ToneConfig::new("A4").with_duration(0.1)).unwrap();
/// let bytes = wav::encode(&tone.buffer).unwrap();
/// assert_eq!(&bytes[0..4], b"RIFF");
/// ```
pub fn encode(buffer: &SampleBuffer) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::with_capacity(buffer.byte_len() + 64));
    write(&mut cursor, buffer)?;
    Ok(cursor.into_inner())
}

/// Encode the samples into a WAV file at `path`.
pub fn write_file<P: AsRef<Path>>(path: P, buffer: &SampleBuffer) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| Error::Io { source })?;
    write(BufWriter::new(file), buffer)?;
    debug!("wrote {} samples to {}", buffer.len(), path.display());
    Ok(())
}

fn encode_error(source: hound::Error) -> Error {
    Error::Encode { source }
}
