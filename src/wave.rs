//! This is the namespace for all parts dealing with data in sampled waves.

/// Sample rate of every rendered tone.
pub const SAMPLE_RATE: u32 = 44100;

/// How individual samples are stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SampleFormat {
    /// 32 bit IEEE floating point.
    F32,
}

impl SampleFormat {
    pub fn bits_per_sample(self) -> u16 {
        match self {
            SampleFormat::F32 => 32,
        }
    }
}

/// Information about how audio is sampled.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SamplerInfo {
    /// Number of samples per second.
    pub sample_rate: u32,
    /// Number of interleaved channels.
    pub channels: u16,
    pub format: SampleFormat,
}

impl SamplerInfo {
    /// Mono 32 bit float at 44100 Hz.
    pub fn mono() -> Self {
        SamplerInfo {
            sample_rate: SAMPLE_RATE,
            channels: 1,
            format: SampleFormat::F32,
        }
    }

    /// Number of samples covering `duration` seconds, rounded to the nearest sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use note_tone::wave::SamplerInfo;
    ///
    /// assert_eq!(SamplerInfo::mono().sample_count(1.0), 44100);
    /// assert_eq!(SamplerInfo::mono().sample_count(0.1), 4410);
    /// assert_eq!(SamplerInfo::mono().sample_count(0.00001), 0);
    /// ```
    pub fn sample_count(&self, duration: f64) -> usize {
        (f64::from(self.sample_rate) * duration).round() as usize
    }
}

/// A finished, fully materialized piece of audio.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleBuffer {
    pub info: SamplerInfo,
    pub samples: Vec<f32>,
}

#[allow(clippy::len_without_is_empty)]
impl SampleBuffer {
    /// Narrow samples computed in double precision.
    pub fn from_f64(info: SamplerInfo, samples: &[f64]) -> Self {
        SampleBuffer {
            info,
            samples: samples.iter().map(|&x| x as f32).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Length of the audio in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.info.sample_rate) / f64::from(self.info.channels)
    }

    /// Largest absolute sample value, zero for an empty buffer.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, x| peak.max(x.abs()))
    }

    /// Copy the samples to little endian bytes.
    ///
    /// Returns the number of samples that were actually copied.
    /// Might be less than the number of input samples if the output buffer was not large enough.
    pub fn copy_bytes_to(&self, bytes: &mut [u8]) -> usize {
        let mut processed = 0;
        for (sample, target) in self.samples.iter().zip(bytes.chunks_exact_mut(4)) {
            target.copy_from_slice(&sample.to_le_bytes());
            processed += 1;
        }
        processed
    }

    pub fn byte_len(&self) -> usize {
        self.len() * std::mem::size_of::<f32>()
    }
}
