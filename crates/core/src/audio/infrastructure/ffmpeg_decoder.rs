use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

use crate::audio::domain::audio_decoder::AudioDecoder;
use crate::audio::domain::audio_segment::AudioSegment;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to run decoder {decoder}: {source}")]
    Spawn {
        decoder: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("decoder exited with {status}: {detail}")]
    Decoder { status: ExitStatus, detail: String },
    #[error("decoder produced no audio samples for {path}")]
    NoSamples { path: PathBuf },
}

/// Decodes audio by invoking an external ffmpeg executable.
///
/// The executable location is explicit configuration; nothing is read
/// from ambient process state. An unusable location surfaces here as a
/// spawn or decoder error, not earlier.
pub struct FfmpegDecoder {
    ffmpeg_path: PathBuf,
}

impl FfmpegDecoder {
    pub fn new(ffmpeg_path: impl Into<PathBuf>) -> Self {
        Self {
            ffmpeg_path: ffmpeg_path.into(),
        }
    }

    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg_path
    }
}

impl AudioDecoder for FfmpegDecoder {
    fn decode(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, Box<dyn std::error::Error>> {
        let output = Command::new(&self.ffmpeg_path)
            .arg("-nostdin")
            .args(["-threads", "0"])
            .arg("-i")
            .arg(path)
            .args(["-f", "s16le", "-ac", "1", "-acodec", "pcm_s16le"])
            .args(["-ar", &target_sample_rate.to_string()])
            .arg("pipe:1")
            .output()
            .map_err(|source| DecodeError::Spawn {
                decoder: self.ffmpeg_path.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(DecodeError::Decoder {
                status: output.status,
                detail: stderr_tail(&output.stderr),
            }
            .into());
        }

        let samples = pcm_s16le_to_f32(&output.stdout);
        if samples.is_empty() {
            return Err(DecodeError::NoSamples {
                path: path.to_path_buf(),
            }
            .into());
        }

        Ok(AudioSegment::new(samples, target_sample_rate))
    }
}

/// Convert little-endian signed 16-bit PCM to normalized f32.
fn pcm_s16le_to_f32(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]) as f32 / 32768.0)
        .collect()
}

/// Last few non-blank lines of decoder stderr, enough to identify the failure.
fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(4);
    lines[start..].join("\n")
}
