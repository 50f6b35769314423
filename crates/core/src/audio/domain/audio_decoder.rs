use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;

/// Domain interface for decoding a media file's audio track.
pub trait AudioDecoder: Send {
    /// Decode the audio track to mono PCM at the given sample rate.
    fn decode(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, Box<dyn std::error::Error>>;
}
