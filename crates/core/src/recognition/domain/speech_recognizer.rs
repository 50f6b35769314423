use crate::audio::domain::audio_segment::AudioSegment;
use crate::recognition::domain::transcript::Transcript;

/// Domain interface for speech-to-text transcription.
///
/// Implementations run inference on decoded audio and return the
/// recognized segments in order.
pub trait SpeechRecognizer: Send {
    fn transcribe(&self, audio: &AudioSegment) -> Result<Transcript, Box<dyn std::error::Error>>;
}
