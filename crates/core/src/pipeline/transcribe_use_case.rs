use std::path::Path;

use crate::audio::domain::audio_decoder::AudioDecoder;
use crate::recognition::domain::speech_recognizer::SpeechRecognizer;
use crate::recognition::domain::transcript::Transcript;
use crate::shared::constants::WHISPER_SAMPLE_RATE;

/// Decode a media file's audio track and transcribe it to text.
pub struct TranscribeUseCase {
    decoder: Box<dyn AudioDecoder>,
    recognizer: Box<dyn SpeechRecognizer>,
}

impl TranscribeUseCase {
    pub fn new(decoder: Box<dyn AudioDecoder>, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self {
            decoder,
            recognizer,
        }
    }

    pub fn run(&self, source_path: &Path) -> Result<Transcript, Box<dyn std::error::Error>> {
        let audio = self.decoder.decode(source_path, WHISPER_SAMPLE_RATE)?;
        log::info!(
            "Decoded {:.1}s of audio from {}",
            audio.duration(),
            source_path.display()
        );

        let transcript = self.recognizer.transcribe(&audio)?;
        Ok(transcript)
    }
}
