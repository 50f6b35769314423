use std::path::Path;

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::recognition::domain::speech_recognizer::SpeechRecognizer;
use crate::recognition::domain::transcript::{Transcript, TranscriptSegment};

/// Speech recognizer using whisper.cpp via whisper-rs.
///
/// Loading the ggml weights is the expensive step and happens once in
/// `new`; each `transcribe` call runs on a fresh inference state.
pub struct WhisperRecognizer {
    ctx: WhisperContext,
    language: String,
}

impl WhisperRecognizer {
    pub fn new(model_path: &Path, language: &str) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.exists() {
            return Err(format!("Whisper model not found at: {}", model_path.display()).into());
        }

        let ctx = WhisperContext::new_with_params(
            model_path.to_str().ok_or("Invalid model path")?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| format!("Failed to load Whisper model: {e}"))?;

        Ok(Self {
            ctx,
            language: language.to_string(),
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(&self, audio: &AudioSegment) -> Result<Transcript, Box<dyn std::error::Error>> {
        let mut state = self
            .ctx
            .create_state()
            .map_err(|e| format!("Failed to create Whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 0 });
        params.set_language(Some(&self.language));
        params.set_translate(false);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        params.set_n_threads(num_cpus().min(4) as i32);

        state
            .full(params, audio.samples())
            .map_err(|e| format!("Whisper inference failed: {e}"))?;

        let mut segments = Vec::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let text = match segment.to_str() {
                Ok(t) => t,
                Err(_) => continue,
            };
            if text.trim().is_empty() {
                continue;
            }

            // Segment timestamps are in centiseconds (10ms units)
            segments.push(TranscriptSegment {
                text: text.to_string(),
                start_time: segment.start_timestamp() as f64 / 100.0,
                end_time: segment.end_timestamp() as f64 / 100.0,
            });
        }

        Ok(Transcript::new(segments))
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognition::domain::model_tier::ModelTier;
    use crate::recognition::infrastructure::model_resolver;

    #[test]
    fn test_new_nonexistent_path_returns_error() {
        let result = WhisperRecognizer::new(Path::new("/nonexistent/model.bin"), "zh");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_nonexistent_path_error_message() {
        let result = WhisperRecognizer::new(Path::new("/nonexistent/model.bin"), "zh");
        let err = result.unwrap_err().to_string();
        assert!(
            err.contains("not found"),
            "Expected 'not found' in error, got: {err}"
        );
    }

    #[test]
    #[ignore] // Requires whisper model file (downloads on first run)
    fn test_transcribe_does_not_crash_on_sine_wave() {
        let model_path =
            model_resolver::resolve(ModelTier::Tiny, None, None).expect("Failed to resolve model");

        let recognizer =
            WhisperRecognizer::new(&model_path, "zh").expect("Failed to create recognizer");

        let sample_rate = 16000u32;
        let len = (3.0 * sample_rate as f64) as usize;
        let samples: Vec<f32> = (0..len)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                (2.0 * std::f64::consts::PI * 440.0 * t).sin() as f32
            })
            .collect();
        let audio = AudioSegment::new(samples, sample_rate);

        let result = recognizer.transcribe(&audio);
        assert!(result.is_ok(), "Transcription should not error: {result:?}");
    }
}
