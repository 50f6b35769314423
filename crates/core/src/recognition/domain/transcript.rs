/// One recognized span of speech, with times in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Full recognition result for one audio file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn new(segments: Vec<TranscriptSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Plain text of the whole transcript.
    ///
    /// Segment texts are concatenated as the recognizer produced them
    /// (whisper includes its own inter-segment spacing), then trimmed.
    pub fn text(&self) -> String {
        let joined: String = self.segments.iter().map(|s| s.text.as_str()).collect();
        joined.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment(text: &str, start_time: f64, end_time: f64) -> TranscriptSegment {
        TranscriptSegment {
            text: text.to_string(),
            start_time,
            end_time,
        }
    }

    #[test]
    fn test_segment_duration() {
        let s = segment("你好", 2.0, 2.8);
        assert_relative_eq!(s.duration(), 0.8, epsilon = 0.001);
    }

    #[test]
    fn test_text_concatenates_segments() {
        let t = Transcript::new(vec![
            segment(" hello there,", 0.0, 1.2),
            segment(" how are you?", 1.2, 2.0),
        ]);
        assert_eq!(t.text(), "hello there, how are you?");
    }

    #[test]
    fn test_text_preserves_unspaced_scripts() {
        let t = Transcript::new(vec![segment("今天", 0.0, 0.5), segment("天气很好", 0.5, 1.5)]);
        assert_eq!(t.text(), "今天天气很好");
    }

    #[test]
    fn test_empty_transcript() {
        let t = Transcript::default();
        assert!(t.is_empty());
        assert_eq!(t.text(), "");
    }
}
