pub mod model_tier;
pub mod speech_recognizer;
pub mod transcript;
