/// Sample rate whisper models expect their input at.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const DEFAULT_MODEL_TIER: &str = "base";
pub const DEFAULT_LANGUAGE: &str = "zh";

/// Directory next to the executable that may hold a bundled decoder.
pub const DECODER_BUNDLE_DIR: &str = "ffmpeg";

pub const FFMPEG_BINARY: &str = if cfg!(windows) { "ffmpeg.exe" } else { "ffmpeg" };
