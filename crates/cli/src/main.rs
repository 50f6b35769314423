use std::path::PathBuf;
use std::process;

use clap::Parser;

use audioscribe_core::audio::domain::audio_decoder::AudioDecoder;
use audioscribe_core::audio::infrastructure::decoder_locator;
use audioscribe_core::audio::infrastructure::ffmpeg_decoder::FfmpegDecoder;
use audioscribe_core::pipeline::transcribe_use_case::TranscribeUseCase;
use audioscribe_core::recognition::domain::model_tier::ModelTier;
use audioscribe_core::recognition::domain::speech_recognizer::SpeechRecognizer;
use audioscribe_core::recognition::infrastructure::model_resolver;
use audioscribe_core::recognition::infrastructure::whisper_recognizer::WhisperRecognizer;
use audioscribe_core::shared::constants::{DEFAULT_LANGUAGE, DEFAULT_MODEL_TIER};

/// Speech-to-text transcription for audio and video files.
#[derive(Parser)]
#[command(name = "audioscribe")]
struct Cli {
    /// Input audio or video file.
    audio: Option<PathBuf>,

    /// Whisper model tier: tiny, base, small, medium, or large.
    #[arg(long, default_value = DEFAULT_MODEL_TIER)]
    model: String,

    /// Spoken language hint for the recognizer (e.g. zh, en).
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Decoder binary to use instead of the one bundled next to the
    /// executable (or, failing that, the system ffmpeg).
    #[arg(long)]
    ffmpeg: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let (audio_path, tier) = validate(&cli)?;

    let ffmpeg_path = cli
        .ffmpeg
        .clone()
        .unwrap_or_else(decoder_locator::default_decoder);
    log::info!("Using decoder at {}", ffmpeg_path.display());

    log::info!("Resolving model: {}", tier.file_name());
    let model_path = model_resolver::resolve(tier, None, Some(Box::new(download_progress)))?;
    eprintln!();

    let decoder: Box<dyn AudioDecoder> = Box::new(FfmpegDecoder::new(ffmpeg_path));
    let recognizer: Box<dyn SpeechRecognizer> =
        Box::new(WhisperRecognizer::new(&model_path, &cli.language)?);

    let use_case = TranscribeUseCase::new(decoder, recognizer);
    let transcript = use_case.run(audio_path)?;

    println!("{}", transcript.text());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(&PathBuf, ModelTier), Box<dyn std::error::Error>> {
    let audio_path = cli
        .audio
        .as_ref()
        .ok_or("please provide an audio file path")?;
    let tier = ModelTier::from_name(&cli.model).ok_or_else(|| {
        format!(
            "Model tier must be one of: tiny, base, small, medium, large, got '{}'",
            cli.model
        )
    })?;
    Ok((audio_path, tier))
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading speech model... {pct}%");
    } else {
        eprint!("\rDownloading speech model... {downloaded} bytes");
    }
}
