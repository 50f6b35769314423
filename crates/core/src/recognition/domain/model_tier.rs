use std::fmt;

/// Whisper model size tier. Larger tiers trade speed for accuracy.
///
/// All tiers map to the multilingual ggml weights; the `.en` variants
/// are useless with a non-English language hint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModelTier {
    Tiny,
    #[default]
    Base,
    Small,
    Medium,
    Large,
}

impl ModelTier {
    pub const ALL: [ModelTier; 5] = [
        ModelTier::Tiny,
        ModelTier::Base,
        ModelTier::Small,
        ModelTier::Medium,
        ModelTier::Large,
    ];

    /// Parse a tier name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tiny" => Some(Self::Tiny),
            "base" => Some(Self::Base),
            "small" => Some(Self::Small),
            "medium" => Some(Self::Medium),
            "large" => Some(Self::Large),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Base => "base",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn file_stem(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Base => "base",
            Self::Small => "small",
            Self::Medium => "medium",
            // Only versioned large weights are published
            Self::Large => "large-v3",
        }
    }

    /// File name of the ggml weights in the model cache.
    pub fn file_name(self) -> String {
        format!("ggml-{}.bin", self.file_stem())
    }

    /// Download URL for the ggml weights.
    pub fn url(self) -> String {
        format!(
            "https://huggingface.co/ggerganov/whisper.cpp/resolve/main/ggml-{}.bin",
            self.file_stem()
        )
    }
}

impl fmt::Display for ModelTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
