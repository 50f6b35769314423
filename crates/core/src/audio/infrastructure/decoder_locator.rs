use std::path::{Path, PathBuf};

use crate::shared::constants::{DECODER_BUNDLE_DIR, FFMPEG_BINARY};

/// Path a bundled decoder would occupy under the given executable directory.
pub fn bundled_path(exe_dir: &Path) -> PathBuf {
    exe_dir.join(DECODER_BUNDLE_DIR).join(FFMPEG_BINARY)
}

/// Bundled decoder under `exe_dir`, if one is present.
pub fn locate(exe_dir: &Path) -> Option<PathBuf> {
    let path = bundled_path(exe_dir);
    path.exists().then_some(path)
}

/// Default decoder location for this process.
///
/// A decoder bundled next to the executable wins; otherwise the bare
/// command name is returned so the system search path applies. The
/// derivation uses the executable's own directory, never the caller's
/// working directory.
pub fn default_decoder() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(locate))
        .unwrap_or_else(|| PathBuf::from(FFMPEG_BINARY))
}
