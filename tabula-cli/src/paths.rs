//! Where the CLI keeps its log when `--log-file` is not given.

use std::path::PathBuf;

use directories::ProjectDirs;

const LOG_FILE_NAME: &str = "latest.log";

/// Per-user cache directory for tabula, e.g. `~/.cache/tabula` on Linux.
/// `None` when no home directory can be found.
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "tabula", "tabula").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default log file, overwritten on every run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_cache_dir() {
        if let (Some(cache), Some(log)) = (cache_dir(), log_file()) {
            assert_eq!(log.parent(), Some(cache.as_path()));
            assert!(log.ends_with(LOG_FILE_NAME));
        }
    }
}
