//! Sandbox path handling.
//!
//! In Zellij's plugin environment `/host` points to the cwd of the last
//! focused terminal, or the folder Zellij was started from. When Zellij is
//! launched from a home directory that is `~`.

use std::path::PathBuf;

/// Sandbox mount point of the host filesystem.
const HOST_ROOT: &str = "/host";

/// Directory holding the trace file and any user-provided data.
///
/// ```
/// use musicianhub::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/musicianhub")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij").join("musicianhub")
}

/// Rewrites `~` and `~/...` to their `/host` equivalents.
///
/// ```
/// use musicianhub::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/music/seed.json"), "/host/music/seed.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/seed.json"), "/data/seed.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path == "~" {
        HOST_ROOT.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{HOST_ROOT}/{rest}")
    } else {
        path.to_string()
    }
}

/// Resolves a path from the plugin configuration to a sandbox path.
///
/// Tilde paths are expanded, relative paths are taken relative to `/host`,
/// and absolute paths are used as given.
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let expanded = PathBuf::from(expand_tilde(path.trim()));
    if expanded.is_absolute() {
        expanded
    } else {
        PathBuf::from(HOST_ROOT).join(expanded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_at_the_start() {
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("a/~/b"), "a/~/b");
    }

    #[test]
    fn relative_config_paths_live_under_host() {
        assert_eq!(resolve_host_path("artists.json"), PathBuf::from("/host/artists.json"));
        assert_eq!(resolve_host_path(" ~/a.json "), PathBuf::from("/host/a.json"));
        assert_eq!(resolve_host_path("/etc/a.json"), PathBuf::from("/etc/a.json"));
    }
}
