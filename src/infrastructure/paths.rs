//! Base directories
//!
//! `dirs` answers `None` when neither the XDG variable nor `$HOME` is usable.
//! In that case there is no sensible place to write, and callers get `None`
//! instead of a path relative to the working directory.

use std::path::PathBuf;

/// Application directory under `$XDG_CONFIG_HOME`, or `~/.config`
pub fn config_dir() -> Option<PathBuf> {
    resolve(dirs::config_dir(), dirs::home_dir(), ".config")
}

/// Application directory under `$XDG_DATA_HOME`, or `~/.local/share`
pub fn data_dir() -> Option<PathBuf> {
    resolve(dirs::data_dir(), dirs::home_dir(), ".local/share")
}

fn resolve(base: Option<PathBuf>, home: Option<PathBuf>, under_home: &str) -> Option<PathBuf> {
    base.or_else(|| home.map(|h| h.join(under_home)))
        .map(|dir| dir.join(super::config::APP_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_platform_dir() {
        assert_eq!(
            resolve(Some("/xdg".into()), Some("/home/u".into()), ".config"),
            Some(PathBuf::from("/xdg/voice-notes"))
        );
    }

    #[test]
    fn falls_back_to_home() {
        assert_eq!(
            resolve(None, Some("/home/u".into()), ".local/share"),
            Some(PathBuf::from("/home/u/.local/share/voice-notes"))
        );
    }

    #[test]
    fn nothing_without_home() {
        assert_eq!(resolve(None, None, ".config"), None);
    }
}
