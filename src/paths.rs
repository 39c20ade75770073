//! XDG-style location of the configuration directory.
//!
//! `$XDG_CONFIG_HOME` is honored on every platform, so macOS users get
//! `~/.config/pivot` rather than `~/Library/Application Support`.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "pivot";

/// Returns `$XDG_CONFIG_HOME/pivot`, or `~/.config/pivot` when the variable is unset or empty.
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn with_xdg_config_home<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        // SAFETY: tests touching XDG_CONFIG_HOME are serialized
        unsafe {
            match value {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }

        f();

        // SAFETY: see above
        unsafe {
            match original {
                Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_default() {
        with_xdg_config_home(None, || {
            assert!(config_dir().unwrap().ends_with(".config/pivot"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_xdg_override() {
        with_xdg_config_home(Some("/custom/config"), || {
            assert_eq!(config_dir().unwrap(), PathBuf::from("/custom/config/pivot"));
        });
    }

    #[test]
    #[serial]
    fn test_config_dir_empty_xdg_is_ignored() {
        with_xdg_config_home(Some(""), || {
            assert!(config_dir().unwrap().ends_with(".config/pivot"));
        });
    }
}
