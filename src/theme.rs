use ratatui::style::Color;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

/// Color scheme preference, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Resolved terminal colors for the active theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Primary text.
    pub fg: Color,
    /// Secondary text, borders, hints.
    pub dim: Color,
    /// Headers and selected controls.
    pub accent: Color,
    /// Keybinding hints and warnings.
    pub key: Color,
    /// URLs.
    pub link: Color,
    /// Load-failure notices.
    pub alert: Color,
    pub highlight_bg: Color,
    pub highlight_fg: Color,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                fg: Color::White,
                dim: Color::DarkGray,
                accent: Color::Cyan,
                key: Color::Yellow,
                link: Color::Blue,
                alert: Color::Red,
                highlight_bg: Color::DarkGray,
                highlight_fg: Color::White,
            },
            Self::Light => Palette {
                fg: Color::Black,
                dim: Color::Gray,
                accent: Color::Blue,
                key: Color::Magenta,
                link: Color::Blue,
                alert: Color::Red,
                highlight_bg: Color::Gray,
                highlight_fg: Color::Black,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::Unrecognized(other.to_string())),
        }
    }
}

/// Errors from theme persistence.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("unrecognized theme: {0:?}")]
    Unrecognized(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// File-backed store holding the literal theme text (`light` or `dark`).
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store at the standard config location for this application.
    pub fn open() -> Result<Self, ThemeError> {
        let dirs = directories::ProjectDirs::from("com", "linkdirectory", "link-explorer")
            .ok_or(ThemeError::NoConfigDir)?;
        std::fs::create_dir_all(dirs.config_dir())?;
        Ok(Self {
            path: dirs.config_dir().join("theme"),
        })
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the saved theme. Absent or unreadable files yield the default
    /// (light), matching first-run behavior.
    pub fn load(&self) -> Theme {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|text| text.parse().ok())
            .unwrap_or_default()
    }

    /// Persist the theme as its literal text.
    pub fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        std::fs::write(&self.path, theme.label())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_between_variants() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
    }

    #[test]
    fn test_parse_literal_text() {
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" dark\n".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn test_load_defaults_to_light_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("theme"));
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("theme"));

        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);
        assert_eq!(
            std::fs::read_to_string(dir.path().join("theme")).unwrap(),
            "dark"
        );

        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_load_defaults_to_light_on_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme");
        std::fs::write(&path, "neon\n").unwrap();
        assert_eq!(ThemeStore::at(path).load(), Theme::Light);
    }
}
