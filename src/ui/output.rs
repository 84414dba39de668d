//! Output verbosity mode.

use std::str::FromStr;

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show all output including per-request details.
    Verbose,
    /// Show progress and status only.
    #[default]
    Normal,
    /// Show minimal output (spinners + final status).
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "verbose" => Ok(Self::Verbose),
            "normal" => Ok(Self::Normal),
            "quiet" => Ok(Self::Quiet),
            "silent" => Ok(Self::Silent),
            _ => Err(format!("unknown output mode: {}", s)),
        }
    }
}

impl OutputMode {
    /// Check if this mode shows verbose details.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows progress spinners.
    pub fn shows_spinners(&self) -> bool {
        matches!(self, Self::Verbose | Self::Normal | Self::Quiet)
    }

    /// Check if this mode shows status messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("verbose".parse::<OutputMode>(), Ok(OutputMode::Verbose));
        assert_eq!("Normal".parse::<OutputMode>(), Ok(OutputMode::Normal));
        assert_eq!("QUIET".parse::<OutputMode>(), Ok(OutputMode::Quiet));
        assert_eq!("silent".parse::<OutputMode>(), Ok(OutputMode::Silent));
    }

    #[test]
    fn rejects_unknown_mode() {
        assert!("loud".parse::<OutputMode>().is_err());
    }

    #[test]
    fn default_is_normal() {
        assert_eq!(OutputMode::default(), OutputMode::Normal);
    }

    #[test]
    fn silent_hides_status_and_spinners() {
        assert!(!OutputMode::Silent.shows_status());
        assert!(!OutputMode::Silent.shows_spinners());
    }

    #[test]
    fn verbose_shows_everything() {
        assert!(OutputMode::Verbose.shows_details());
        assert!(OutputMode::Verbose.shows_spinners());
        assert!(OutputMode::Verbose.shows_status());
    }

    #[test]
    fn quiet_keeps_spinners() {
        assert!(OutputMode::Quiet.shows_spinners());
        assert!(OutputMode::Quiet.shows_status());
        assert!(!OutputMode::Quiet.shows_details());
    }
}
