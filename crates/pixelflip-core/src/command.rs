//! The discrete user intents the command surface can issue.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::session::SessionState;
use crate::transform::{MirrorAxis, RotateDirection, Transform};

/// Errors raised when parsing a command name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Load requires a locator")]
    MissingLocator,
}

/// Where a command is offered on the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandGroup {
    /// Standalone buttons: load and revert.
    Toolbar,
    /// The main menu: mirrors and rotations.
    Geometry,
    /// The image's own menu: color transforms.
    Color,
}

/// A user intent. These are the only operations exposed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Load the image at the given locator, replacing any current session.
    Load(String),
    /// Cancel all edits and show the original image again.
    Revert,
    MirrorHorizontal,
    MirrorVertical,
    RotateLeft,
    RotateRight,
    Invert,
    Greyscale,
}

impl Command {
    /// The transform this command applies, if it is a transform intent.
    pub fn transform(&self) -> Option<Transform> {
        match self {
            Command::MirrorHorizontal => Some(Transform::Mirror(MirrorAxis::Horizontal)),
            Command::MirrorVertical => Some(Transform::Mirror(MirrorAxis::Vertical)),
            Command::RotateLeft => Some(Transform::Rotate(RotateDirection::Left)),
            Command::RotateRight => Some(Transform::Rotate(RotateDirection::Right)),
            Command::Invert => Some(Transform::Invert),
            Command::Greyscale => Some(Transform::Greyscale),
            Command::Load(_) | Command::Revert => None,
        }
    }

    /// Whether the command should be offered in `state`.
    ///
    /// Load is always available; everything else needs a loaded image.
    pub fn is_enabled(&self, state: SessionState) -> bool {
        match self {
            Command::Load(_) => true,
            _ => state != SessionState::Empty,
        }
    }

    pub fn group(&self) -> CommandGroup {
        match self {
            Command::Load(_) | Command::Revert => CommandGroup::Toolbar,
            Command::MirrorHorizontal
            | Command::MirrorVertical
            | Command::RotateLeft
            | Command::RotateRight => CommandGroup::Geometry,
            Command::Invert | Command::Greyscale => CommandGroup::Color,
        }
    }

    /// Kebab-case name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Load(_) => "load",
            Command::Revert => "revert",
            Command::MirrorHorizontal => "mirror-horizontal",
            Command::MirrorVertical => "mirror-vertical",
            Command::RotateLeft => "rotate-left",
            Command::RotateRight => "rotate-right",
            Command::Invert => "invert",
            Command::Greyscale => "greyscale",
        }
    }
}

impl From<Transform> for Command {
    fn from(transform: Transform) -> Self {
        match transform {
            Transform::Mirror(MirrorAxis::Horizontal) => Command::MirrorHorizontal,
            Transform::Mirror(MirrorAxis::Vertical) => Command::MirrorVertical,
            Transform::Rotate(RotateDirection::Left) => Command::RotateLeft,
            Transform::Rotate(RotateDirection::Right) => Command::RotateRight,
            Transform::Invert => Command::Invert,
            Transform::Greyscale => Command::Greyscale,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Load(locator) => write!(f, "load:{}", locator),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    /// Parse a command name. Load takes its locator after a colon:
    /// `load:photos/cat.jpg`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(locator) = s.strip_prefix("load:") {
            if locator.is_empty() {
                return Err(CommandError::MissingLocator);
            }
            return Ok(Command::Load(locator.to_string()));
        }

        match s {
            "load" => Err(CommandError::MissingLocator),
            "revert" | "cancel" => Ok(Command::Revert),
            "mirror-horizontal" => Ok(Command::MirrorHorizontal),
            "mirror-vertical" => Ok(Command::MirrorVertical),
            "rotate-left" => Ok(Command::RotateLeft),
            "rotate-right" => Ok(Command::RotateRight),
            "invert" => Ok(Command::Invert),
            "greyscale" | "grayscale" => Ok(Command::Greyscale),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSFORM_COMMANDS: [Command; 6] = [
        Command::MirrorHorizontal,
        Command::MirrorVertical,
        Command::RotateLeft,
        Command::RotateRight,
        Command::Invert,
        Command::Greyscale,
    ];

    #[test]
    fn test_transform_mapping_round_trips() {
        for cmd in TRANSFORM_COMMANDS {
            let transform = cmd.transform().unwrap();
            assert_eq!(Command::from(transform), cmd);
        }
        assert_eq!(Command::Revert.transform(), None);
        assert_eq!(Command::Load("x".into()).transform(), None);
    }

    #[test]
    fn test_enabled_states() {
        let load = Command::Load("a.png".into());
        assert!(load.is_enabled(SessionState::Empty));
        assert!(load.is_enabled(SessionState::Edited));

        for cmd in TRANSFORM_COMMANDS.iter().chain([&Command::Revert]) {
            assert!(!cmd.is_enabled(SessionState::Empty), "{}", cmd);
            assert!(cmd.is_enabled(SessionState::Loaded), "{}", cmd);
            assert!(cmd.is_enabled(SessionState::Edited), "{}", cmd);
        }
    }

    #[test]
    fn test_groups() {
        let geometry: Vec<_> = TRANSFORM_COMMANDS
            .iter()
            .filter(|cmd| cmd.group() == CommandGroup::Geometry)
            .collect();
        assert_eq!(
            geometry,
            [
                &Command::MirrorHorizontal,
                &Command::MirrorVertical,
                &Command::RotateLeft,
                &Command::RotateRight
            ]
        );
        assert_eq!(Command::Invert.group(), CommandGroup::Color);
        assert_eq!(Command::Greyscale.group(), CommandGroup::Color);
        assert_eq!(Command::Revert.group(), CommandGroup::Toolbar);
        assert_eq!(Command::Load("a.png".into()).group(), CommandGroup::Toolbar);
    }

    #[test]
    fn test_parse_names() {
        for cmd in TRANSFORM_COMMANDS.iter().chain([&Command::Revert]) {
            assert_eq!(cmd.name().parse::<Command>().unwrap(), *cmd);
        }
        assert_eq!("cancel".parse::<Command>().unwrap(), Command::Revert);
        assert_eq!("grayscale".parse::<Command>().unwrap(), Command::Greyscale);
        assert_eq!(" invert \n".parse::<Command>().unwrap(), Command::Invert);
    }

    #[test]
    fn test_parse_load() {
        assert_eq!(
            "load:photos/cat.jpg".parse::<Command>().unwrap(),
            Command::Load("photos/cat.jpg".into())
        );
        assert_eq!("load".parse::<Command>(), Err(CommandError::MissingLocator));
        assert_eq!("load:".parse::<Command>(), Err(CommandError::MissingLocator));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "blur".parse::<Command>(),
            Err(CommandError::Unknown("blur".into()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::RotateLeft.to_string(), "rotate-left");
        assert_eq!(Command::Load("a.png".into()).to_string(), "load:a.png");
    }
}
