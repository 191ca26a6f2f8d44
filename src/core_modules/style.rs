// THEORY:
// The `style` module owns the closed vocabulary of behavioural modes and the
// fixed mapping from each mode to how it is drawn. Modes are an enum so the
// mapping is an exhaustive `match`: adding a mode without a style does not
// compile. Labels from the data file arrive as free text and are only turned
// into a `Mode` here, which is the single place an unknown label can surface.

use std::fmt;
use std::str::FromStr;

/// Stroke width used when no configuration overrides it.
pub const DEFAULT_LINE_WIDTH: u32 = 2;

/// The known behavioural states of a trajectory sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Waggle,
    TurnLeft,
    TurnRight,
}

/// The way a line is stroked. Only solid lines are drawn today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Solid,
}

/// Resolved drawing style for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// RGB colour of the stroke.
    pub color: [u8; 3],
    pub line: LineKind,
    /// Stroke width in pixels.
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mode `{0}`")]
pub struct UnknownModeError(pub String);

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Waggle, Mode::TurnLeft, Mode::TurnRight];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Waggle => "waggle",
            Mode::TurnLeft => "turn_left",
            Mode::TurnRight => "turn_right",
        }
    }

    pub fn color(&self) -> [u8; 3] {
        match self {
            Mode::Waggle => [255, 0, 0],
            Mode::TurnLeft => [0, 128, 0],
            Mode::TurnRight => [0, 0, 255],
        }
    }

    pub fn style(&self) -> Style {
        self.style_with_width(DEFAULT_LINE_WIDTH)
    }

    pub fn style_with_width(&self, width: u32) -> Style {
        Style {
            color: self.color(),
            line: LineKind::Solid,
            width,
        }
    }
}

impl FromStr for Mode {
    type Err = UnknownModeError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "waggle" => Ok(Mode::Waggle),
            "turn_left" => Ok(Mode::TurnLeft),
            "turn_right" => Ok(Mode::TurnRight),
            other => Err(UnknownModeError(other.to_string())),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
