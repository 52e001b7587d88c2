//! Marquee configuration types.

use std::str::FromStr;

/// Error type for configuration parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Direction string is not one of "left", "right", "up", "down"
    UnknownDirection { value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::UnknownDirection { value } => {
                write!(
                    f,
                    "Unknown direction {:?}: expected one of left, right, up, down",
                    value
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Scroll direction for the marquee.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Direction {
    /// Content travels toward the left edge
    #[default]
    Left,
    /// Content travels toward the right edge (mirror of `Left`)
    Right,
    /// Content travels toward the top edge
    Up,
    /// Content travels toward the bottom edge (mirror of `Up`)
    Down,
}

impl Direction {
    /// Whether this direction scrolls along the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Whether this direction is rendered by reversing the base animation.
    ///
    /// `Right` and `Down` are mirrors of `Left` and `Up`: the keyframe set
    /// stays the same and only the animation's play direction flips.
    #[inline]
    pub fn implies_reverse(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Lowercase name as used on stringly-typed surfaces.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => Err(ConfigError::UnknownDirection {
                value: other.to_string(),
            }),
        }
    }
}

/// Caller-supplied presentation overrides for one rendered node.
///
/// Everything here is forwarded to the output node: `class` is merged after
/// the generated classes so it wins utility conflicts, `styles` are merged
/// onto the generated inline styles with the caller winning on the same
/// property, and `attrs` are passed through verbatim (ARIA attributes,
/// data attributes, ids).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeOverrides {
    /// Extra class string merged after the generated classes
    pub class: Option<String>,
    /// Inline styles as (property, value) pairs
    pub styles: Vec<(String, String)>,
    /// Attributes forwarded verbatim
    pub attrs: Vec<(String, String)>,
}

impl NodeOverrides {
    /// Overrides consisting of a class string only.
    pub fn with_class(class: &str) -> Self {
        Self {
            class: Some(class.to_string()),
            styles: Vec::new(),
            attrs: Vec::new(),
        }
    }
}

/// Immutable per-render marquee configuration.
///
/// ## Example
///
/// ```rust
/// use marquee_view::{Direction, MarqueeConfig};
///
/// let mut config = MarqueeConfig::new();
/// config.direction = Direction::Down;
/// config.fade = true;
///
/// // `down` is the mirror of `up`, so the travel direction reverses.
/// assert!(config.effective_reverse());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarqueeConfig {
    /// Scroll direction
    pub direction: Direction,
    /// Flip the animation's travel direction independent of `direction`
    pub reverse: bool,
    /// Freeze the animation while the pointer is over the container
    pub pause_on_hover: bool,
    /// Apply a gradient transparency mask at both edges of the scroll axis
    pub fade: bool,
    /// Number of duplicated renderings of the content
    pub number_of_copies: usize,
    /// Overrides merged onto the outer container
    pub container: NodeOverrides,
    /// Overrides merged onto each copy wrapper
    pub wrapper: NodeOverrides,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            direction: Direction::Left,
            reverse: false,
            pause_on_hover: false,
            fade: false,
            number_of_copies: 2,
            container: NodeOverrides::default(),
            wrapper: NodeOverrides::default(),
        }
    }
}

impl MarqueeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective travel reversal: `reverse` OR a mirrored direction.
    #[inline]
    pub fn effective_reverse(&self) -> bool {
        self.reverse || self.direction.implies_reverse()
    }

    /// Number of copies rendered once the mount gate is ready.
    ///
    /// A copy count of zero cannot sustain the loop illusion; it is clamped
    /// to one and a warning is logged. The render never produces an empty
    /// track and never panics on a bad count.
    pub fn copy_count(&self) -> usize {
        if self.number_of_copies == 0 {
            log::warn!("marquee copy count of 0 clamped to 1");
            1
        } else {
            self.number_of_copies
        }
    }
}
