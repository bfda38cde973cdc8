//! Screen registry: named breakpoints with optional min/max widths.
//!
//! [`ScreenRegistry`] always holds the synthetic [`DEFAULT_SCREEN`], which has
//! no bounds and is never wrapped in a media query. [`Width`] keeps the
//! configured length so it can be rendered back verbatim, while its numeric
//! part drives breakpoint ordering.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

/// Name of the implicit, unconstrained screen.
pub const DEFAULT_SCREEN: &str = "default";

/// Errors from screen registration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScreenError {
    #[error("invalid screen: name must not be empty")]
    InvalidScreen,
    #[error("invalid width `{0}`")]
    InvalidWidth(String),
}

// ---------------------------------------------------------------------------
// Width
// ---------------------------------------------------------------------------

/// A breakpoint width such as `600px`, `48em` or a bare `1200`.
///
/// Renders the number exactly as it was written; `value` is only used for
/// ordering.
#[derive(Debug, Clone, PartialEq)]
pub struct Width {
    pub value: f64,
    number: String,
    /// Unit suffix as written (`"px"`, `"em"`), empty for bare numbers.
    pub unit: String,
}

impl Width {
    /// A width in pixels.
    pub fn px(value: f64) -> Self {
        Self::with_unit(value, "px")
    }

    /// A unitless width, rendered as the bare number.
    pub fn bare(value: f64) -> Self {
        Self::with_unit(value, "")
    }

    fn with_unit(value: f64, unit: &str) -> Self {
        Self {
            value,
            number: number_text(value),
            unit: unit.to_owned(),
        }
    }

    /// The numeric part as it renders, e.g. `"37.5"`.
    pub fn number(&self) -> &str {
        &self.number
    }
}

/// Whole numbers render without a fractional part (`600`, not `600.0`).
fn number_text(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

impl FromStr for Width {
    type Err = ScreenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);
        let value: f64 = number
            .parse()
            .map_err(|_| ScreenError::InvalidWidth(s.to_owned()))?;
        if !value.is_finite() || !unit.chars().all(|c| c.is_ascii_alphabetic() || c == '%') {
            return Err(ScreenError::InvalidWidth(s.to_owned()));
        }
        Ok(Self {
            value,
            number: number.to_owned(),
            unit: unit.to_owned(),
        })
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.number, self.unit)
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A named responsive breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub name: String,
    pub min: Option<Width>,
    pub max: Option<Width>,
}

impl Screen {
    /// Create an unbounded screen.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min: None,
            max: None,
        }
    }

    /// Set the minimum width (builder).
    pub fn with_min(mut self, min: Width) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum width (builder).
    pub fn with_max(mut self, max: Width) -> Self {
        self.max = Some(max);
        self
    }

    /// Whether this is the synthetic default screen.
    pub fn is_default(&self) -> bool {
        self.name == DEFAULT_SCREEN
    }

    /// The width used for ordering. The default screen always sorts as 0.
    pub fn sort_width(&self) -> f64 {
        if self.is_default() {
            return 0.0;
        }
        self.min.as_ref().map_or(0.0, |w| w.value)
    }

    /// The media query prelude for this screen, e.g.
    /// `@media (min-width: 600px) and (max-width: 1199px)`.
    ///
    /// Returns `None` for the default screen and for screens without bounds.
    pub fn media_query(&self) -> Option<String> {
        if self.is_default() {
            return None;
        }
        let conditions: Vec<String> = [("min-width", &self.min), ("max-width", &self.max)]
            .into_iter()
            .filter_map(|(feature, width)| {
                width.as_ref().map(|w| format!("({feature}: {w})"))
            })
            .collect();
        if conditions.is_empty() {
            None
        } else {
            Some(format!("@media {}", conditions.join(" and ")))
        }
    }
}

// ---------------------------------------------------------------------------
// ScreenRegistry
// ---------------------------------------------------------------------------

/// Registered screens in registration order.
#[derive(Debug, Clone)]
pub struct ScreenRegistry {
    screens: Vec<Screen>,
}

impl ScreenRegistry {
    /// Create a registry holding only the default screen.
    pub fn new() -> Self {
        Self {
            screens: vec![Screen::new(DEFAULT_SCREEN)],
        }
    }

    /// Store or replace a screen's bounds.
    ///
    /// Re-registering keeps the screen's original registration position.
    pub fn register(&mut self, screen: Screen) -> Result<(), ScreenError> {
        if screen.name.is_empty() {
            return Err(ScreenError::InvalidScreen);
        }
        debug!(screen = %screen.name, min = ?screen.min, max = ?screen.max, "register screen");
        match self.screens.iter_mut().find(|s| s.name == screen.name) {
            Some(existing) => {
                existing.min = screen.min;
                existing.max = screen.max;
            }
            None => self.screens.push(screen),
        }
        Ok(())
    }

    /// Register a screen from textual bounds, e.g. `("tablet", Some("600px"), None)`.
    pub fn register_bounds(
        &mut self,
        name: &str,
        min: Option<&str>,
        max: Option<&str>,
    ) -> Result<(), ScreenError> {
        if name.is_empty() {
            return Err(ScreenError::InvalidScreen);
        }
        let mut screen = Screen::new(name);
        screen.min = min.map(str::parse::<Width>).transpose()?;
        screen.max = max.map(str::parse::<Width>).transpose()?;
        self.register(screen)
    }

    /// Look up a screen by name.
    pub fn get(&self, name: &str) -> Option<&Screen> {
        self.screens.iter().find(|s| s.name == name)
    }

    /// Whether a screen with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Screens ordered by minimum width, default first, ties in registration order.
    pub fn sorted(&self) -> Vec<&Screen> {
        let mut sorted: Vec<&Screen> = self.screens.iter().collect();
        // The default screen is pinned first even against negative widths.
        sorted.sort_by(|a, b| match (a.is_default(), b.is_default()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => a.sort_width().total_cmp(&b.sort_width()),
        });
        sorted
    }

    /// Screen names in sort order. Each call yields a fresh sequence.
    pub fn sorted_names(&self) -> Vec<&str> {
        self.sorted().into_iter().map(|s| s.name.as_str()).collect()
    }

    /// Number of registered screens, including the default.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Always `false`: the default screen is always present.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }
}

impl Default for ScreenRegistry {
    fn default() -> Self {
        Self::new()
    }
}
