//! Plain geometric value objects.
//!
//! [`Rectangle`] is a permissive value object: it stores whatever numbers it
//! is given (negative, zero, infinite, NaN) and computes its area on demand.

use objects_json::{Arguments, JsonError, Reconstruct};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
///
/// ```
/// use objects_shapes::Rectangle;
///
/// let mut r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.area(), 200.0);
///
/// r.width = 3.0;
/// assert_eq!(r.area(), 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle. No range checks are made.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`, evaluated from the current field values.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Rebuilt positionally as `(width, height)`, matching the serialized field order.
impl Reconstruct for Rectangle {
    fn reconstruct(args: &mut Arguments) -> Result<Self, JsonError> {
        let width = args.take()?;
        let height = args.take()?;
        Ok(Self::new(width, height))
    }
}
