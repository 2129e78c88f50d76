use serde::{Deserialize, Serialize};

/// A plain width-by-height rectangle.
///
/// # Examples
///
/// ```rust
/// use cssel::shapes::Rectangle;
/// let r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
