use crate::error::{Result, StyleError};

use super::Color;

/// Stroke style for lines and curves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    width: f64,
    color: Color,
}

impl Style {
    /// Creates a new stroke style.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive and finite.
    pub fn new(width: f64, color: Color) -> Result<Self> {
        Ok(Self {
            width: validate_width(width)?,
            color,
        })
    }

    /// Built-in styles whose width is known to be valid.
    pub(crate) const fn preset(width: f64, color: Color) -> Self {
        Self { width, color }
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns half the stroke width.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        self.width * 0.5
    }

    /// Returns the stroke color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the stroke width, keeping the old one on invalid input.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive and finite.
    pub fn set_width(&mut self, width: f64) -> Result<()> {
        self.width = validate_width(width)?;
        Ok(())
    }

    /// Replaces the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::preset(2.0, Color::rgb(0xaa, 0x00, 0xaa))
    }
}

fn validate_width(width: f64) -> Result<f64> {
    if width <= 0.0 || !width.is_finite() {
        return Err(StyleError::InvalidWidth(width).into());
    }
    Ok(width)
}

/// Display style for drag handles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    /// Radius of the handle disc.
    pub radius: f64,
    /// Outline width; ignored when `fill` is set.
    pub width: f64,
    pub color: Color,
    pub fill: bool,
}

impl HandleStyle {
    /// A filled handle in the given color.
    #[must_use]
    pub fn filled(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

impl Default for HandleStyle {
    fn default() -> Self {
        Self {
            radius: 4.0,
            width: 0.0,
            color: Color::rgb(0xff, 0x00, 0x00),
            fill: true,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn new_with_valid_width() {
        let style = Style::new(2.0, Color::rgb(0, 0, 0)).unwrap();
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        assert!((style.half_width() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn new_with_zero_width_fails() {
        assert!(Style::new(0.0, Color::rgb(0, 0, 0)).is_err());
    }

    #[test]
    fn new_with_nan_width_fails() {
        assert!(Style::new(f64::NAN, Color::rgb(0, 0, 0)).is_err());
    }

    #[test]
    fn set_invalid_width_keeps_previous() {
        let mut style = Style::default();
        assert!(style.set_width(-1.0).is_err());
        assert!((style.width() - 2.0).abs() < f64::EPSILON);
        style.set_width(5.0).unwrap();
        assert!((style.width() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn filled_handle_keeps_defaults() {
        let h = HandleStyle::filled(Color::rgb(1, 2, 3));
        assert!(h.fill);
        assert!((h.radius - 4.0).abs() < f64::EPSILON);
        assert_eq!(h.color, Color::rgb(1, 2, 3));
    }
}
