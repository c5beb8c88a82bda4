//! Layout budget types.

use crate::error::{Error, Result};
use log::warn;
use serde::{Deserialize, Serialize};

/// Maximum characters a single virtual page may hold.
///
/// One budget entirely determines the page boundaries of a pagination run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutBudget {
    chars_per_page: usize,
}

impl LayoutBudget {
    /// Smallest budget a pagination run accepts.
    pub const MIN_CHARS_PER_PAGE: usize = 100;

    /// Create a budget, flooring it at [`LayoutBudget::MIN_CHARS_PER_PAGE`].
    ///
    /// A zero budget is refused.
    pub fn new(chars_per_page: usize) -> Result<Self> {
        if chars_per_page == 0 {
            return Err(Error::InvalidBudget(
                "chars_per_page must be positive".to_string(),
            ));
        }
        Ok(Self::floored(chars_per_page))
    }

    /// Derive a budget from viewport and font metrics.
    pub fn from_metrics(metrics: &LayoutMetrics) -> Result<Self> {
        Ok(Self::floored(metrics.chars_per_page()?))
    }

    fn floored(chars_per_page: usize) -> Self {
        if chars_per_page < Self::MIN_CHARS_PER_PAGE {
            warn!(
                "chars_per_page {} below minimum, using {}",
                chars_per_page,
                Self::MIN_CHARS_PER_PAGE
            );
        }
        Self {
            chars_per_page: chars_per_page.max(Self::MIN_CHARS_PER_PAGE),
        }
    }

    /// Re-check a budget that may not have come through [`LayoutBudget::new`],
    /// for example one deserialized from storage.
    pub fn validated(self) -> Result<Self> {
        Self::new(self.chars_per_page)
    }

    /// Characters per page.
    pub fn chars_per_page(&self) -> usize {
        self.chars_per_page
    }
}

impl Default for LayoutBudget {
    fn default() -> Self {
        Self {
            chars_per_page: 1500,
        }
    }
}

/// Viewport and font measurements used to derive a [`LayoutBudget`].
///
/// Measurements come from the presentation layer; nothing here measures text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Viewport width in pixels
    pub viewport_width: f32,

    /// Viewport height in pixels
    pub viewport_height: f32,

    /// Font size in pixels
    pub font_size: f32,

    /// Line height as a multiple of the font size
    pub line_height: f32,

    /// Average glyph width as a fraction of the font size
    pub char_width_ratio: f32,

    /// Fraction of the theoretical capacity actually filled
    pub fill_ratio: f32,

    /// Padding on each side of the viewport in pixels
    pub padding: f32,
}

impl LayoutMetrics {
    /// Create metrics for a viewport with default font settings.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..Self::default()
        }
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the line height multiplier.
    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the average glyph width ratio.
    pub fn with_char_width_ratio(mut self, ratio: f32) -> Self {
        self.char_width_ratio = ratio;
        self
    }

    /// Set the fill ratio.
    pub fn with_fill_ratio(mut self, ratio: f32) -> Self {
        self.fill_ratio = ratio;
        self
    }

    /// Set the viewport padding.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Characters that fit on one line.
    pub fn chars_per_line(&self) -> Result<usize> {
        self.validate()?;
        let usable = self.viewport_width - 2.0 * self.padding;
        Ok((usable / (self.font_size * self.char_width_ratio)).floor() as usize)
    }

    /// Lines that fit on one page.
    pub fn lines_per_page(&self) -> Result<usize> {
        self.validate()?;
        let usable = self.viewport_height - 2.0 * self.padding;
        Ok((usable / (self.font_size * self.line_height)).floor() as usize)
    }

    /// Raw character capacity before flooring.
    pub fn chars_per_page(&self) -> Result<usize> {
        let capacity = self
            .chars_per_line()?
            .checked_mul(self.lines_per_page()?)
            .ok_or_else(|| {
                Error::InvalidBudget(format!(
                    "viewport {}x{} is too large to measure",
                    self.viewport_width, self.viewport_height
                ))
            })?;
        Ok((capacity as f32 * self.fill_ratio).floor() as usize)
    }

    fn validate(&self) -> Result<()> {
        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("font_size", self.font_size),
            ("line_height", self.line_height),
            ("char_width_ratio", self.char_width_ratio),
            ("fill_ratio", self.fill_ratio),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidBudget(format!(
                    "{} must be a positive number, got {}",
                    name, value
                )));
            }
        }

        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(Error::InvalidBudget(format!(
                "padding must be non-negative, got {}",
                self.padding
            )));
        }
        if self.viewport_width <= 2.0 * self.padding || self.viewport_height <= 2.0 * self.padding
        {
            return Err(Error::InvalidBudget(
                "padding leaves no usable viewport area".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            viewport_height: 600.0,
            font_size: 16.0,
            line_height: 1.6,
            char_width_ratio: 0.5,
            fill_ratio: 0.9,
            padding: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_floor() {
        assert_eq!(LayoutBudget::new(1).unwrap().chars_per_page(), 100);
        assert_eq!(LayoutBudget::new(99).unwrap().chars_per_page(), 100);
        assert_eq!(LayoutBudget::new(2000).unwrap().chars_per_page(), 2000);
    }

    #[test]
    fn test_zero_budget_rejected() {
        assert!(matches!(LayoutBudget::new(0), Err(Error::InvalidBudget(_))));
    }

    #[test]
    fn test_budget_from_metrics() {
        // 800 / (16 * 0.5) = 100 chars per line, 640 / (16 * 2) = 20 lines
        let metrics = LayoutMetrics::new(800.0, 640.0)
            .with_font_size(16.0)
            .with_line_height(2.0)
            .with_fill_ratio(1.0);
        assert_eq!(metrics.chars_per_line().unwrap(), 100);
        assert_eq!(metrics.lines_per_page().unwrap(), 20);
        assert_eq!(
            LayoutBudget::from_metrics(&metrics).unwrap().chars_per_page(),
            2000
        );
    }

    #[test]
    fn test_larger_font_shrinks_budget() {
        let small = LayoutMetrics::new(800.0, 600.0).with_font_size(14.0);
        let large = LayoutMetrics::new(800.0, 600.0).with_font_size(24.0);
        let small = LayoutBudget::from_metrics(&small).unwrap();
        let large = LayoutBudget::from_metrics(&large).unwrap();
        assert!(large.chars_per_page() < small.chars_per_page());
    }

    #[test]
    fn test_tiny_viewport_is_floored() {
        let metrics = LayoutMetrics::new(40.0, 30.0).with_font_size(32.0);
        assert_eq!(
            LayoutBudget::from_metrics(&metrics).unwrap().chars_per_page(),
            LayoutBudget::MIN_CHARS_PER_PAGE
        );
    }

    #[test]
    fn test_huge_viewport_rejected() {
        let metrics = LayoutMetrics::new(1.0e30, 1.0e30);
        assert!(matches!(
            LayoutBudget::from_metrics(&metrics),
            Err(Error::InvalidBudget(_))
        ));
    }

    #[test]
    fn test_invalid_metrics_rejected() {
        let metrics = LayoutMetrics::new(800.0, 600.0).with_font_size(0.0);
        assert!(matches!(
            LayoutBudget::from_metrics(&metrics),
            Err(Error::InvalidBudget(_))
        ));

        let metrics = LayoutMetrics::new(f32::NAN, 600.0);
        assert!(LayoutBudget::from_metrics(&metrics).is_err());

        let metrics = LayoutMetrics::new(100.0, 600.0).with_padding(60.0);
        assert!(LayoutBudget::from_metrics(&metrics).is_err());
    }
}
