use crate::config::{GridConfig, Viewport};
use crate::core::Entry;

/// Text measurement supplied by the host's rendering context.
pub trait TextMetrics {
    /// Rendered width of `text` in pixels.
    fn text_width(&self, text: &str) -> f32;
    /// Height of one line of text in pixels.
    fn line_height(&self) -> f32;
}

/// [`TextMetrics`] for a monospace font: every character has the same advance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMetrics {
    /// Horizontal advance per character.
    pub advance: f32,
    /// Line height.
    pub line_height: f32,
}

impl Default for FixedAdvanceMetrics {
    fn default() -> Self {
        Self {
            advance: 7.0,
            line_height: 16.0,
        }
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}

/// Uniform size applied to every grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CellGeometry {
    /// Cell width.
    pub width: f32,
    /// Cell height.
    pub height: f32,
}

/// Computes [`CellGeometry`] from the labels of a set of entries.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellSizeCalculator {
    icon_size: f32,
    width_padding: f32,
    height_padding: f32,
}

impl CellSizeCalculator {
    /// Calculator using the icon size and paddings of `config`.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            icon_size: config.icon_size,
            width_padding: config.width_padding,
            height_padding: config.height_padding,
        }
    }

    /// Size needed to show the widest label of `entries` plus its icon.
    ///
    /// With nothing to measure the width falls back to the visible width of
    /// `viewport` (or stays 0 without one), so an empty grid still lays out.
    pub fn compute<'a, I>(
        &self,
        entries: I,
        metrics: &dyn TextMetrics,
        viewport: Option<&Viewport>,
    ) -> CellGeometry
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        let label_width = entries
            .into_iter()
            .map(|e| metrics.text_width(&e.display_name()))
            .fold(0.0f32, f32::max);

        let width = if label_width <= 0.0 {
            viewport.map(Viewport::visible_width).unwrap_or(0.0)
        } else {
            label_width + self.icon_size + self.width_padding
        };
        CellGeometry {
            width,
            height: metrics.line_height() + self.height_padding,
        }
    }
}
