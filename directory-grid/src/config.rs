/// Icon edge length used when measuring cells.
pub const DEFAULT_ICON_SIZE: f32 = 16.0;
/// Extra horizontal space added to every measured cell.
pub const WIDTH_PADDING: f32 = 14.0;
/// Extra vertical space added to every measured cell.
pub const HEIGHT_PADDING: f32 = 5.0;

/// Grid configuration.
///
/// Examples
/// ```
/// use directory_grid::GridConfig;
/// let config = GridConfig::default().icon_size(24.0).multi_select(false);
/// assert_eq!(config.icon_size, 24.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// Icon size in pixels, added to the measured label width.
    pub icon_size: f32,
    /// Horizontal padding added to the measured label width.
    pub width_padding: f32,
    /// Vertical padding added to the label line height.
    pub height_padding: f32,
    /// Allow Ctrl/Shift click and drag to select more than one entry.
    pub allow_multi: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            width_padding: WIDTH_PADDING,
            height_padding: HEIGHT_PADDING,
            allow_multi: true,
        }
    }
}

impl GridConfig {
    /// Set the icon size.
    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }
    /// Set horizontal and vertical padding.
    pub fn padding(mut self, width: f32, height: f32) -> Self {
        self.width_padding = width;
        self.height_padding = height;
        self
    }
    /// Enable or disable multi selection.
    pub fn multi_select(mut self, yes: bool) -> Self {
        self.allow_multi = yes;
        self
    }
}

/// Border widths of the scrollable area hosting the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    /// Left border.
    pub left: f32,
    /// Right border.
    pub right: f32,
    /// Top border.
    pub top: f32,
    /// Bottom border.
    pub bottom: f32,
}

impl Insets {
    /// Same inset on every side.
    pub fn uniform(v: f32) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }
}

/// Scrollable viewport the grid is shown in.
///
/// Hosts pass this explicitly; the grid uses it to decide how many rows fit in
/// a column and as the cell width when there is nothing to measure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    /// Outer size of the viewport (width, height).
    pub size: [f32; 2],
    /// Viewport borders.
    pub insets: Insets,
}

impl Viewport {
    /// Viewport without borders.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: [width, height],
            insets: Insets::default(),
        }
    }

    /// Set the viewport borders.
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Width available to cells.
    pub fn visible_width(&self) -> f32 {
        (self.size[0] - self.insets.left - self.insets.right).max(0.0)
    }

    /// Height available to cells.
    pub fn visible_height(&self) -> f32 {
        (self.size[1] - self.insets.top - self.insets.bottom).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_width_subtracts_horizontal_insets() {
        let vp = Viewport::new(300.0, 200.0).with_insets(Insets {
            left: 2.0,
            right: 3.0,
            top: 1.0,
            bottom: 1.0,
        });
        assert_eq!(vp.visible_width(), 295.0);
        assert_eq!(vp.visible_height(), 198.0);
    }

    #[test]
    fn defaults_match_chooser_constants() {
        let c = GridConfig::default();
        assert_eq!(c.icon_size, 16.0);
        assert_eq!(c.width_padding, 14.0);
        assert_eq!(c.height_padding, 5.0);
    }
}
