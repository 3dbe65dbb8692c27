//! Highlight overlays for a rendered page.
//!
//! A viewer draws every match on the current page twice: the tight match box
//! as a highlight and the context window as a thin dashed outline. The match
//! the user picked is drawn in green, all others in yellow.

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::search::Match;
use serde::Serialize;

/// Dash pattern (on, off) for context window outlines, in pixels.
pub const CONTEXT_DASH: (u32, u32) = (2, 5);

/// How an overlay should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HighlightStyle {
    /// The match the user selected
    Selected,
    /// Any other match on the page
    Other,
}

impl HighlightStyle {
    /// RGB color with components in `0.0..=1.0`.
    pub fn color(self) -> [f32; 3] {
        match self {
            HighlightStyle::Selected => [0.0, 1.0, 0.0],
            HighlightStyle::Other => [1.0, 1.0, 0.0],
        }
    }

    /// Color name understood by common canvas toolkits.
    pub fn color_name(self) -> &'static str {
        match self {
            HighlightStyle::Selected => "green",
            HighlightStyle::Other => "yellow",
        }
    }

    /// Outline width in pixels.
    pub fn line_width(self) -> u32 {
        match self {
            HighlightStyle::Selected => 2,
            HighlightStyle::Other => 1,
        }
    }
}

/// Rectangles to draw for one match.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlay {
    /// Id of the match this overlay belongs to
    pub match_id: usize,
    /// Tight match box
    pub location: Rect,
    /// Context window box
    pub context_location: Rect,
    /// Drawing style
    pub style: HighlightStyle,
}

impl Overlay {
    /// Map both rectangles from page points to canvas pixels.
    pub fn scaled(&self, sx: f32, sy: f32) -> Self {
        Self {
            location: self.location.scale(sx, sy),
            context_location: self.context_location.scale(sx, sy),
            ..*self
        }
    }
}

fn check_dimensions(width: f32, height: f32) -> Result<()> {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimensions { width, height })
    }
}

/// Largest uniform scale at which the page fits the canvas.
///
/// # Examples
///
/// ```
/// use pdf_multisearch::highlight::fit_scale;
///
/// // A US Letter page on an 800x600 canvas is limited by its height.
/// let scale = fit_scale(612.0, 792.0, 800.0, 600.0).unwrap();
/// assert!((scale - 600.0 / 792.0).abs() < 1e-6);
/// ```
pub fn fit_scale(
    page_width: f32,
    page_height: f32,
    canvas_width: f32,
    canvas_height: f32,
) -> Result<f32> {
    check_dimensions(page_width, page_height)?;
    check_dimensions(canvas_width, canvas_height)?;
    Ok((canvas_width / page_width).min(canvas_height / page_height))
}

/// Per-axis scale of a page rendered to a `pixel_width` x `pixel_height` image.
///
/// Rendering rounds to whole pixels, so overlays should use this rather than
/// the requested [`fit_scale`] to stay aligned with the image.
pub fn pixel_scale(
    page_width: f32,
    page_height: f32,
    pixel_width: u32,
    pixel_height: u32,
) -> Result<(f32, f32)> {
    check_dimensions(page_width, page_height)?;
    check_dimensions(pixel_width as f32, pixel_height as f32)?;
    Ok((pixel_width as f32 / page_width, pixel_height as f32 / page_height))
}

/// Overlays for every match on `page_number`, in match order.
///
/// The match whose id equals `selected` gets [`HighlightStyle::Selected`].
pub fn page_overlays(
    matches: &[Match],
    page_number: usize,
    selected: Option<usize>,
) -> Vec<Overlay> {
    matches
        .iter()
        .filter(|m| m.page_number() == page_number)
        .map(|m| Overlay {
            match_id: m.match_id(),
            location: *m.location(),
            context_location: *m.context_location(),
            style: if Some(m.match_id()) == selected {
                HighlightStyle::Selected
            } else {
                HighlightStyle::Other
            },
        })
        .collect()
}
