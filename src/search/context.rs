//! Context window geometry.

use crate::config::SearchConfig;
use crate::geometry::Rect;

/// Compute the context window around a raw match rectangle.
///
/// Vertically the match is padded by `max(min_pad_y, height * pad_y_ratio)`
/// and the result clamped to `[0, page_height]`. Horizontally it is widened by
/// `context_margin_x` on both sides with no clamping, so the window may
/// extend past the page edges.
///
/// # Examples
///
/// ```
/// use pdf_multisearch::config::SearchConfig;
/// use pdf_multisearch::geometry::Rect;
/// use pdf_multisearch::search::context_window;
///
/// let location = Rect::new(20.0, 100.0, 60.0, 112.0);
/// let window = context_window(&location, 792.0, &SearchConfig::default());
///
/// assert_eq!(window, Rect::new(-30.0, 94.0, 110.0, 118.0));
/// ```
pub fn context_window(location: &Rect, page_height: f32, config: &SearchConfig) -> Rect {
    let pad_y = config
        .min_pad_y
        .max(location.height() * config.pad_y_ratio);
    let y0 = (location.y0 - pad_y).max(0.0);
    let y1 = (location.y1 + pad_y).min(page_height);

    Rect::new(
        location.x0 - config.context_margin_x,
        y0,
        location.x1 + config.context_margin_x,
        y1,
    )
}
