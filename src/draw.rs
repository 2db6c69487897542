//! Raster drawing primitives on an opaque RGB canvas
//!
//! Every shape takes an inclusive pixel bounding box, is clipped to the canvas
//! and is drawn without anti-aliasing. A pixel belongs to a curved shape when
//! its centre does.

use image::{Rgb, RgbImage};

pub type Color = Rgb<u8>;

/// Inclusive pixel bounding box `[x0, y0, x1, y1]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x0: i64,
    pub y0: i64,
    pub x1: i64,
    pub y1: i64,
}

impl BoundingBox {
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Box spanning `extent` pixels right and down from `(x, y)`, corners included.
    pub fn square(x: i64, y: i64, extent: i64) -> Self {
        Self::new(x, y, x + extent, y + extent)
    }

    pub fn width(&self) -> i64 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i64 {
        self.y1 - self.y0 + 1
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// The pixel closest to the geometric centre of the box
    pub fn center(&self) -> (i64, i64) {
        ((self.x0 + self.x1 + 1) / 2, (self.y0 + self.y1 + 1) / 2)
    }
}

/// Visit every canvas pixel inside `bbox` and paint the color `paint` returns, if any.
fn paint_clipped<F>(canvas: &mut RgbImage, bbox: BoundingBox, mut paint: F)
where
    F: FnMut(i64, i64) -> Option<Color>,
{
    if bbox.is_empty() {
        return;
    }

    let width = i64::from(canvas.width());
    let height = i64::from(canvas.height());
    let (x_start, x_end) = (bbox.x0.max(0), bbox.x1.min(width - 1));
    let (y_start, y_end) = (bbox.y0.max(0), bbox.y1.min(height - 1));

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            if let Some(color) = paint(x, y) {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Fill the whole canvas with a top-to-bottom gradient.
///
/// Row `y` of a canvas `h` rows high gets `top + (y / h) * (bottom - top)` per
/// channel, truncated toward zero. The last row approaches `bottom` without
/// reaching it.
pub fn fill_vertical_gradient(canvas: &mut RgbImage, top: Color, bottom: Color) {
    let height = canvas.height();

    for y in 0..height {
        let t = f64::from(y) / f64::from(height);
        let row_color = Rgb(std::array::from_fn(|c| lerp_channel(top[c], bottom[c], t)));

        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, row_color);
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = f64::from(from);
    (from + t * (f64::from(to) - from)) as u8
}

/// Draw an axis-aligned rectangle with an optional fill and an optional 1px outline.
pub fn draw_rectangle(
    canvas: &mut RgbImage,
    bbox: BoundingBox,
    fill: Option<Color>,
    outline: Option<Color>,
) {
    paint_clipped(canvas, bbox, |x, y| {
        let on_border = x == bbox.x0 || x == bbox.x1 || y == bbox.y0 || y == bbox.y1;
        match outline {
            Some(color) if on_border => Some(color),
            _ => fill,
        }
    });
}

/// Draw a filled rectangle with circular corners.
///
/// The radius is clamped to half the shorter side; a radius of 0 draws a plain rectangle.
pub fn draw_rounded_rectangle(canvas: &mut RgbImage, bbox: BoundingBox, radius: u32, fill: Color) {
    let radius = f64::from(radius)
        .min(bbox.width() as f64 / 2.0)
        .min(bbox.height() as f64 / 2.0);

    let (left, top) = (bbox.x0 as f64, bbox.y0 as f64);
    let (right, bottom) = ((bbox.x1 + 1) as f64, (bbox.y1 + 1) as f64);

    paint_clipped(canvas, bbox, |x, y| {
        let px = x as f64 + 0.5;
        let py = y as f64 + 0.5;

        // Centre of the corner arc this pixel falls under, if any
        let corner_x = if px < left + radius {
            left + radius
        } else if px > right - radius {
            right - radius
        } else {
            return Some(fill);
        };
        let corner_y = if py < top + radius {
            top + radius
        } else if py > bottom - radius {
            bottom - radius
        } else {
            return Some(fill);
        };

        let (dx, dy) = (px - corner_x, py - corner_y);
        (dx * dx + dy * dy <= radius * radius).then_some(fill)
    });
}

/// Draw the ellipse inscribed in `bbox`.
///
/// With an outline, the outer `width` pixels of the ellipse get the outline
/// color and the rest gets the fill.
pub fn draw_ellipse(
    canvas: &mut RgbImage,
    bbox: BoundingBox,
    fill: Option<Color>,
    outline: Option<Color>,
    width: u32,
) {
    let rx = bbox.width() as f64 / 2.0;
    let ry = bbox.height() as f64 / 2.0;
    let cx = bbox.x0 as f64 + rx;
    let cy = bbox.y0 as f64 + ry;

    let ring = if outline.is_some() { f64::from(width) } else { 0.0 };
    let (inner_rx, inner_ry) = (rx - ring, ry - ring);

    paint_clipped(canvas, bbox, |x, y| {
        let dx = x as f64 + 0.5 - cx;
        let dy = y as f64 + 0.5 - cy;

        if !inside_ellipse(dx, dy, rx, ry) {
            return None;
        }

        if inner_rx > 0.0 && inner_ry > 0.0 && inside_ellipse(dx, dy, inner_rx, inner_ry) {
            fill
        } else {
            outline
        }
    });
}

fn inside_ellipse(dx: f64, dy: f64, rx: f64, ry: f64) -> bool {
    (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
}
