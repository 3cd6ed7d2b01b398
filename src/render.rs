/**
 * Shape Rendering Module
 *
 * Draws a single centred shape onto a solid white canvas. Two shapes are
 * supported: an axis-aligned filled square and a ten-vertex star polygon
 * taken from a fixed coordinate template. An optional distortion pass
 * softens the finished canvas with a Gaussian blur.
 */

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_polygon_mut};
use imageproc::filter::gaussian_blur_f32;
use imageproc::point::Point;
use imageproc::rect::Rect;

/// Background colour every canvas starts from
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Gaussian sigma used by [`distort`], in canvas pixels
pub const DISTORT_SIGMA: f32 = 2.0;

// Star outline as fractions of the bounding size, relative to the bounding
// box origin. This is a literal dataset rather than a parametric star: the
// slight asymmetry is the shape's defining look, so the ten points are
// hard-coded and must stay in this order.
const STAR_TEMPLATE: [(f32, f32); 10] = [
    (0.5, 0.0), // top point
    (0.6, 0.4), // right inner
    (1.0, 0.4), // right outer
    (0.7, 0.7), // bottom right inner
    (0.8, 1.0), // bottom right outer
    (0.5, 0.8), // bottom point
    (0.2, 1.0), // bottom left outer
    (0.3, 0.7), // bottom left inner
    (0.0, 0.4), // left outer
    (0.4, 0.4), // left inner
];

/// RGB colour representation
#[derive(Debug, Clone, Copy)]
pub struct Color {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Color {
    /// Create a new colour from RGB values
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Kind of shape drawn on a canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Ten-vertex star polygon
    Star,
    /// Axis-aligned filled square
    Square,
}

/// Top-left corner of a centred `shape_size` bounding box
pub fn shape_origin(width: u32, height: u32, shape_size: u32) -> (i32, i32) {
    let x = (width as i32 - shape_size as i32) / 2;
    let y = (height as i32 - shape_size as i32) / 2;
    (x, y)
}

/// Map the star template into a bounding box at `(x, y)`
fn star_vertices(x: i32, y: i32, shape_size: u32) -> Vec<Point<i32>> {
    let size = shape_size as f32;
    STAR_TEMPLATE
        .iter()
        .map(|&(fx, fy)| {
            Point::new(
                x + (fx * size).round() as i32,
                y + (fy * size).round() as i32,
            )
        })
        .collect()
}

/**
 * Render one shape in the given colour, centred on a white canvas
 *
 * The square spans the bounding box inclusive of both corners, so its
 * fill is one pixel wider than `shape_size` on each axis. The star is
 * the filled polygon over the template vertices. Either shape is clipped
 * to the canvas if the bounding box overhangs it.
 */
pub fn render_shape(
    width: u32,
    height: u32,
    shape_size: u32,
    kind: ShapeKind,
    color: Color,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);
    let (x, y) = shape_origin(width, height, shape_size);
    let fill = Rgb([color.r, color.g, color.b]);

    match kind {
        ShapeKind::Square => {
            let rect = Rect::at(x, y).of_size(shape_size + 1, shape_size + 1);
            draw_filled_rect_mut(&mut canvas, rect, fill);
        }
        ShapeKind::Star => {
            let vertices = star_vertices(x, y, shape_size);
            draw_polygon_mut(&mut canvas, &vertices, fill);
        }
    }

    canvas
}

/// Soften the whole canvas with a fixed-sigma Gaussian blur
pub fn distort(img: &RgbImage) -> RgbImage {
    gaussian_blur_f32(img, DISTORT_SIGMA)
}
