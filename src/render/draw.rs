// Low-level drawing helpers over imageproc. Geometry is computed in f32 and
// rounded to pixel coordinates here, at draw time.

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;

pub const CANVAS_SIZE: u32 = 32;

/// Fresh fully-transparent canvas.
pub fn new_canvas() -> RgbaImage {
    RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE)
}

/// Fill a polygon given real-valued vertices. Vertices are rounded to pixel
/// coordinates; consecutive duplicates and a repeated closing vertex are
/// dropped (imageproc rejects explicitly closed polygons). Degenerate inputs
/// with fewer than 3 distinct vertices draw nothing.
pub fn fill_polygon(img: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    let mut poly: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for &(x, y) in points {
        let p = Point::new(x.round() as i32, y.round() as i32);
        if poly.last() != Some(&p) {
            poly.push(p);
        }
    }
    if poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() >= 3 {
        draw_polygon_mut(img, &poly, color);
    }
}

/// Stroke every edge of a polygon, including the closing edge, at 1px.
pub fn outline_polygon(img: &mut RgbaImage, points: &[(f32, f32)], color: Rgba<u8>) {
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        draw_line(img, a, b, color);
    }
}

/// 1px line segment between two real-valued endpoints, both inclusive.
pub fn draw_line(img: &mut RgbaImage, from: (f32, f32), to: (f32, f32), color: Rgba<u8>) {
    draw_line_segment_mut(img, from, to, color);
}

/// 2px-wide axis-aligned stroke. The extra pixel extends one step below a
/// horizontal segment or one step right of a vertical one.
pub fn draw_bar(img: &mut RgbaImage, from: (i32, i32), to: (i32, i32), color: Rgba<u8>) {
    let (x0, y0) = (from.0.min(to.0), from.1.min(to.1));
    let (x1, y1) = (from.0.max(to.0), from.1.max(to.1));
    debug_assert!(x0 == x1 || y0 == y1, "bar endpoints must share an axis");

    let rect = if y0 == y1 {
        Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, 2)
    } else {
        Rect::at(x0, y0).of_size(2, (y1 - y0 + 1) as u32)
    };
    draw_filled_rect_mut(img, rect, color);
}

/// Single-pixel accent mark.
pub fn put_dot(img: &mut RgbaImage, at: (u32, u32), color: Rgba<u8>) {
    img.put_pixel(at.0, at.1, color);
}
