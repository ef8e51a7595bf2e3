use image::{Rgba, RgbaImage};

use super::draw;

/// Stylized cone motif shared by the arrow and hand cursors.
///
/// The tip sits at `offset` and doubles as the hotspot of any cursor built
/// from it. The triangle spans tip, (ox+8, oy+24) and (ox+24, oy+8), with
/// three ridge cross-lines and a 1px re-stroke of all edges so the outline
/// stays crisp over the fill.
pub fn draw_horn(img: &mut RgbaImage, offset: (f32, f32), fill: Rgba<u8>, outline: Rgba<u8>) {
    let (ox, oy) = offset;
    let tip = (ox, oy);
    let base_l = (ox + 8.0, oy + 24.0);
    let base_r = (ox + 24.0, oy + 8.0);

    draw::fill_polygon(img, &[tip, base_l, base_r], fill);

    // Ridges: cross-lines at quarter fractions along both slanted edges.
    for i in 1..4 {
        let t = i as f32 * 0.25;
        let p1 = (ox + 8.0 * t, oy + 24.0 * t);
        let p2 = (ox + 24.0 * t, oy + 8.0 * t);
        draw::draw_line(img, p1, p2, outline);
    }

    draw::draw_line(img, tip, base_l, outline);
    draw::draw_line(img, tip, base_r, outline);
    draw::draw_line(img, base_l, base_r, outline);
}
