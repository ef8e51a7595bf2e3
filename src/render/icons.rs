// Per-icon composition. Every function allocates its own canvas and draws
// shapes in painter's order from a shared palette.

use image::RgbaImage;

use crate::model::icon::IconKind;
use crate::model::palette::Palette;

use super::{draw, horn, star};

/// Offset shared by the arrow and hand horns. Shifting the tip off the origin
/// leaves room for the hand's aura without negative coordinates, and keeps
/// the hotspot at (2, 2) across both cursor states.
pub const HORN_OFFSET: (f32, f32) = (2.0, 2.0);

const CENTER: (f32, f32) = (16.0, 16.0);
const STAR_OUTER: f32 = 13.0;
const STAR_INNER: f32 = 5.0;

/// Half of the star's 60 degree repeat symmetry, giving a visually distinct
/// alternate frame for the two-frame busy loop.
const BUSY_ROTATIONS_DEG: [f32; 2] = [0.0, 30.0];

const SPARKLES: [(u32, u32); 3] = [(20, 2), (25, 4), (2, 20)];

/// Render all frames for one icon kind; one image per output group of
/// `kind.outputs()`.
pub fn render(kind: IconKind, palette: &Palette) -> Vec<RgbaImage> {
    match kind {
        IconKind::Arrow => vec![arrow(palette)],
        IconKind::Hand => vec![hand(palette)],
        IconKind::Busy => BUSY_ROTATIONS_DEG
            .iter()
            .map(|&rotation| busy_frame(palette, rotation))
            .collect(),
        IconKind::IBeam => vec![ibeam(palette)],
        IconKind::Move => vec![move_icon(palette)],
    }
}

fn arrow(palette: &Palette) -> RgbaImage {
    let mut img = draw::new_canvas();
    horn::draw_horn(&mut img, HORN_OFFSET, palette.horn_fill, palette.horn_outline);
    img
}

fn hand(palette: &Palette) -> RgbaImage {
    let mut img = draw::new_canvas();

    // Two flat oversized passes stand in for a soft glow. The aura tip sits
    // on the canvas origin, two pixels out from the horn tip.
    draw::fill_polygon(
        &mut img,
        &[(0.0, 0.0), (10.0, 28.0), (28.0, 10.0)],
        palette.aura,
    );
    draw::fill_polygon(
        &mut img,
        &[(0.0, 0.0), (8.0, 24.0), (24.0, 8.0)],
        palette.aura,
    );

    horn::draw_horn(&mut img, HORN_OFFSET, palette.horn_fill, palette.horn_outline);

    for at in SPARKLES {
        draw::put_dot(&mut img, at, palette.aura);
    }
    img
}

fn busy_frame(palette: &Palette, rotation_deg: f32) -> RgbaImage {
    let mut img = draw::new_canvas();
    let points = star::star_points(CENTER, STAR_OUTER, STAR_INNER, rotation_deg);
    draw::fill_polygon(&mut img, &points, palette.star_fill);
    draw::outline_polygon(&mut img, &points, palette.star_outline);
    img
}

fn ibeam(palette: &Palette) -> RgbaImage {
    let mut img = draw::new_canvas();
    draw::draw_bar(&mut img, (10, 4), (22, 4), palette.glyph_fill);
    draw::draw_bar(&mut img, (10, 28), (22, 28), palette.glyph_fill);
    draw::draw_bar(&mut img, (16, 4), (16, 28), palette.glyph_fill);
    img
}

fn move_icon(palette: &Palette) -> RgbaImage {
    // Notched arrowheads pointing north, south, west and east; mirrors and
    // rotations of one another, meeting near the canvas center.
    const HEADS: [[(f32, f32); 7]; 4] = [
        [
            (16.0, 2.0),
            (12.0, 8.0),
            (14.0, 8.0),
            (14.0, 14.0),
            (18.0, 14.0),
            (18.0, 8.0),
            (20.0, 8.0),
        ],
        [
            (16.0, 30.0),
            (12.0, 24.0),
            (14.0, 24.0),
            (14.0, 18.0),
            (18.0, 18.0),
            (18.0, 24.0),
            (20.0, 24.0),
        ],
        [
            (2.0, 16.0),
            (8.0, 12.0),
            (8.0, 14.0),
            (14.0, 14.0),
            (14.0, 18.0),
            (8.0, 18.0),
            (8.0, 22.0),
        ],
        [
            (30.0, 16.0),
            (24.0, 12.0),
            (24.0, 14.0),
            (18.0, 14.0),
            (18.0, 18.0),
            (24.0, 18.0),
            (24.0, 22.0),
        ],
    ];

    let mut img = draw::new_canvas();
    for head in &HEADS {
        draw::fill_polygon(&mut img, head, palette.glyph_fill);
        draw::outline_polygon(&mut img, head, palette.glyph_outline);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::default()
    }

    #[test]
    fn test_all_frames_are_canvas_sized() {
        let palette = palette();
        for kind in IconKind::ALL {
            for frame in render(kind, &palette) {
                assert_eq!(frame.dimensions(), (32, 32));
            }
        }
    }

    #[test]
    fn test_frame_counts_match_output_mapping() {
        let palette = palette();
        for kind in IconKind::ALL {
            assert_eq!(render(kind, &palette).len(), kind.frame_count());
        }
    }

    #[test]
    fn test_arrow_hotspot_pixel() {
        let palette = palette();
        let frames = render(IconKind::Arrow, &palette);

        // The horn tip at the hotspot is opaque, re-stroked in outline color.
        assert_eq!(*frames[0].get_pixel(2, 2), palette.horn_outline);
        // Background stays transparent.
        assert_eq!(frames[0].get_pixel(0, 0)[3], 0);
        assert_eq!(frames[0].get_pixel(31, 31)[3], 0);
    }

    #[test]
    fn test_hand_layers() {
        let palette = palette();
        let frames = render(IconKind::Hand, &palette);
        let img = &frames[0];

        // Aura tip reaches the canvas origin, horn tip stays at the hotspot.
        assert_eq!(*img.get_pixel(0, 0), palette.aura);
        assert_eq!(*img.get_pixel(2, 2), palette.horn_outline);
        // Horn interior overdraws the aura.
        assert_eq!(*img.get_pixel(12, 12), palette.horn_fill);
    }

    #[test]
    fn test_hand_sparkles() {
        let palette = palette();
        let frames = render(IconKind::Hand, &palette);
        for (x, y) in SPARKLES {
            assert_eq!(*frames[0].get_pixel(x, y), palette.aura);
        }
    }

    #[test]
    fn test_busy_frames_share_center_but_differ() {
        let palette = palette();
        let frames = render(IconKind::Busy, &palette);
        assert_eq!(frames.len(), 2);

        // Center is inside the inner radius for any rotation.
        assert_eq!(*frames[0].get_pixel(16, 16), palette.star_fill);
        assert_eq!(*frames[1].get_pixel(16, 16), palette.star_fill);

        // Frame 1 has an outer point at the top; frame 2's top reach is the
        // inner radius, so the pixel under the first frame's top point is
        // blank in the second.
        assert!(frames[0].get_pixel(16, 3)[3] > 0);
        assert_eq!(frames[1].get_pixel(16, 3)[3], 0);

        assert_ne!(frames[0].as_raw(), frames[1].as_raw());
    }

    #[test]
    fn test_ibeam_bars() {
        let palette = palette();
        let frames = render(IconKind::IBeam, &palette);
        let img = &frames[0];

        assert_eq!(*img.get_pixel(10, 4), palette.glyph_fill);
        assert_eq!(*img.get_pixel(22, 4), palette.glyph_fill);
        assert_eq!(*img.get_pixel(10, 28), palette.glyph_fill);
        assert_eq!(*img.get_pixel(16, 16), palette.glyph_fill);
        // Nothing outside the glyph.
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(5, 16)[3], 0);
    }

    #[test]
    fn test_move_clusters_at_edge_midpoints() {
        let palette = palette();
        let frames = render(IconKind::Move, &palette);
        let img = &frames[0];

        // One arrowhead tip adjacent to each canvas edge midpoint.
        assert!(img.get_pixel(16, 2)[3] > 0);
        assert!(img.get_pixel(16, 30)[3] > 0);
        assert!(img.get_pixel(2, 16)[3] > 0);
        assert!(img.get_pixel(30, 16)[3] > 0);

        // No cluster crosses to the opposite edge.
        assert_eq!(img.get_pixel(16, 0)[3], 0);
        assert_eq!(img.get_pixel(16, 31)[3], 0);
        assert_eq!(img.get_pixel(0, 16)[3], 0);
        assert_eq!(img.get_pixel(31, 16)[3], 0);
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(31, 31)[3], 0);
    }
}
