/// Vertices of a six-pointed star: 12 points alternating between the outer
/// and inner radius, stepping 30 degrees per vertex. Vertex 0 sits at the top
/// before `rotation_deg` is applied (the -90 degree anchor).
pub fn star_points(
    center: (f32, f32),
    outer: f32,
    inner: f32,
    rotation_deg: f32,
) -> Vec<(f32, f32)> {
    (0..12)
        .map(|i| {
            let angle = (i as f32 * 30.0 + rotation_deg - 90.0).to_radians();
            let r = if i % 2 == 0 { outer } else { inner };
            (center.0 + r * angle.cos(), center.1 + r * angle.sin())
        })
        .collect()
}
