#![cfg(feature = "egui")]

use eframe::egui::Pos2;

/// Squared distance from `p` to the segment `a`–`b`.
pub fn dist_sq_to_segment(p: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_sq();
    if len_sq == 0.0 {
        return (p - a).length_sq();
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    let proj = a + ab * t;
    (p - proj).length_sq()
}

/// True when `p` lies within `tol` pixels of any segment of the polyline.
pub fn near_polyline(p: Pos2, points: &[Pos2], tol: f32) -> bool {
    points
        .windows(2)
        .any(|w| dist_sq_to_segment(p, w[0], w[1]) <= tol * tol)
}
