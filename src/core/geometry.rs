//! Reine 2D-Geometrie-Funktionen: Snapping, Projektion und Bounding-Box-Tests.
//!
//! Alle Funktionen sind zustandslos und deterministisch.

use glam::Vec2;

/// Rundet jede Koordinate auf das nächste Vielfache von `cell_size`.
///
/// Bei `cell_size <= 0` (oder NaN) wird der Punkt unverändert zurückgegeben.
pub fn snap_to_grid(point: Vec2, cell_size: f32) -> Vec2 {
    if cell_size.is_nan() || cell_size <= 0.0 {
        return point;
    }
    (point / cell_size).round() * cell_size
}

/// Ergebnis eines Achsen-Snaps inkl. der eingerasteten Achsen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSnap {
    /// Position nach dem Snap
    pub point: Vec2,
    /// x wurde auf `anchor.x` gesetzt (vertikale Führung)
    pub vertical: bool,
    /// y wurde auf `anchor.y` gesetzt (horizontale Führung)
    pub horizontal: bool,
}

/// Rastet `point` achsenweise auf `anchor` ein, wenn die Abweichung unter `threshold` liegt.
///
/// Beide Achsen werden unabhängig geprüft; rasten beide ein, ergibt sich der Anker selbst.
pub fn snap_to_axis_detailed(point: Vec2, anchor: Vec2, threshold: f32) -> AxisSnap {
    let vertical = (point.x - anchor.x).abs() < threshold;
    let horizontal = (point.y - anchor.y).abs() < threshold;
    AxisSnap {
        point: Vec2::new(
            if vertical { anchor.x } else { point.x },
            if horizontal { anchor.y } else { point.y },
        ),
        vertical,
        horizontal,
    }
}

/// Achsen-Snap ohne Zusatzinformationen (siehe [`snap_to_axis_detailed`]).
pub fn snap_to_axis(point: Vec2, anchor: Vec2, threshold: f32) -> Vec2 {
    snap_to_axis_detailed(point, anchor, threshold).point
}

/// Prüft, ob `point` in der um `margin` erweiterten Bounding-Box des Segments liegt.
///
/// Grobe Näherung für den Wand-Hit-Test: diagonale Wände treffen dadurch
/// auch Punkte neben der eigentlichen Linie.
pub fn point_in_expanded_bounding_box(
    point: Vec2,
    segment_start: Vec2,
    segment_end: Vec2,
    margin: f32,
) -> bool {
    let min = segment_start.min(segment_end) - Vec2::splat(margin);
    let max = segment_start.max(segment_end) + Vec2::splat(margin);
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

/// Projiziert `point` auf die Gerade durch das Segment und liefert den
/// normierten Parameter entlang des Segments, geklemmt auf `[0, 1]`.
///
/// Degenerierte Segmente liefern `0.0`.
pub fn project_onto_segment(point: Vec2, segment_start: Vec2, segment_end: Vec2) -> f32 {
    let dir = segment_end - segment_start;
    let len_sq = dir.length_squared();
    if len_sq <= f32::EPSILON {
        return 0.0;
    }
    ((point - segment_start).dot(dir) / len_sq).clamp(0.0, 1.0)
}
