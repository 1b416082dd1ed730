//! Reine Geometrie-Funktionen für die Seil-Kurve.
//!
//! Layer-neutral: kann von `rope`, Tests und Benches importiert werden,
//! ohne Zustand oder Logging zu ziehen.

use crate::core::CharacterFrame;
use glam::{Quat, Vec3};
use std::f32::consts::PI;

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// Berechnet den Kontrollpunkt des Seils für den aktuellen Schwungwinkel.
///
/// Der Mittelpunkt der Haltepunkte wird um `sag` entlang `-up` zum
/// Bahn-Zentrum verschoben; der Kontrollpunkt kreist im Abstand `radius`
/// um die `right`-Achse des Charakters.
///
/// Winkel-Konvention: `angle = 0` entspricht dem Kontrollpunkt über dem
/// Kopf, `angle = π` unter den Füßen. Intern wird dafür mit `angle + π`
/// rotiert, da der Basis-Offset `-up · radius` nach unten zeigt.
pub fn swing_control_point(
    left_hold: Vec3,
    right_hold: Vec3,
    frame: &CharacterFrame,
    sag: f32,
    radius: f32,
    angle: f32,
) -> Vec3 {
    let midpoint = (left_hold + right_hold) / 2.0;
    let center = midpoint - frame.up * sag;

    let calculation_angle = angle + PI;
    let base_offset = -frame.up * radius;
    let rotated = Quat::from_axis_angle(frame.right, calculation_angle) * base_offset;

    center + rotated
}

/// Tastet die quadratische Bézier-Kurve an `segments` gleichverteilten
/// Parametern ab und schreibt die Punkte in `out` (wird vorher geleert).
///
/// `segments >= 2`: Index 0 liegt exakt auf `p0`, Index `segments - 1`
/// exakt auf `p2`.
pub fn sample_quadratic_into(
    out: &mut Vec<Vec3>,
    p0: Vec3,
    control: Vec3,
    p2: Vec3,
    segments: usize,
) {
    out.clear();
    out.reserve(segments);
    for i in 0..segments {
        let t = i as f32 / (segments - 1) as f32;
        out.push(quadratic_bezier(p0, control, p2, t));
    }
}
