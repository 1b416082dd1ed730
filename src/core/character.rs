//! Orientierungs-Rahmen des Charakters (Rechts/Hoch/Vorwärts-Achsen).

use glam::{Quat, Vec3};

/// Lokale Achsen des Charakters in Welt-Koordinaten.
///
/// Alle Achsen sind Einheitsvektoren und paarweise orthogonal.
/// `right` ist die Rotationsachse des Schwungs, `up` definiert die
/// Durchhang-Richtung des Seils.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterFrame {
    /// Rechts-Achse des Charakters
    pub right: Vec3,
    /// Hoch-Achse des Charakters
    pub up: Vec3,
    /// Vorwärts-Achse des Charakters
    pub forward: Vec3,
}

impl CharacterFrame {
    /// Welt-ausgerichteter Rahmen (X/Y/Z).
    pub const IDENTITY: Self = Self {
        right: Vec3::X,
        up: Vec3::Y,
        forward: Vec3::Z,
    };

    /// Leitet die Achsen aus einer Einheits-Rotation ab.
    pub fn from_rotation(rotation: Quat) -> Self {
        Self {
            right: rotation * Vec3::X,
            up: rotation * Vec3::Y,
            forward: rotation * Vec3::Z,
        }
    }
}

impl Default for CharacterFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}
