//! Seil-Szene als expliziter Übergabevertrag zwischen Host und Komponente.
//!
//! Der Host besitzt und aktualisiert die Haltepunkte und den
//! Charakter-Rahmen; die Komponente liest sie pro Tick nur.

use crate::core::CharacterFrame;
use glam::Vec3;

/// Read-only Eingaben für einen Seil-Tick.
#[derive(Debug, Clone, Default)]
pub struct RopeScene {
    /// Linker Haltepunkt (Hand) in Welt-Koordinaten
    pub left_hold: Option<Vec3>,
    /// Rechter Haltepunkt (Hand) in Welt-Koordinaten
    pub right_hold: Option<Vec3>,
    /// Orientierung des Charakters
    pub character: Option<CharacterFrame>,
}

impl RopeScene {
    /// Erstellt eine vollständige Szene aus allen drei Referenzen.
    pub fn new(left_hold: Vec3, right_hold: Vec3, character: CharacterFrame) -> Self {
        Self {
            left_hold: Some(left_hold),
            right_hold: Some(right_hold),
            character: Some(character),
        }
    }

    /// Gibt zurück, ob alle drei Referenzen vorhanden sind.
    pub fn is_complete(&self) -> bool {
        self.left_hold.is_some() && self.right_hold.is_some() && self.character.is_some()
    }

    /// Löst alle Referenzen auf, oder `None` sobald eine fehlt.
    pub(crate) fn resolved(&self) -> Option<(Vec3, Vec3, &CharacterFrame)> {
        Some((self.left_hold?, self.right_hold?, self.character.as_ref()?))
    }
}
