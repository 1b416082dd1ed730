//! Schwungwinkel des Seils: Zeit-Akkumulation und Phasen-Sync.

use std::f32::consts::TAU;

/// Schwungwinkel-Zustand in Radiant.
///
/// Auf dem Akkumulations-Pfad liegt `angle` immer in `[0, 2π)`.
#[derive(Debug, Clone)]
pub struct SwingState {
    /// Aktueller Winkel im Schwungzyklus (Radiant)
    pub angle: f32,
}

impl SwingState {
    /// Erstellt einen neuen Zustand bei Winkel 0.
    pub fn new() -> Self {
        Self { angle: 0.0 }
    }

    /// Erstellt einen Zustand an einer normalisierten Phase.
    pub fn at_phase(normalized_phase: f32) -> Self {
        let mut state = Self::new();
        state.set_phase(normalized_phase);
        state
    }

    /// Akkumuliert den Winkel um `delta_time * angular_speed`.
    ///
    /// Einfacher Wrap bei 2π: `delta_time` wird als klein gegenüber der
    /// Schwungperiode angenommen, es gibt keine Mehrfach-Wrap-Korrektur.
    pub fn advance(&mut self, delta_time: f32, angular_speed: f32) {
        self.angle += delta_time * angular_speed;
        if self.angle >= TAU {
            self.angle -= TAU;
        }
    }

    /// Setzt den Winkel direkt auf `normalized_phase * 2π`.
    ///
    /// Phase 0 = Seil hinter dem Kopf, Phase 0.5 = Seil unter den Füßen.
    /// Werte außerhalb `[0,1)` werden weder geclampt noch gewrappt und
    /// ergeben einen Winkel außerhalb `[0, 2π)`.
    pub fn set_phase(&mut self, normalized_phase: f32) {
        self.angle = normalized_phase * TAU;
    }
}

impl Default for SwingState {
    fn default() -> Self {
        Self::new()
    }
}
