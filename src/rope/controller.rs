//! Zustand und Tick-Logik der Seil-Komponente.

use crate::core::SwingState;
use crate::shared::curve_geometry::{sample_quadratic_into, swing_control_point};
use crate::shared::{LineSink, RopeOptions, RopeScene};
use glam::Vec3;

/// Schwingendes Seil zwischen zwei Haltepunkten.
///
/// Hält die unveränderliche Konfiguration, den Schwungwinkel und einen
/// wiederverwendeten Abtast-Puffer. Alle Frame-Eingaben kommen pro Tick
/// über die [`RopeScene`].
pub struct RopeController {
    options: RopeOptions,
    swing: SwingState,
    /// Wiederverwendeter Puffer für die abgetasteten Kurvenpunkte
    samples: Vec<Vec3>,
}

impl RopeController {
    /// Erstellt die Komponente mit validierten Optionen.
    ///
    /// Schlägt fehl wenn `options.segments < 2`. Die `initial_phase`
    /// wird über den Phasen-Sync-Pfad angewendet.
    pub fn new(options: RopeOptions) -> anyhow::Result<Self> {
        options.validate()?;
        let swing = SwingState::at_phase(options.initial_phase);
        let samples = Vec::with_capacity(options.segments);
        Ok(Self {
            options,
            swing,
            samples,
        })
    }

    /// Führt einen Frame-Tick aus: Winkel akkumulieren, Kurve abtasten,
    /// Punkte in die Senke schreiben.
    ///
    /// Fehlt eine der drei Referenzen in der Szene, wird der gesamte Tick
    /// übersprungen — keine Senken-Schreibzugriffe, der Winkel bleibt
    /// unverändert.
    pub fn tick(&mut self, delta_time: f32, scene: &RopeScene, sink: &mut impl LineSink) {
        let Some((left_hold, right_hold, frame)) = scene.resolved() else {
            log::warn!("Seil-Tick übersprungen: Haltepunkte oder Charakter-Rahmen fehlen");
            return;
        };

        self.swing.advance(delta_time, self.options.swing_speed);

        let control = swing_control_point(
            left_hold,
            right_hold,
            frame,
            self.options.rope_sag,
            self.options.swing_radius,
            self.swing.angle,
        );
        sample_quadratic_into(
            &mut self.samples,
            left_hold,
            control,
            right_hold,
            self.options.segments,
        );

        sink.set_position_count(self.options.segments);
        for (index, position) in self.samples.iter().enumerate() {
            sink.set_position(index, *position);
        }
    }

    /// Synchronisiert den Schwungzyklus mit einer externen Animations-Phase.
    ///
    /// Phase 0 = Seil hinter dem Kopf, 0.5 = Seil unter den Füßen. Der Wert
    /// überschreibt den akkumulierten Winkel direkt; außerhalb von `[0,1)`
    /// findet kein Wrap statt.
    pub fn set_phase(&mut self, normalized_phase: f32) {
        self.swing.set_phase(normalized_phase);
    }

    /// Aktueller Schwungwinkel (Radiant).
    pub fn angle(&self) -> f32 {
        self.swing.angle
    }

    /// Die beim Erstellen festgelegten Optionen.
    pub fn options(&self) -> &RopeOptions {
        &self.options
    }

    /// Die Abtastpunkte des letzten erfolgreichen Ticks.
    pub fn samples(&self) -> &[Vec3] {
        &self.samples
    }
}
