//! Zentrale Konfiguration der Seil-Komponente.
//!
//! `RopeOptions` enthält alle beim Erstellen festgelegten Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::bail;
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Anzahl der Abtastpunkte entlang der Seil-Kurve.
pub const SEGMENTS_DEFAULT: usize = 20;
/// Minimal zulässige Segment-Anzahl; darunter ist die Parametrisierung
/// `t = i / (segments - 1)` undefiniert.
pub const SEGMENTS_MIN: usize = 2;

// ── Schwung ─────────────────────────────────────────────────────────

/// Durchhang des Bahn-Zentrums unter dem Haltepunkt-Mittelpunkt (Meter).
pub const ROPE_SAG_DEFAULT: f32 = 1.0;
/// Winkelgeschwindigkeit des Schwungs (Radiant pro Sekunde).
pub const SWING_SPEED_DEFAULT: f32 = 10.0;
/// Radius der Kreisbahn des Kontrollpunkts (Meter).
pub const SWING_RADIUS_DEFAULT: f32 = 10.0;
/// Start-Phase im Schwungzyklus (normalisiert).
pub const INITIAL_PHASE_DEFAULT: f32 = 0.0;

/// Alle beim Erstellen festgelegten Seil-Optionen.
/// Wird als `rope_swing.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RopeOptions {
    /// Anzahl der Abtastpunkte entlang der Kurve (mindestens 2)
    pub segments: usize,
    /// Durchhang unter dem Haltepunkt-Mittelpunkt
    pub rope_sag: f32,
    /// Winkelgeschwindigkeit des Schwungs (rad/s)
    pub swing_speed: f32,
    /// Radius der Kontrollpunkt-Kreisbahn
    pub swing_radius: f32,
    /// Start-Phase (normalisiert, 0 = Seil hinter dem Kopf)
    #[serde(default)]
    pub initial_phase: f32,
}

impl Default for RopeOptions {
    fn default() -> Self {
        Self {
            segments: SEGMENTS_DEFAULT,
            rope_sag: ROPE_SAG_DEFAULT,
            swing_speed: SWING_SPEED_DEFAULT,
            swing_radius: SWING_RADIUS_DEFAULT,
            initial_phase: INITIAL_PHASE_DEFAULT,
        }
    }
}

impl RopeOptions {
    /// Prüft die Optionen beim Erstellen der Komponente.
    ///
    /// Negative Geschwindigkeit (Rückwärts-Schwung) und negativer Durchhang
    /// sind zulässig; nur die Segment-Untergrenze ist ein harter Fehler.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.segments < SEGMENTS_MIN {
            bail!(
                "segments = {} ist ungültig, mindestens {} erforderlich",
                self.segments,
                SEGMENTS_MIN
            );
        }
        Ok(())
    }

    /// Lädt Optionen aus einer TOML-Datei (Standardwerte bei Fehlern).
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("rope_swing"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("rope_swing.toml")
    }
}
