//! Demo-Host für die Seil-Komponente.
//!
//! Simuliert einen Render-Loop mit festem Zeitschritt: bewegte Haltepunkte,
//! ein Phasen-Sync in der Mitte, Kurven-Eckdaten im Log.

use glam::Vec3;
use rope_swing::{CharacterFrame, PolylineBuffer, RopeController, RopeOptions, RopeScene};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Rope-Swing-Demo v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = RopeOptions::config_path();
    let options = RopeOptions::load_from_file(&config_path);
    let mut rope = RopeController::new(options)?;
    let mut sink = PolylineBuffer::new();

    let delta_time = 1.0 / 60.0;
    for frame_index in 0..300u32 {
        let time = frame_index as f32 * delta_time;

        // Hände pendeln leicht auf und ab, Charakter bleibt welt-ausgerichtet
        let bob = (time * 2.0).sin() * 0.2;
        let scene = RopeScene::new(
            Vec3::new(-0.5, 1.5 + bob, 0.0),
            Vec3::new(0.5, 1.5 + bob, 0.0),
            CharacterFrame::IDENTITY,
        );

        // Animations-Event: Zyklus einmal hart auf "unter den Füßen" setzen
        if frame_index == 150 {
            rope.set_phase(0.5);
            log::info!("Phasen-Sync auf 0.5 (Seil unter den Füßen)");
        }

        rope.tick(delta_time, &scene, &mut sink);

        if frame_index % 60 == 0 {
            let mid = sink.positions()[sink.len() / 2];
            log::info!(
                "Frame {}: Winkel {:.3} rad, Kurvenmitte ({:.2}, {:.2}, {:.2})",
                frame_index,
                rope.angle(),
                mid.x,
                mid.y,
                mid.z
            );
        }
    }

    Ok(())
}
