//! Audio demo application
//!
//! Loads every sound category from an optional config file, then walks a
//! listener through a short scripted scene: menu music, a few UI clicks,
//! footsteps on different surfaces and a thunder strike in the distance.
//!
//! ```text
//! audio_demo [config.toml|config.ron]
//! ```

use reverse_audio::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    reverse_audio::foundation::logging::init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("Loading audio config from {path}");
            AudioConfig::load_from_file(&path)?
        }
        None => AudioConfig {
            search_paths: vec!["assets".to_string()],
            ..AudioConfig::default()
        },
    };

    let mut engine = AudioEngine::from_config(&config);
    let mut managers = AudioManagers::load(&config, &mut engine)?;

    let report = managers.report();
    if !report.is_complete() {
        log::warn!(
            "{} of {} sounds are missing; those events will be silent",
            report.failed,
            report.total()
        );
    }

    managers.set_world_context(&PlaybackContext::new("demo"));

    log::info!("Main menu");
    managers.music.play_main_menu(&mut engine);
    managers.ui.play_hovered(&mut engine);
    managers.ui.play_pressed(&mut engine);
    managers.ui.play_notification(&mut engine);
    pause(&mut engine);

    log::info!("Walking from the meadow onto the bridge");
    let surfaces = [
        PhysicalSurface::Grass,
        PhysicalSurface::Grass,
        PhysicalSurface::Wood,
        PhysicalSurface::Wood,
    ];
    for (step, surface) in surfaces.into_iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let position = Vec3::new(step as f32 * 60.0, 0.0, 0.0);
        managers.update_listener(position);
        managers.character.play_footstep(&mut engine, surface, position);
        pause(&mut engine);
    }

    log::info!("Storm rolling in");
    managers.environment.play_rain(&mut engine);
    managers.environment.play_thunder_at(&mut engine, Vec3::new(2500.0, 300.0, 0.0));
    managers.weapon.play_rifle_reload_start(&mut engine);
    pause(&mut engine);
    managers.weapon.play_rifle_reload_end(&mut engine);
    managers.weapon.play_rifle_fire(&mut engine);
    pause(&mut engine);

    engine.stop_all();
    log::info!("Demo finished");
    Ok(())
}

fn pause(engine: &mut AudioEngine) {
    thread::sleep(Duration::from_millis(400));
    engine.update();
}
