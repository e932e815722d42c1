//! Shared driver for the lighting demos

use light_engine::prelude::*;

/// Seconds between frame rate reports
const FPS_REPORT_INTERVAL: f32 = 5.0;

/// Draws a fixed scene and lets the camera fly around it
pub struct DemoApp {
    scene: Scene,
    next_report: f32,
}

impl DemoApp {
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            next_report: FPS_REPORT_INTERVAL,
        }
    }
}

impl Application for DemoApp {
    fn scene(&self) -> &Scene {
        &self.scene
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        if engine.time() >= self.next_report {
            self.next_report = engine.time() + FPS_REPORT_INTERVAL;
            if delta_time > 0.0 {
                log::debug!("{:.1} fps", 1.0 / delta_time);
            }
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        log::info!("Closing '{}'", self.scene.name);
    }
}

/// Load configuration from the first command line argument, if any, and run
/// `scene` until the window closes
pub fn run(title: &str, scene: Scene) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1);
    let config = ApplicationConfig::load_or_default(config_path.as_deref(), title)?;
    logging::init(&config.log_level);

    log::info!("Starting {}", title);

    let mut app = DemoApp::new(scene);
    match Engine::run(config, &mut app) {
        Ok(()) => {
            log::info!("{} finished", title);
            Ok(())
        }
        Err(e) => {
            log::error!("{} failed: {}", title, e);
            Err(e.into())
        }
    }
}
