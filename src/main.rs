// src/main.rs
use std::env;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "moviedesk=info";

fn pick_renderer() -> eframe::Renderer {
    match env::var("MOVIEDESK_RENDERER").as_deref() {
        Ok("glow") => eframe::Renderer::Glow,
        Ok("wgpu") => eframe::Renderer::Wgpu,
        _ => {
            // Default: Windows = WGPU (DX12), Others = Glow (GL)
            #[cfg(target_os = "windows")]
            { eframe::Renderer::Wgpu }
            #[cfg(not(target_os = "windows"))]
            { eframe::Renderer::Glow }
        }
    }
}

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .try_init();

    let cfg = moviedesk::config::load_config();
    info!("Movie service: {}", cfg.api_base_url);

    let options = eframe::NativeOptions {
        renderer: pick_renderer(),
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title(cfg.window_title.clone()),
        ..Default::default()
    };

    let app_name = cfg.window_title.clone();
    match eframe::run_native(
        &app_name,
        options,
        Box::new(move |cc| Ok(Box::new(moviedesk::app::MovieDeskApp::new(&cc.egui_ctx, cfg)))),
    ) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("eframe failed to start: {e:?}");
            error!("Hint: try MOVIEDESK_RENDERER=wgpu or glow.");
            Err(e)
        }
    }
}
