use anyhow::Result;
use eframe::egui;
use log::info;

mod cosmos;
mod interaction;
mod scene;
mod ui;

use ui::WarpApp;

fn main() -> Result<()> {
    env_logger::init();
    info!("Starting Warp Here - scale scrubbing visualization");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 960.0])
            .with_min_inner_size([420.0, 640.0])
            .with_title("Warp Here"),
        ..Default::default()
    };

    eframe::run_native(
        "Warp Here",
        options,
        Box::new(|cc| {
            configure_style(&cc.egui_ctx);
            Ok(Box::new(WarpApp::new(cc)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    Ok(())
}

fn configure_style(ctx: &egui::Context) {
    let mut style = egui::Style::default();

    // Deep-space panel colors so overlay surfaces sit into the scene.
    style.visuals.window_fill = egui::Color32::from_rgba_unmultiplied(8, 12, 24, 235);
    style.visuals.panel_fill = egui::Color32::from_rgb(4, 7, 18);
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(10, 14, 28);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(18, 24, 44);

    style.visuals.widgets.inactive.bg_fill = egui::Color32::from_rgb(26, 34, 58);
    style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(36, 46, 76);
    style.visuals.widgets.active.bg_fill = egui::Color32::from_rgb(48, 60, 96);

    ctx.set_style(style);
}
