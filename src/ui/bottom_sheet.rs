//! Arrival Controls: direct environment adjustment, only shown once arrived.

use egui::Ui;

use crate::cosmos::EnvField;
use crate::interaction::WarpStore;

pub fn show(ui: &mut Ui, store: &mut WarpStore) {
    ui.label(
        egui::RichText::new("ARRIVAL CONTROLS")
            .small()
            .color(egui::Color32::from_gray(150)),
    );
    ui.add_space(4.0);

    let env = store.env();

    let mut gravity = env.gravity;
    if ui
        .add(egui::Slider::new(&mut gravity, 0.0..=20.0).text("Gravity m/s²"))
        .changed()
    {
        store.set_env_field(EnvField::Gravity, gravity);
    }

    let mut temperature = env.temperature_c;
    if ui
        .add(egui::Slider::new(&mut temperature, -270.0..=120.0).text("Temperature °C"))
        .changed()
    {
        store.set_env_field(EnvField::TemperatureC, temperature);
    }

    let mut radiation = env.radiation;
    if ui
        .add(egui::Slider::new(&mut radiation, 0.0..=1.0).text("Radiation"))
        .changed()
    {
        store.set_env_field(EnvField::Radiation, radiation);
    }
}
