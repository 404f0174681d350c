//! Suit customization: preset palettes plus per-part color pickers.

use egui::{Align2, Context};

use crate::interaction::WarpStore;
use crate::scene::palette::{SuitPatch, PALETTES};

pub fn show(ctx: &Context, store: &mut WarpStore, open: &mut bool) {
    egui::Window::new("Customize Astro Boy")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -40.0))
        .show(ctx, |ui| {
            ui.label("Pick colors for each suit part.");
            ui.add_space(6.0);

            ui.horizontal(|ui| {
                for palette in &PALETTES {
                    let swatch = egui::Button::new(
                        egui::RichText::new(palette.name).color(egui::Color32::BLACK),
                    )
                    .fill(palette.colors.helmet)
                    .rounding(12.0);
                    if ui.add(swatch).clicked() {
                        store.set_suit_colors_all(palette.colors);
                    }
                }
            });
            ui.add_space(8.0);

            let mut colors = *store.suit_colors();
            let mut patch = SuitPatch::default();
            egui::Grid::new("suit_colors")
                .num_columns(4)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Helmet");
                    if ui.color_edit_button_srgba(&mut colors.helmet).changed() {
                        patch.helmet = Some(colors.helmet);
                    }
                    ui.label("Visor");
                    if ui.color_edit_button_srgba(&mut colors.visor).changed() {
                        patch.visor = Some(colors.visor);
                    }
                    ui.end_row();

                    ui.label("Suit");
                    if ui.color_edit_button_srgba(&mut colors.suit).changed() {
                        patch.suit = Some(colors.suit);
                    }
                    ui.label("Gloves");
                    if ui.color_edit_button_srgba(&mut colors.gloves).changed() {
                        patch.gloves = Some(colors.gloves);
                    }
                    ui.end_row();

                    ui.label("Boots");
                    if ui.color_edit_button_srgba(&mut colors.boots).changed() {
                        patch.boots = Some(colors.boots);
                    }
                    ui.label("Belt");
                    if ui.color_edit_button_srgba(&mut colors.belt).changed() {
                        patch.belt = Some(colors.belt);
                    }
                    ui.end_row();

                    ui.label("Backpack");
                    if ui.color_edit_button_srgba(&mut colors.backpack).changed() {
                        patch.backpack = Some(colors.backpack);
                    }
                    ui.label("Accents");
                    if ui.color_edit_button_srgba(&mut colors.accents).changed() {
                        patch.accents = Some(colors.accents);
                    }
                    ui.end_row();
                });
            if !patch.is_empty() {
                store.set_suit_colors(patch);
            }
        });
}
