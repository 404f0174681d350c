//! Overlay UI: the app shell, pointer routing, and every control surface
//! layered over the scene.

use std::time::Instant;

use eframe::egui;
use egui::{Align2, Color32, Painter, Pos2, Rect, RichText, Stroke};

use crate::cosmos::anchors;
use crate::interaction::{WarpMode, WarpStore};
use crate::scene::SceneView;

pub mod bottom_sheet;
pub mod customize;

/// How long the anchor name and rail knob glow after a snap.
const SNAP_PULSE_SECS: f32 = 0.45;
/// Visible length of the warp flash, matching the warp window.
const WARP_FLASH_SECS: f32 = 0.6;

pub struct WarpApp {
    store: WarpStore,
    scene: SceneView,
    was_holding: bool,
    customizing: bool,
    snap_flash: Option<Instant>,
    warp_flash: Option<Instant>,
    last_mode: WarpMode,
    last_snap: Option<&'static str>,
    last_revision: u64,
}

impl WarpApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let store = WarpStore::new();
        let last_mode = store.mode();
        let last_snap = store.snapped_anchor_id();
        let last_revision = store.revision();
        Self {
            store,
            scene: SceneView::new(),
            was_holding: false,
            customizing: false,
            snap_flash: None,
            warp_flash: None,
            last_mode,
            last_snap,
            last_revision,
        }
    }

    fn track_transitions(&mut self, now: Instant) {
        let mode = self.store.mode();
        let snapped = self.store.snapped_anchor_id();

        if mode == WarpMode::Snapped
            && snapped.is_some()
            && (self.last_mode != WarpMode::Snapped || self.last_snap != snapped)
        {
            self.snap_flash = Some(now);
        }
        match (mode, self.warp_flash) {
            (WarpMode::Warping, None) => self.warp_flash = Some(now),
            (WarpMode::Warping, Some(_)) => {}
            _ => self.warp_flash = None,
        }

        self.last_mode = mode;
        self.last_snap = snapped;
    }

    fn pulse(&self, now: Instant) -> f32 {
        match self.snap_flash {
            Some(since) => {
                let t = now.duration_since(since).as_secs_f32() / SNAP_PULSE_SECS;
                if t >= 1.0 {
                    0.0
                } else {
                    (t * std::f32::consts::PI).sin()
                }
            }
            None => 0.0,
        }
    }

    /// Translate raw pointer input into the store's gesture commands.
    /// Widgets layered above the scene win the pointer, so presses here are
    /// exactly "pointer-down outside any control surface".
    fn route_pointer(&mut self, ui: &egui::Ui, response: &egui::Response, now: Instant) {
        if response.hovered() && ui.input(|i| i.pointer.primary_pressed()) {
            if let Some(pos) = ui.input(|i| i.pointer.interact_pos()) {
                self.store.begin_drag(pos, now);
            }
        }
        if self.store.drag_active() {
            if let Some(pos) = ui.input(|i| i.pointer.latest_pos()) {
                self.store.move_drag(pos, response.rect.height());
            }
            if ui.input(|i| i.pointer.primary_released() || !i.pointer.has_pointer()) {
                self.store.end_drag(now);
            }
        }
    }

    fn draw_scale_rail(&self, painter: &Painter, rect: Rect, now: Instant) {
        let x = rect.right() - 28.0;
        let top = rect.top() + rect.height() * 0.12;
        let bottom = rect.top() + rect.height() * 0.82;
        painter.line_segment(
            [Pos2::new(x, top), Pos2::new(x, bottom)],
            Stroke::new(2.0, Color32::from_white_alpha(40)),
        );

        for anchor in &anchors::ANCHORS {
            let y = bottom + (top - bottom) * anchor.scale_position;
            painter.line_segment(
                [Pos2::new(x - 4.0, y), Pos2::new(x + 4.0, y)],
                Stroke::new(1.0, Color32::from_white_alpha(60)),
            );
        }

        let pulse = self.pulse(now);
        let knob_y = bottom + (top - bottom) * self.store.scale();
        let radius = 7.0 + pulse * 3.5;
        painter.circle_filled(
            Pos2::new(x, knob_y),
            radius + 4.0,
            Color32::from_rgb(0x91, 0xbe, 0xff).gamma_multiply(0.18 + pulse * 0.3),
        );
        painter.circle_filled(
            Pos2::new(x, knob_y),
            radius,
            Color32::from_white_alpha(70),
        );
        painter.circle_stroke(
            Pos2::new(x, knob_y),
            radius,
            Stroke::new(1.5, Color32::from_white_alpha(160)),
        );
    }

    fn draw_warp_flash(&self, painter: &Painter, rect: Rect, now: Instant) {
        let Some(since) = self.warp_flash else {
            return;
        };
        let t = (now.duration_since(since).as_secs_f32() / WARP_FLASH_SECS).clamp(0.0, 1.0);
        let alpha = (t * std::f32::consts::PI).sin() * 0.35;
        painter.rect_filled(
            rect,
            0.0,
            Color32::from_rgb(0x78, 0xc8, 0xff).gamma_multiply(alpha),
        );

        // A bright band sweeps across during the transition.
        let band_w = rect.width() * 0.28;
        let band_x = rect.left() + (rect.width() + band_w) * t - band_w;
        painter.rect_filled(
            Rect::from_min_max(
                Pos2::new(band_x, rect.top()),
                Pos2::new(band_x + band_w, rect.bottom()),
            ),
            0.0,
            Color32::WHITE.gamma_multiply(alpha * 0.6),
        );
    }

    fn draw_header(&self, ctx: &egui::Context, now: Instant) {
        let anchor = self.store.active_anchor();
        let pulse = self.pulse(now);
        let name_color = blend_toward_white(Color32::from_gray(235), pulse * 0.8);

        egui::Area::new(egui::Id::new("header"))
            .anchor(Align2::LEFT_TOP, egui::vec2(20.0, 18.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.label(
                    RichText::new("WARP HERE")
                        .small()
                        .color(Color32::from_gray(150)),
                );
                ui.label(
                    RichText::new(anchor.name)
                        .size(26.0)
                        .strong()
                        .color(name_color),
                );
                ui.label(
                    RichText::new(status_label(self.store.mode()))
                        .color(Color32::from_gray(180)),
                );
                ui.add_space(2.0);
                ui.label(
                    RichText::new(anchor.description)
                        .small()
                        .italics()
                        .color(Color32::from_gray(140)),
                );
            });
    }

    fn draw_warp_button(&mut self, ctx: &egui::Context, now: Instant) {
        if self.store.mode() != WarpMode::Snapped || self.store.snapped_anchor().is_none() {
            return;
        }
        egui::Area::new(egui::Id::new("warp_button"))
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                let button = egui::Button::new(
                    RichText::new("WARP HERE").size(15.0).strong(),
                )
                .min_size(egui::vec2(190.0, 48.0))
                .rounding(24.0)
                .fill(Color32::from_rgba_unmultiplied(110, 170, 255, 40))
                .stroke(Stroke::new(1.0, Color32::from_white_alpha(90)));
                if ui.add(button).clicked() {
                    self.store.request_warp(now);
                }
            });
    }

    fn draw_arrival_stack(&mut self, ctx: &egui::Context, now: Instant) {
        if self.store.mode() != WarpMode::Arrived {
            // The hold surface is gone; end any rise in flight.
            if self.was_holding {
                self.store.stop_hold(now);
                self.was_holding = false;
            }
            return;
        }
        let stress = self.store.stress();
        let anchor = self.store.active_anchor();

        egui::Area::new(egui::Id::new("arrival_stack"))
            .anchor(Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
            .show(ctx, |ui| {
                ui.set_width(360.0);
                ui.vertical_centered_justified(|ui| {
                    let hold = egui::Button::new(
                        RichText::new(format!(
                            "HOLD TO EXPERIENCE TIME\n{}",
                            anchors::stage_copy(stress, Some(anchor))
                        ))
                        .size(13.0),
                    )
                    .min_size(egui::vec2(360.0, 56.0))
                    .rounding(18.0)
                    .fill(if self.was_holding {
                        Color32::from_rgba_unmultiplied(255, 255, 255, 36)
                    } else {
                        Color32::from_rgba_unmultiplied(255, 255, 255, 18)
                    });
                    let hold_response = ui.add(hold);
                    let holding = hold_response.is_pointer_button_down_on();
                    if holding && !self.was_holding {
                        self.store.start_hold(now);
                    } else if !holding && self.was_holding {
                        self.store.stop_hold(now);
                    }
                    self.was_holding = holding;

                    ui.add(
                        egui::ProgressBar::new(stress)
                            .desired_width(360.0)
                            .fill(Color32::from_rgb(0x9c, 0xe6, 0xe0)),
                    );
                    ui.add_space(6.0);

                    if ui
                        .button(if self.customizing {
                            "Close Customize"
                        } else {
                            "Customize Astro Boy"
                        })
                        .clicked()
                    {
                        self.customizing = !self.customizing;
                    }
                    ui.add_space(6.0);

                    egui::Frame::group(ui.style())
                        .fill(Color32::from_rgba_unmultiplied(8, 12, 24, 210))
                        .show(ui, |ui| {
                            bottom_sheet::show(ui, &mut self.store);
                        });
                });
            });
    }
}

impl eframe::App for WarpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.store.tick(now);
        if self.store.revision() != self.last_revision {
            self.last_revision = self.store.revision();
            self.track_transitions(now);
        }

        if self.store.mode() != WarpMode::Arrived && self.customizing {
            self.customizing = false;
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                self.route_pointer(ui, &response, now);
                self.scene.paint(&painter, response.rect, &self.store, now);
                self.draw_scale_rail(&painter, response.rect, now);
                self.draw_warp_flash(&painter, response.rect, now);
            });

        self.draw_header(ctx, now);
        self.draw_warp_button(ctx, now);
        self.draw_arrival_stack(ctx, now);
        if self.customizing {
            let mut open = true;
            customize::show(ctx, &mut self.store, &mut open);
            if !open {
                self.customizing = false;
            }
        }

        // The scene animates continuously.
        ctx.request_repaint();
    }
}

fn status_label(mode: WarpMode) -> &'static str {
    match mode {
        WarpMode::Scaling => "Zooming...",
        WarpMode::Warping => "Warping...",
        WarpMode::Arrived => "Arrived",
        WarpMode::Snapped => "Locked",
    }
}

fn blend_toward_white(color: Color32, t: f32) -> Color32 {
    let lerp = |x: u8| -> u8 { (x as f32 + (255.0 - x as f32) * t.clamp(0.0, 1.0)) as u8 };
    Color32::from_rgb(lerp(color.r()), lerp(color.g()), lerp(color.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(WarpMode::Scaling), "Zooming...");
        assert_eq!(status_label(WarpMode::Snapped), "Locked");
        assert_eq!(status_label(WarpMode::Warping), "Warping...");
        assert_eq!(status_label(WarpMode::Arrived), "Arrived");
    }

    #[test]
    fn test_blend_toward_white() {
        let gray = Color32::from_gray(100);
        assert_eq!(blend_toward_white(gray, 0.0), gray);
        assert_eq!(blend_toward_white(gray, 1.0), Color32::from_rgb(255, 255, 255));
    }
}
