//! Scene module: everything painted behind the overlay controls.
//!
//! `SceneView` owns the scene clock, the camera rig, the star layers, and
//! the arrival/hop/dust animation timestamps, and repaints from the store's
//! state each frame.

pub mod astronaut;
pub mod camera;
pub mod palette;
pub mod starfield;

use std::time::Instant;

use egui::{Color32, Painter, Pos2, Rect};

use crate::cosmos::Backdrop;
use crate::interaction::{WarpMode, WarpStore};
use camera::CameraRig;
use starfield::{Starfield, StreakField};

pub struct SceneView {
    started: Instant,
    last_frame: Instant,
    camera: CameraRig,
    starfield: Starfield,
    streaks: StreakField,
    drop_started: Option<Instant>,
    dust_started: Option<Instant>,
    hop_started: Option<Instant>,
    last_hop_token: u64,
}

impl SceneView {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_frame: now,
            camera: CameraRig::new(),
            starfield: Starfield::new(0x57A9F1E1D),
            streaks: StreakField::new(0x5B3A9),
            drop_started: None,
            dust_started: None,
            hop_started: None,
            last_hop_token: 0,
        }
    }

    /// Advance animation bookkeeping to `now`. Separated from painting so
    /// the arrival/hop lifecycle is testable without a painter.
    pub fn advance(&mut self, store: &WarpStore, now: Instant) {
        let dt = now
            .duration_since(self.last_frame)
            .as_secs_f32()
            .clamp(0.0, 0.1);
        self.last_frame = now;

        self.camera.update(store.stress());
        self.streaks
            .update(dt, store.mode() == WarpMode::Scaling);

        if store.mode() == WarpMode::Arrived {
            if self.drop_started.is_none() {
                self.drop_started = Some(now);
            }
        } else {
            self.drop_started = None;
            self.dust_started = None;
            self.hop_started = None;
            self.last_hop_token = store.hop_token();
        }

        if let Some(since) = self.drop_elapsed(now) {
            let t = since / astronaut::DROP_SECS;
            if t > astronaut::DUST_TRIGGER && self.dust_started.is_none() && t < 1.5 {
                self.dust_started = Some(now);
            }
        }
        if let Some(dust_since) = self.dust_elapsed(now) {
            if dust_since >= astronaut::DUST_SECS {
                self.dust_started = None;
            }
        }

        if store.mode() == WarpMode::Arrived && store.hop_token() != self.last_hop_token {
            self.last_hop_token = store.hop_token();
            self.hop_started = Some(now);
        }
        if let Some(hop_since) = self.hop_elapsed(now) {
            if hop_since >= astronaut::hop_duration(store.env().gravity) {
                self.hop_started = None;
            }
        }
    }

    pub fn paint(&mut self, painter: &Painter, rect: Rect, store: &WarpStore, now: Instant) {
        self.advance(store, now);
        let elapsed = now.duration_since(self.started).as_secs_f32();
        let env = store.env();

        paint_backdrop(painter, rect, store.active_anchor().backdrop);
        self.starfield.paint(painter, rect, elapsed, env.radiation);
        self.streaks.paint(painter, rect);

        if store.mode() == WarpMode::Arrived {
            let px = self.camera.view_scale(rect);
            let center = rect.center();
            let ground_y = center.y + 0.75 * px;

            // Ground plate.
            painter.rect_filled(
                Rect::from_center_size(
                    Pos2::new(center.x, ground_y + 0.06 * px),
                    egui::vec2(1.9 * px, 0.12 * px),
                ),
                0.06 * px,
                Color32::from_rgb(0x1f, 0x2d, 0x45),
            );

            if let Some(dust_since) = self.dust_elapsed(now) {
                astronaut::paint_dust(
                    painter,
                    Pos2::new(center.x, ground_y),
                    px,
                    dust_since / astronaut::DUST_SECS,
                );
            }

            let pose = astronaut::pose(
                elapsed,
                &env,
                store.stress(),
                self.drop_elapsed(now),
                self.hop_elapsed(now),
            );
            let base = Pos2::new(
                center.x + pose.x_off * px,
                ground_y - pose.y_off * px,
            );
            astronaut::paint(painter, base, px, &pose, store.suit_colors());
        }

        // Vignette deepens with radiation and stress.
        let haze = (0.2 + env.radiation * 0.5 + store.stress() * 0.15).clamp(0.0, 0.9);
        paint_vignette(painter, rect, haze);
    }

    fn drop_elapsed(&self, now: Instant) -> Option<f32> {
        self.drop_started
            .map(|since| now.duration_since(since).as_secs_f32())
    }

    fn dust_elapsed(&self, now: Instant) -> Option<f32> {
        self.dust_started
            .map(|since| now.duration_since(since).as_secs_f32())
    }

    fn hop_elapsed(&self, now: Instant) -> Option<f32> {
        self.hop_started
            .map(|since| now.duration_since(since).as_secs_f32())
    }
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new()
    }
}

fn backdrop_colors(backdrop: Backdrop) -> (Color32, Color32) {
    match backdrop {
        Backdrop::LowOrbit => (
            Color32::from_rgb(0x05, 0x07, 0x0f),
            Color32::from_rgb(0x12, 0x2b, 0x52),
        ),
        Backdrop::Earth => (
            Color32::from_rgb(0x04, 0x0a, 0x18),
            Color32::from_rgb(0x0d, 0x35, 0x4e),
        ),
        Backdrop::Moon => (
            Color32::from_rgb(0x06, 0x07, 0x0c),
            Color32::from_rgb(0x2a, 0x2d, 0x38),
        ),
        Backdrop::Solar => (
            Color32::from_rgb(0x05, 0x05, 0x10),
            Color32::from_rgb(0x26, 0x1c, 0x3f),
        ),
        Backdrop::Stars => (
            Color32::from_rgb(0x03, 0x04, 0x0c),
            Color32::from_rgb(0x10, 0x18, 0x34),
        ),
        Backdrop::Galaxy => (
            Color32::from_rgb(0x04, 0x03, 0x0e),
            Color32::from_rgb(0x1d, 0x10, 0x38),
        ),
    }
}

/// Vertical gradient painted as horizontal strips.
fn paint_backdrop(painter: &Painter, rect: Rect, backdrop: Backdrop) {
    const STRIPS: usize = 32;
    let (bottom, top) = backdrop_colors(backdrop);
    let strip_h = rect.height() / STRIPS as f32;
    for i in 0..STRIPS {
        let t = i as f32 / (STRIPS - 1) as f32;
        // Brightest band sits just above center, like a distant glow.
        let glow = 1.0 - (t - 0.4).abs() * 1.4;
        let color = blend(bottom, top, glow.clamp(0.0, 1.0));
        let strip = Rect::from_min_size(
            Pos2::new(rect.min.x, rect.min.y + i as f32 * strip_h),
            egui::vec2(rect.width(), strip_h + 1.0),
        );
        painter.rect_filled(strip, 0.0, color);
    }
}

fn paint_vignette(painter: &Painter, rect: Rect, strength: f32) {
    let color = Color32::from_rgb(0x02, 0x02, 0x08).gamma_multiply(strength * 0.6);
    let border = rect.height() * 0.18;
    painter.rect_filled(
        Rect::from_min_max(rect.min, Pos2::new(rect.max.x, rect.min.y + border)),
        0.0,
        color,
    );
    painter.rect_filled(
        Rect::from_min_max(Pos2::new(rect.min.x, rect.max.y - border), rect.max),
        0.0,
        color,
    );
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let lerp = |x: u8, y: u8| -> u8 { (x as f32 + (y as f32 - x as f32) * t) as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}
