//! The painter-drawn astronaut and its pose synthesis.
//!
//! Pose offsets are pure functions of elapsed time, the environment, and
//! stress, so the animation mix is unit-testable without a frame loop.
//! World units put the astronaut about 0.9 units tall.

use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::cosmos::Environment;
use crate::scene::palette::SuitColors;

/// Length of the arrival drop-in.
pub const DROP_SECS: f32 = 0.55;
/// Point in the drop at which the landing dust spawns.
pub const DUST_TRIGGER: f32 = 0.75;
/// Length of the dust puff fade.
pub const DUST_SECS: f32 = 0.6;

/// Pose offsets in world units, plus body scale factors.
#[derive(Debug, Clone, Copy)]
pub struct Pose {
    pub x_off: f32,
    pub y_off: f32,
    /// Sideways shear from shivering, radians-ish small angle.
    pub tilt: f32,
    /// Forward droop under heat, 0..1.
    pub lean: f32,
    pub width_scale: f32,
    pub height_scale: f32,
}

fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

pub fn ease_out_bounce(t: f32) -> f32 {
    let n1 = 7.5625;
    let d1 = 2.75;
    if t < 1.0 / d1 {
        n1 * t * t
    } else if t < 2.0 / d1 {
        let t = t - 1.5 / d1;
        n1 * t * t + 0.75
    } else if t < 2.5 / d1 {
        let t = t - 2.25 / d1;
        n1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / d1;
        n1 * t * t + 0.984375
    }
}

/// How high the astronaut floats versus how tightly it is pinned down.
fn low_gravity_factor(gravity: f32) -> f32 {
    let ratio = (gravity / 9.8).clamp(0.0, 1.6);
    let gravity_t = (ratio / 1.2).clamp(0.0, 1.0);
    (1.0 - gravity_t).clamp(0.0, 1.0)
}

/// Hop arc length in seconds; floatier in low gravity.
pub fn hop_duration(gravity: f32) -> f32 {
    lerp(0.35, 0.8, low_gravity_factor(gravity))
}

/// Synthesize the pose for the current instant.
///
/// `drop_elapsed` and `hop_elapsed` are seconds since arrival / since the
/// last hop trigger, when those animations are running.
pub fn pose(
    elapsed: f32,
    env: &Environment,
    stress: f32,
    drop_elapsed: Option<f32>,
    hop_elapsed: Option<f32>,
) -> Pose {
    let low_gravity = low_gravity_factor(env.gravity);
    let gravity_t = 1.0 - low_gravity;

    let bob_speed = lerp(0.35, 1.6, gravity_t);
    let bob_amp = lerp(0.18, 0.07, gravity_t);
    let bob = (elapsed * bob_speed).sin() * bob_amp;
    let drift = ((elapsed * 0.28).sin() * 0.05 + (elapsed * 0.18).cos() * 0.03) * low_gravity;

    let cold_shake = ((0.0 - env.temperature_c) / 80.0).clamp(0.0, 1.0);
    let hot_droop = ((env.temperature_c - 40.0) / 80.0).clamp(0.0, 1.0);
    let shake = (elapsed * 18.0).sin() * 0.02 * cold_shake;

    let mut drop_offset = 0.0;
    let mut arrival_squash = 0.0;
    if let Some(since) = drop_elapsed {
        let t = (since / DROP_SECS).min(1.0);
        drop_offset = (1.0 - ease_out_bounce(t)) * 1.0;
        if t > 0.65 {
            arrival_squash = (((t - 0.65) / 0.35) * std::f32::consts::PI).sin() * 0.12;
        }
    }

    let mut hop_offset = 0.0;
    if let Some(since) = hop_elapsed {
        let duration = hop_duration(env.gravity);
        let t = since / duration;
        if t < 1.0 {
            let height = lerp(0.18, 0.6, low_gravity);
            hop_offset = (std::f32::consts::PI * t).sin() * height;
        }
    }

    let breath_speed = 1.4 + stress * 2.4;
    let breath = (elapsed * breath_speed).sin() * (0.02 + stress * 0.02);
    let posture_squash = stress * 0.08 + arrival_squash;
    let posture_stretch = stress * 0.05 + arrival_squash * 0.6;

    Pose {
        x_off: shake + drift,
        y_off: bob + drop_offset + hop_offset,
        tilt: shake * 0.6,
        lean: hot_droop,
        width_scale: 1.0 + posture_stretch,
        height_scale: 1.0 - posture_squash + breath,
    }
}

/// Draw the astronaut with its feet anchored at `base` (screen pixels).
/// `px` is pixels per world unit.
pub fn paint(painter: &Painter, base: Pos2, px: f32, pose: &Pose, colors: &SuitColors) {
    let w = pose.width_scale;
    let h = pose.height_scale;
    // Shear: the head drifts sideways more than the feet.
    let shear = pose.tilt * px * 0.9;
    let lean = pose.lean;

    let at = |x: f32, y: f32| -> Pos2 {
        let sway = shear * (y / 0.9);
        Pos2::new(
            base.x + (x * w) * px + sway + lean * y * 0.25 * px,
            base.y - (y * h) * px - lean * y * 0.12 * px,
        )
    };
    let size = |sx: f32, sy: f32| Vec2::new(sx * w * px, sy * h * px);

    // Backpack sits behind the torso.
    painter.rect_filled(
        Rect::from_center_size(at(-0.13, 0.48), size(0.26, 0.4)),
        0.08 * px,
        colors.backpack,
    );

    // Legs and boots.
    for side in [-1.0f32, 1.0] {
        painter.rect_filled(
            Rect::from_center_size(at(side * 0.09, 0.14), size(0.12, 0.26)),
            0.03 * px,
            colors.suit,
        );
        painter.rect_filled(
            Rect::from_center_size(at(side * 0.1, 0.025), size(0.16, 0.09)),
            0.03 * px,
            colors.boots,
        );
    }

    // Torso.
    painter.rect_filled(
        Rect::from_center_size(at(0.0, 0.45), size(0.34, 0.44)),
        0.1 * px,
        colors.suit,
    );

    // Arms and gloves.
    for side in [-1.0f32, 1.0] {
        painter.rect_filled(
            Rect::from_center_size(at(side * 0.23, 0.46), size(0.1, 0.32)),
            0.05 * px,
            colors.suit,
        );
        painter.circle_filled(at(side * 0.23, 0.27), 0.055 * w * px, colors.gloves);
    }

    // Belt across the torso bottom.
    painter.rect_filled(
        Rect::from_center_size(at(0.0, 0.28), size(0.34, 0.06)),
        0.02 * px,
        colors.belt,
    );

    // Accent chest stripe.
    painter.rect_filled(
        Rect::from_center_size(at(0.0, 0.52), size(0.26, 0.045)),
        0.02 * px,
        colors.accents,
    );

    // Helmet, visor, accent band.
    let helmet_center = at(0.0, 0.78);
    painter.circle_filled(helmet_center, 0.17 * w * px, colors.helmet);
    painter.circle_stroke(
        helmet_center,
        0.17 * w * px,
        Stroke::new(0.02 * px, colors.accents),
    );
    let visor_center = helmet_center + Vec2::new(0.02 * px + lean * 0.05 * px, -0.01 * px);
    painter.circle_filled(
        visor_center,
        0.115 * w * px,
        visor_tint(colors.visor),
    );
}

/// Landing dust puff: expanding, fading disc at the feet.
pub fn paint_dust(painter: &Painter, base: Pos2, px: f32, dust_t: f32) {
    let t = dust_t.clamp(0.0, 1.0);
    let radius = lerp(0.4, 1.4, t) * 0.45 * px;
    let alpha = lerp(0.25, 0.0, t);
    let color = Color32::from_rgb(0xb7, 0xc3, 0xd6).gamma_multiply(alpha);
    painter.circle_filled(Pos2::new(base.x, base.y + 0.04 * px), radius, color);
}

fn visor_tint(visor: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(visor.r(), visor.g(), visor.b(), 200)
}
