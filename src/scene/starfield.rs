//! Backdrop motion layers: seeded star layers and the speed streaks that
//! fade in while the user is scrubbing the scale axis.

use egui::{Color32, Painter, Pos2, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

struct Star {
    /// Angle around the viewport center, radians.
    angle: f32,
    /// Distance from center as a fraction of the viewport half-diagonal.
    radius: f32,
    size: f32,
    brightness: f32,
}

struct StarLayer {
    stars: Vec<Star>,
    /// Radians per second of slow rotation; sign sets the direction.
    spin: f32,
    base_size: f32,
    base_alpha: f32,
}

impl StarLayer {
    fn generate(rng: &mut StdRng, count: usize, spin: f32, base_size: f32, base_alpha: f32) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                angle: rng.gen_range(0.0..std::f32::consts::TAU),
                radius: rng.gen_range(0.05f32..1.0).sqrt(),
                size: rng.gen_range(0.6f32..1.4),
                brightness: rng.gen_range(0.35f32..1.0),
            })
            .collect();
        Self {
            stars,
            spin,
            base_size,
            base_alpha,
        }
    }

    fn paint(&self, painter: &Painter, rect: Rect, elapsed: f32, radiation: f32) {
        let center = rect.center();
        let half_diagonal = 0.5 * rect.size().length();
        // Radiation pushes the sky brighter and bluer.
        let glow = 1.0 + radiation * 1.5;
        let saturation = 0.2 + radiation * 0.6;
        let turn = elapsed * self.spin;

        for star in &self.stars {
            let angle = star.angle + turn;
            let distance = star.radius * half_diagonal;
            let pos = Pos2::new(
                center.x + angle.cos() * distance,
                center.y + angle.sin() * distance * 0.8,
            );
            if !rect.contains(pos) {
                continue;
            }
            let alpha = (self.base_alpha * star.brightness * glow).min(1.0);
            let warm = 255.0 - saturation * 70.0;
            let color = Color32::from_rgb(warm as u8, (warm + 10.0).min(255.0) as u8, 255)
                .gamma_multiply(alpha);
            painter.circle_filled(pos, star.size * self.base_size, color);
        }
    }
}

pub struct Starfield {
    distant: StarLayer,
    far: StarLayer,
    near: StarLayer,
}

impl Starfield {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self {
            distant: StarLayer::generate(&mut rng, 600, 0.004, 0.7, 0.35),
            far: StarLayer::generate(&mut rng, 700, 0.015, 1.0, 0.25),
            near: StarLayer::generate(&mut rng, 320, -0.03, 1.6, 0.45),
        }
    }

    pub fn paint(&self, painter: &Painter, rect: Rect, elapsed: f32, radiation: f32) {
        self.distant.paint(painter, rect, elapsed, radiation);
        self.far.paint(painter, rect, elapsed, radiation);
        self.near.paint(painter, rect, elapsed, radiation);
    }
}

// ---------------------------------------------------------------------------
// Speed streaks
// ---------------------------------------------------------------------------

struct Streak {
    x: f32,
    y: f32,
    /// Depth along the travel axis; negative is far away.
    z: f32,
    length: f32,
    speed: f32,
}

/// Line streaks that sell motion while SCALING: opacity eases toward a high
/// target and depth advances 16x faster than at rest.
pub struct StreakField {
    streaks: Vec<Streak>,
    opacity: f32,
    rng: StdRng,
}

const STREAK_COUNT: usize = 220;
const STREAK_RESET_Z: f32 = -70.0;
const STREAK_NEAR_Z: f32 = 2.0;

impl StreakField {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let streaks = (0..STREAK_COUNT)
            .map(|_| Streak {
                x: rng.gen_range(-9.0..9.0),
                y: rng.gen_range(-5.0..5.0),
                z: -20.0 - rng.gen_range(0.0..50.0),
                length: 0.6 + rng.gen_range(0.0..1.2),
                speed: 0.6 + rng.gen_range(0.0..1.4),
            })
            .collect();
        Self {
            streaks,
            opacity: 0.0,
            rng,
        }
    }

    /// Advance depth and opacity. `scaling` is whether the user is actively
    /// scrubbing the scale axis.
    pub fn update(&mut self, dt: f32, scaling: bool) {
        let target = if scaling { 0.55 } else { 0.12 };
        self.opacity += (target - self.opacity) * 0.1;

        if self.opacity <= 0.01 {
            return;
        }
        let boost = if scaling { 16.0 } else { 2.0 };
        for streak in &mut self.streaks {
            let next_z = streak.z + streak.speed * boost * dt;
            if next_z > STREAK_NEAR_Z {
                streak.x = self.rng.gen_range(-9.0..9.0);
                streak.y = self.rng.gen_range(-5.0..5.0);
                streak.z = STREAK_RESET_Z;
            } else {
                streak.z = next_z;
            }
        }
    }

    pub fn paint(&self, painter: &Painter, rect: Rect) {
        if self.opacity <= 0.01 {
            return;
        }
        let center = rect.center();
        let unit = rect.height() * 0.09;
        let color = Color32::from_rgb(0xe9, 0xf6, 0xff).gamma_multiply(self.opacity);

        for streak in &self.streaks {
            let head = project(streak.x, streak.y, streak.z, center, unit);
            let tail = project(streak.x, streak.y, streak.z - streak.length, center, unit);
            let thickness = (1.8 / (1.0 - streak.z * 0.05)).clamp(0.4, 1.8);
            painter.line_segment([head, tail], (thickness, color));
        }
    }

    #[cfg(test)]
    fn max_z(&self) -> f32 {
        self.streaks.iter().map(|s| s.z).fold(f32::MIN, f32::max)
    }
}

/// Simple perspective projection onto the viewport; `z` in (-inf, 2].
fn project(x: f32, y: f32, z: f32, center: Pos2, unit: f32) -> Pos2 {
    let focal = 2.5;
    let persp = focal / (focal - z).max(0.5);
    Pos2::new(center.x + x * unit * persp, center.y + y * unit * persp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starfield_is_deterministic_per_seed() {
        let a = Starfield::new(7);
        let b = Starfield::new(7);
        assert_eq!(a.near.stars.len(), b.near.stars.len());
        for (x, y) in a.near.stars.iter().zip(b.near.stars.iter()) {
            assert_eq!(x.angle, y.angle);
            assert_eq!(x.radius, y.radius);
        }
    }

    #[test]
    fn test_streak_opacity_eases_toward_mode_target() {
        let mut field = StreakField::new(3);
        for _ in 0..200 {
            field.update(1.0 / 60.0, true);
        }
        assert!((field.opacity - 0.55).abs() < 0.01);

        for _ in 0..200 {
            field.update(1.0 / 60.0, false);
        }
        assert!((field.opacity - 0.12).abs() < 0.01);
    }

    #[test]
    fn test_streaks_recycle_behind_the_viewer() {
        let mut field = StreakField::new(3);
        field.opacity = 0.5;
        for _ in 0..2000 {
            field.update(1.0 / 30.0, true);
        }
        assert!(field.max_z() <= STREAK_NEAR_Z);
    }

    #[test]
    fn test_projection_shrinks_with_depth() {
        let center = Pos2::new(100.0, 100.0);
        let near = project(1.0, 0.0, 0.0, center, 50.0);
        let far = project(1.0, 0.0, -40.0, center, 50.0);
        assert!((near.x - center.x) > (far.x - center.x));
    }
}
