use egui::Rect;

/// Stress-reactive framing: a perspective camera eased toward a narrower
/// field of view and a closer dolly as stress rises.
pub struct CameraRig {
    fov_y_deg: f32,
    dolly: f32,
}

const BASE_FOV_DEG: f32 = 50.0;
const BASE_DOLLY: f32 = 3.4;
/// Per-frame easing factor toward the targets.
const EASE: f32 = 0.08;

impl CameraRig {
    pub fn new() -> Self {
        Self {
            fov_y_deg: BASE_FOV_DEG,
            dolly: BASE_DOLLY,
        }
    }

    /// Ease toward the stress-dependent framing. One call per frame.
    pub fn update(&mut self, stress: f32) {
        let target_fov = BASE_FOV_DEG - stress * 4.0;
        let target_dolly = BASE_DOLLY - stress * 0.35;
        self.fov_y_deg += (target_fov - self.fov_y_deg) * EASE;
        self.dolly += (target_dolly - self.dolly) * EASE;
    }

    /// Pixels per world unit at the subject plane for the given viewport.
    pub fn view_scale(&self, rect: Rect) -> f32 {
        let half_fov = (self.fov_y_deg.to_radians() * 0.5).tan();
        rect.height() / (2.0 * self.dolly * half_fov.max(1e-6))
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
