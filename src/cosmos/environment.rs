use super::anchors::Anchor;

/// Simulated local conditions at the current viewpoint.
///
/// The model itself accepts any real value; range limits ([0,20] m/s²,
/// [-270,120] °C, [0,1] radiation) live in the adjustment sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Environment {
    pub gravity: f32,
    pub temperature_c: f32,
    pub radiation: f32,
}

/// Partial environment update; `None` fields are left unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvPatch {
    pub gravity: Option<f32>,
    pub temperature_c: Option<f32>,
    pub radiation: Option<f32>,
}

/// Names a single environment field for slider-style updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvField {
    Gravity,
    TemperatureC,
    Radiation,
}

impl Environment {
    /// Merge the provided fields into the current state.
    pub fn apply_patch(&mut self, patch: EnvPatch) {
        if let Some(gravity) = patch.gravity {
            self.gravity = gravity;
        }
        if let Some(temperature_c) = patch.temperature_c {
            self.temperature_c = temperature_c;
        }
        if let Some(radiation) = patch.radiation {
            self.radiation = radiation;
        }
    }

    /// Replace all three fields with the anchor's defaults.
    pub fn apply_anchor_defaults(&mut self, anchor: &Anchor) {
        *self = anchor.defaults;
    }
}

impl EnvPatch {
    /// A patch touching a single named field.
    pub fn single(field: EnvField, value: f32) -> Self {
        match field {
            EnvField::Gravity => Self {
                gravity: Some(value),
                ..Default::default()
            },
            EnvField::TemperatureC => Self {
                temperature_c: Some(value),
                ..Default::default()
            },
            EnvField::Radiation => Self {
                radiation: Some(value),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmos::anchors;

    #[test]
    fn test_patch_merges_only_present_fields() {
        let mut env = Environment {
            gravity: 9.8,
            temperature_c: 22.0,
            radiation: 0.1,
        };

        env.apply_patch(EnvPatch {
            temperature_c: Some(-40.0),
            ..Default::default()
        });

        assert_eq!(env.gravity, 9.8);
        assert_eq!(env.temperature_c, -40.0);
        assert_eq!(env.radiation, 0.1);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut env = Environment {
            gravity: 1.62,
            temperature_c: -20.0,
            radiation: 0.45,
        };
        let before = env;

        env.apply_patch(EnvPatch::default());
        assert_eq!(env, before);
    }

    #[test]
    fn test_anchor_defaults_replace_wholesale() {
        let mut env = Environment {
            gravity: 3.0,
            temperature_c: 100.0,
            radiation: 0.99,
        };
        let moon = anchors::by_id("moon").unwrap();

        env.apply_anchor_defaults(moon);
        assert_eq!(env, moon.defaults);
    }

    #[test]
    fn test_single_field_patch() {
        let mut env = Environment {
            gravity: 0.0,
            temperature_c: 0.0,
            radiation: 0.0,
        };
        env.apply_patch(EnvPatch::single(EnvField::Gravity, 12.5));
        env.apply_patch(EnvPatch::single(EnvField::Radiation, 0.7));

        assert_eq!(env.gravity, 12.5);
        assert_eq!(env.temperature_c, 0.0);
        assert_eq!(env.radiation, 0.7);
    }
}
