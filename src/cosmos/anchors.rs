//! The anchor catalog: six fixed viewpoints along the normalized scale axis.
//!
//! The catalog is a read-only const table sorted by `scale_position`. Lookups
//! are total; the table is never empty.

use super::environment::Environment;

/// Backdrop variant painted behind the scene at each anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    LowOrbit,
    Earth,
    Moon,
    Solar,
    Stars,
    Galaxy,
}

/// One fixed viewpoint on the scale axis.
pub struct Anchor {
    pub id: &'static str,
    pub name: &'static str,
    /// Position along the normalized scale axis, in [0,1].
    pub scale_position: f32,
    /// Environment applied wholesale on arrival.
    pub defaults: Environment,
    /// Narrative lines indexed by stress tier (calm, strained, critical).
    pub stage_copy: [&'static str; 3],
    pub backdrop: Backdrop,
    pub description: &'static str,
}

pub const ANCHORS: [Anchor; 6] = [
    Anchor {
        id: "human-iss",
        name: "Human / ISS",
        scale_position: 0.05,
        defaults: Environment {
            gravity: 9.8,
            temperature_c: 22.0,
            radiation: 0.1,
        },
        stage_copy: [
            "Breathing feels steady. Systems nominal.",
            "Mild strain from rotation and noise.",
            "You steady yourself and recover.",
        ],
        backdrop: Backdrop::LowOrbit,
        description: "A handspan from home. The ISS hums above the blue marble.",
    },
    Anchor {
        id: "earth",
        name: "Earth",
        scale_position: 0.2,
        defaults: Environment {
            gravity: 9.8,
            temperature_c: 15.0,
            radiation: 0.2,
        },
        stage_copy: [
            "Air feels familiar. Your pulse slows.",
            "Grounding returns. You feel stable.",
            "No immediate danger. You regain calm.",
        ],
        backdrop: Backdrop::Earth,
        description: "Cloud swirls, ocean glow, a restless cradle.",
    },
    Anchor {
        id: "moon",
        name: "Moon",
        scale_position: 0.35,
        defaults: Environment {
            gravity: 1.62,
            temperature_c: -20.0,
            radiation: 0.45,
        },
        stage_copy: [
            "Breathing is controlled in the suit.",
            "Cold seeps in. Systems work harder.",
            "Consciousness fades in a few minutes.",
        ],
        backdrop: Backdrop::Moon,
        description: "A gray sentinel with sharp shadows and silent dust.",
    },
    Anchor {
        id: "solar-system",
        name: "Solar System",
        scale_position: 0.55,
        defaults: Environment {
            gravity: 0.0,
            temperature_c: -150.0,
            radiation: 0.6,
        },
        stage_copy: [
            "No sound. Only your heartbeat.",
            "Radiation pings begin to rise.",
            "Unconsciousness in under a minute.",
        ],
        backdrop: Backdrop::Solar,
        description: "Planets arc like beads on a vast gravitational string.",
    },
    Anchor {
        id: "nearby-stars",
        name: "Nearby Stars",
        scale_position: 0.75,
        defaults: Environment {
            gravity: 0.0,
            temperature_c: -230.0,
            radiation: 0.75,
        },
        stage_copy: [
            "Silence deepens. Vision narrows.",
            "Suit heaters strain to keep up.",
            "You black out within seconds.",
        ],
        backdrop: Backdrop::Stars,
        description: "Sunlight fades into a quiet neighborhood of embers.",
    },
    Anchor {
        id: "milky-way",
        name: "Milky Way",
        scale_position: 0.95,
        defaults: Environment {
            gravity: 0.0,
            temperature_c: -270.0,
            radiation: 0.9,
        },
        stage_copy: [
            "Space stretches. You feel weightless.",
            "Systems scream in faint alarms.",
            "Consciousness slips almost instantly.",
        ],
        backdrop: Backdrop::Galaxy,
        description: "A spiral city of stars, calm and unknowable.",
    },
];

/// First catalog entry; the session starts snapped here.
pub fn first() -> &'static Anchor {
    &ANCHORS[0]
}

/// Look up an anchor by id.
pub fn by_id(id: &str) -> Option<&'static Anchor> {
    ANCHORS.iter().find(|anchor| anchor.id == id)
}

/// Nearest anchor to the given scale position. Total over the non-empty
/// catalog; on an exact distance tie the earliest entry wins.
pub fn find_nearest(scale: f32) -> &'static Anchor {
    nearest_in(&ANCHORS, scale)
}

fn nearest_in(anchors: &[Anchor], scale: f32) -> &Anchor {
    anchors.iter().fold(&anchors[0], |nearest, anchor| {
        let dist = (anchor.scale_position - scale).abs();
        let nearest_dist = (nearest.scale_position - scale).abs();
        if dist < nearest_dist {
            anchor
        } else {
            nearest
        }
    })
}

/// Narrative line for the current stress level, drawn from the anchor's
/// stage copy when one is resolvable, generic copy otherwise.
pub fn stage_copy(stress: f32, anchor: Option<&Anchor>) -> &'static str {
    let tier = stress_tier(stress);
    match anchor {
        Some(anchor) => anchor.stage_copy[tier],
        None => match tier {
            0 => "Breathing feels normal...",
            1 => "Your suit systems strain...",
            _ => "You lose consciousness in 12 seconds.",
        },
    }
}

/// Stress tier: [0,0.33) -> 0, [0.33,0.66) -> 1, [0.66,1] -> 2.
pub fn stress_tier(stress: f32) -> usize {
    if stress >= 0.66 {
        2
    } else if stress >= 0.33 {
        1
    } else {
        0
    }
}
