//! Suit colors and the preset palettes for the customize panel.

use egui::Color32;

/// Colors for each paintable part of the astronaut's suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitColors {
    pub helmet: Color32,
    pub visor: Color32,
    pub suit: Color32,
    pub gloves: Color32,
    pub boots: Color32,
    pub belt: Color32,
    pub backpack: Color32,
    pub accents: Color32,
}

/// Partial suit recolor; `None` parts are left unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuitPatch {
    pub helmet: Option<Color32>,
    pub visor: Option<Color32>,
    pub suit: Option<Color32>,
    pub gloves: Option<Color32>,
    pub boots: Option<Color32>,
    pub belt: Option<Color32>,
    pub backpack: Option<Color32>,
    pub accents: Option<Color32>,
}

impl SuitPatch {
    pub fn is_empty(&self) -> bool {
        self.helmet.is_none()
            && self.visor.is_none()
            && self.suit.is_none()
            && self.gloves.is_none()
            && self.boots.is_none()
            && self.belt.is_none()
            && self.backpack.is_none()
            && self.accents.is_none()
    }
}

impl SuitColors {
    /// The default look, matching the Classic palette.
    pub fn classic() -> Self {
        PALETTES[0].colors
    }

    pub fn apply(&mut self, patch: SuitPatch) {
        if let Some(c) = patch.helmet {
            self.helmet = c;
        }
        if let Some(c) = patch.visor {
            self.visor = c;
        }
        if let Some(c) = patch.suit {
            self.suit = c;
        }
        if let Some(c) = patch.gloves {
            self.gloves = c;
        }
        if let Some(c) = patch.boots {
            self.boots = c;
        }
        if let Some(c) = patch.belt {
            self.belt = c;
        }
        if let Some(c) = patch.backpack {
            self.backpack = c;
        }
        if let Some(c) = patch.accents {
            self.accents = c;
        }
    }
}

/// One preset suit look.
pub struct SuitPalette {
    pub id: &'static str,
    pub name: &'static str,
    pub colors: SuitColors,
}

pub const PALETTES: [SuitPalette; 4] = [
    SuitPalette {
        id: "classic",
        name: "Classic",
        colors: SuitColors {
            helmet: Color32::from_rgb(0xf4, 0xc1, 0x3c),
            visor: Color32::from_rgb(0xd7, 0xec, 0xff),
            suit: Color32::from_rgb(0xf4, 0xc1, 0x3c),
            gloves: Color32::from_rgb(0xf7, 0xf1, 0xea),
            boots: Color32::from_rgb(0x5a, 0x3a, 0xd1),
            belt: Color32::from_rgb(0x5a, 0x3a, 0xd1),
            backpack: Color32::from_rgb(0xe1, 0xe6, 0xef),
            accents: Color32::from_rgb(0x5a, 0x3a, 0xd1),
        },
    },
    SuitPalette {
        id: "arctic",
        name: "Arctic",
        colors: SuitColors {
            helmet: Color32::from_rgb(0xd9, 0xf1, 0xff),
            visor: Color32::from_rgb(0xb6, 0xd9, 0xff),
            suit: Color32::from_rgb(0xd9, 0xf1, 0xff),
            gloves: Color32::from_rgb(0xee, 0xf6, 0xff),
            boots: Color32::from_rgb(0x2b, 0x6d, 0xff),
            belt: Color32::from_rgb(0x2b, 0x6d, 0xff),
            backpack: Color32::from_rgb(0xcf, 0xe4, 0xff),
            accents: Color32::from_rgb(0x2b, 0x6d, 0xff),
        },
    },
    SuitPalette {
        id: "ember",
        name: "Ember",
        colors: SuitColors {
            helmet: Color32::from_rgb(0xff, 0x6b, 0x4a),
            visor: Color32::from_rgb(0xff, 0xd0, 0xb6),
            suit: Color32::from_rgb(0xff, 0x6b, 0x4a),
            gloves: Color32::from_rgb(0xff, 0xe1, 0xd6),
            boots: Color32::from_rgb(0x1b, 0x1b, 0x24),
            belt: Color32::from_rgb(0x1b, 0x1b, 0x24),
            backpack: Color32::from_rgb(0xf7, 0xb2, 0x9a),
            accents: Color32::from_rgb(0x1b, 0x1b, 0x24),
        },
    },
    SuitPalette {
        id: "jade",
        name: "Jade",
        colors: SuitColors {
            helmet: Color32::from_rgb(0x4d, 0xd6, 0xa5),
            visor: Color32::from_rgb(0xc7, 0xf8, 0xe6),
            suit: Color32::from_rgb(0x4d, 0xd6, 0xa5),
            gloves: Color32::from_rgb(0xe1, 0xfb, 0xf1),
            boots: Color32::from_rgb(0x0f, 0x1f, 0x2b),
            belt: Color32::from_rgb(0x0f, 0x1f, 0x2b),
            backpack: Color32::from_rgb(0xa9, 0xf1, 0xd4),
            accents: Color32::from_rgb(0x0f, 0x1f, 0x2b),
        },
    },
];
