//! Value types shared between the engine and the presentation layer.

use serde::{Deserialize, Serialize};

use crate::enums::CharacterKind;

/// Character skin injected at game start.
///
/// The engine never inspects it; it is carried through to snapshots so the
/// presentation layer knows what to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSkin {
    pub kind: CharacterKind,
    /// Image reference (data URL or path) for `CharacterKind::Custom`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_image: Option<String>,
}

impl CharacterSkin {
    pub fn preset(kind: CharacterKind) -> Self {
        Self {
            kind,
            custom_image: None,
        }
    }

    pub fn custom(image: impl Into<String>) -> Self {
        Self {
            kind: CharacterKind::Custom,
            custom_image: Some(image.into()),
        }
    }

    /// The preset to draw. A custom skin without an image falls back to the mole.
    pub fn display_kind(&self) -> CharacterKind {
        match (self.kind, &self.custom_image) {
            (CharacterKind::Custom, None) => CharacterKind::Mole,
            (kind, _) => kind,
        }
    }
}

/// Flags for one board slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotState {
    /// A target is showing.
    pub occupied: bool,
    /// The showing target was hit and is in its dwell window.
    pub struck: bool,
}

impl SlotState {
    /// True when a hit on this slot would score.
    pub fn is_hittable(&self) -> bool {
        self.occupied && !self.struck
    }
}

/// Engine clock (milliseconds since the engine was created).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameTime {
    pub now_ms: u64,
}

impl GameTime {
    pub fn after(&self, delay_ms: u64) -> u64 {
        self.now_ms.saturating_add(delay_ms)
    }
}
