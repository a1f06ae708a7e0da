//! Hover and press visuals of skill tiles and project buttons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which group an interactive tile belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileKind {
    /// Heading of a skill list entry
    Skill,
    /// "View details" button of a project card
    Project,
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileKind::Skill => write!(f, "skill"),
            TileKind::Project => write!(f, "project"),
        }
    }
}

impl std::str::FromStr for TileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "skill" | "skills" => Ok(TileKind::Skill),
            "project" | "projects" => Ok(TileKind::Project),
            _ => Err(format!("Invalid TileKind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId {
    pub kind: TileKind,
    pub index: usize,
}

impl TileId {
    pub fn skill(index: usize) -> Self {
        Self {
            kind: TileKind::Skill,
            index,
        }
    }

    pub fn project(index: usize) -> Self {
        Self {
            kind: TileKind::Project,
            index,
        }
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.index)
    }
}

/// Background tint of a skill tile. Project buttons keep their own background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tint {
    Base,
    Highlight,
    Pressed,
}

/// Typed visual state of a tile; the surface maps it to styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TileVisual {
    /// Vertical offset in px; negative lifts the tile
    pub lift: f32,
    pub scale: f32,
    pub tint: Tint,
}

/// Pointer state of one tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileState {
    pub hovered: bool,
    pub pressed: bool,
}

impl TileState {
    /// Visual for the current pointer state; a press wins over hover
    pub fn visual(&self, kind: TileKind) -> TileVisual {
        match (kind, self.pressed, self.hovered) {
            (TileKind::Skill, true, _) => TileVisual {
                lift: -3.0,
                scale: 0.98,
                tint: Tint::Pressed,
            },
            (TileKind::Skill, false, true) => TileVisual {
                lift: -5.0,
                scale: 1.0,
                tint: Tint::Highlight,
            },
            (TileKind::Skill, false, false) => TileVisual {
                lift: 0.0,
                scale: 1.0,
                tint: Tint::Base,
            },
            (TileKind::Project, true, _) => TileVisual {
                lift: 0.0,
                scale: 0.98,
                tint: Tint::Base,
            },
            (TileKind::Project, false, true) => TileVisual {
                lift: -3.0,
                scale: 1.0,
                tint: Tint::Base,
            },
            (TileKind::Project, false, false) => TileVisual {
                lift: 0.0,
                scale: 1.0,
                tint: Tint::Base,
            },
        }
    }
}
