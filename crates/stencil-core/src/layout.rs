//! Canvas presets and bounds reconciliation.
//!
//! Canvas sizes are named presets in 72-DPI pixels. Switching presets keeps
//! elements on the canvas by shifting each one the minimum amount needed.
//! Nothing prevents shifted elements from overlapping.

use crate::model::*;
use serde::{Deserialize, Serialize};

/// Letter-size flyer, 8.5 × 11 in.
pub const FLYER: CanvasSize = CanvasSize::new(612.0, 792.0);
/// 18 × 24 in poster.
pub const POSTER: CanvasSize = CanvasSize::new(1296.0, 1728.0);
/// Square social media post.
pub const SOCIAL: CanvasSize = CanvasSize::new(1080.0, 1080.0);

/// Used for unrecognized preset names.
pub const DEFAULT_CANVAS: CanvasSize = FLYER;

/// The named canvas sizes offered by the size selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasPreset {
    #[default]
    Flyer,
    Poster,
    Social,
}

impl CanvasPreset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "flyer" => Some(Self::Flyer),
            "poster" => Some(Self::Poster),
            "social" => Some(Self::Social),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Flyer => "flyer",
            Self::Poster => "poster",
            Self::Social => "social",
        }
    }

    pub fn size(self) -> CanvasSize {
        match self {
            Self::Flyer => FLYER,
            Self::Poster => POSTER,
            Self::Social => SOCIAL,
        }
    }
}

/// Resolve a selector value to explicit dimensions, falling back to the
/// default canvas for anything unrecognized.
pub fn resolve_canvas_size(name: &str) -> CanvasSize {
    match CanvasPreset::from_name(name) {
        Some(preset) => preset.size(),
        None => {
            log::debug!("unknown canvas preset {name:?}, using default");
            DEFAULT_CANVAS
        }
    }
}

/// Position for a box of `size` moved toward `target`, clamped so the box
/// stays inside the canvas. Boxes larger than the canvas pin to 0.
pub fn clamp_to_canvas(target: Position, size: Size, canvas: CanvasSize) -> Position {
    Position {
        x: target.x.min(canvas.width - size.width).max(0.0),
        y: target.y.min(canvas.height - size.height).max(0.0),
    }
}

/// Apply `canvas` to the scene and pull back every element that now
/// overflows its right or bottom edge. Returns how many elements moved.
pub fn reconcile(scene: &mut Scene, canvas: CanvasSize) -> usize {
    scene.canvas = canvas;
    let mut moved = 0;

    for element in &mut scene.elements {
        let mut x = element.position.x;
        let mut y = element.position.y;

        if x + element.size.width > canvas.width {
            x = canvas.width - element.size.width;
        }
        if y + element.size.height > canvas.height {
            y = canvas.height - element.size.height;
        }

        let fitted = Position::new(x.max(0.0), y.max(0.0));
        if fitted != element.position {
            log::trace!(
                "RECONCILE {} ({}, {}) -> ({}, {})",
                element.id,
                element.position.x,
                element.position.y,
                fitted.x,
                fitted.y
            );
            element.position = fitted;
            moved += 1;
        }
    }

    log::debug!(
        "canvas now {}x{}, {moved} element(s) repositioned",
        canvas.width,
        canvas.height
    );
    moved
}
