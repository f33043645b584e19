//! Scene → display list.
//!
//! The host surface draws whatever it receives here, in order. Selection
//! markers and the resize handle are editor chrome: they appear in the
//! editing list but never in the export list.

use crate::hit::{handle_rect, to_rect};
use kurbo::Rect;
use serde::Serialize;
use smallvec::{SmallVec, smallvec};
use stencil_core::{Color, Element, ElementId, ElementKind, Scene};

/// Background of the canvas itself.
pub const CANVAS_BACKGROUND: Color = Color::WHITE;

/// One draw operation for the host surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DrawCmd {
    Canvas {
        rect: Rect,
        color: Color,
    },
    FillRect {
        id: ElementId,
        rect: Rect,
        color: Color,
    },
    Text {
        id: ElementId,
        rect: Rect,
        content: String,
        color: Color,
        font_size: f32,
    },
    Image {
        id: ElementId,
        rect: Rect,
        src: String,
        alt: String,
    },
    SelectionOutline {
        id: ElementId,
        rect: Rect,
    },
    ResizeHandle {
        id: ElementId,
        rect: Rect,
    },
}

/// Editing view: every element plus chrome for the selected one.
pub fn build_display_list(
    scene: &Scene,
    selected: Option<ElementId>,
    handle_size: f32,
) -> Vec<DrawCmd> {
    let mut out = Vec::with_capacity(scene.len() + 3);
    out.push(canvas_cmd(scene));
    for el in scene.elements() {
        out.extend(element_cmds(el));
    }
    if let Some(el) = selected.and_then(|id| scene.element(id)) {
        let rect = to_rect(&el.bounds());
        out.push(DrawCmd::SelectionOutline { id: el.id, rect });
        out.push(DrawCmd::ResizeHandle {
            id: el.id,
            rect: handle_rect(rect, handle_size),
        });
    }
    out
}

/// Export view: the scene with all editor chrome stripped.
pub fn build_export_list(scene: &Scene) -> Vec<DrawCmd> {
    let mut out = Vec::with_capacity(scene.len() + 1);
    out.push(canvas_cmd(scene));
    for el in scene.elements() {
        out.extend(element_cmds(el));
    }
    out
}

fn canvas_cmd(scene: &Scene) -> DrawCmd {
    DrawCmd::Canvas {
        rect: Rect::new(0.0, 0.0, scene.canvas.width as f64, scene.canvas.height as f64),
        color: CANVAS_BACKGROUND,
    }
}

fn element_cmds(el: &Element) -> SmallVec<[DrawCmd; 2]> {
    let rect = to_rect(&el.bounds());
    match &el.kind {
        ElementKind::Text { content } => {
            log::trace!("TEXT {} {:?} at ({}, {})", el.id, content, rect.x0, rect.y0);
            smallvec![DrawCmd::Text {
                id: el.id,
                rect,
                content: content.clone(),
                color: el.style.color.unwrap_or(Color::BLACK),
                font_size: el.font_size().unwrap_or_default(),
            }]
        }
        ElementKind::Shape => match el.style.color {
            Some(color) => smallvec![DrawCmd::FillRect {
                id: el.id,
                rect,
                color
            }],
            None => SmallVec::new(),
        },
        ElementKind::Image { src, alt } => {
            let mut cmds = SmallVec::new();
            // Images take the fill color as a backdrop behind the picture.
            if let Some(color) = el.style.color {
                cmds.push(DrawCmd::FillRect {
                    id: el.id,
                    rect,
                    color,
                });
            }
            cmds.push(DrawCmd::Image {
                id: el.id,
                rect,
                src: src.clone(),
                alt: alt.clone(),
            });
            cmds
        }
    }
}
