//! Hit testing: point → element (body or resize handle).
//!
//! `HitRegions::build` derives the interactive regions of every element
//! from plain scene data. It is the one place interaction bindings come
//! from, so a scene restored from history or storage is interactive again
//! as soon as the regions are rebuilt.

use kurbo::{Point, Rect};
use stencil_core::{Bounds, ElementId, Scene};

/// Side length of the square resize handle, in canvas pixels.
pub const DEFAULT_HANDLE_SIZE: f32 = 10.0;

/// What a pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The element itself; starts a drag.
    Body(ElementId),
    /// The bottom-right resize handle; starts a resize.
    ResizeHandle(ElementId),
}

impl HitTarget {
    pub fn element(&self) -> ElementId {
        match self {
            HitTarget::Body(id) | HitTarget::ResizeHandle(id) => *id,
        }
    }
}

/// Interactive regions of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub id: ElementId,
    pub body: Rect,
    pub handle: Rect,
}

/// Regions for a whole scene, in z-order (bottom first).
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    regions: Vec<HitRegion>,
}

pub fn to_rect(b: &Bounds) -> Rect {
    Rect::new(
        b.x as f64,
        b.y as f64,
        b.right() as f64,
        b.bottom() as f64,
    )
}

/// Handle square anchored inside the bottom-right corner of `body`.
pub fn handle_rect(body: Rect, handle_size: f32) -> Rect {
    let s = handle_size as f64;
    Rect::new(body.x1 - s, body.y1 - s, body.x1, body.y1)
}

impl HitRegions {
    pub fn build(scene: &Scene, handle_size: f32) -> Self {
        let regions = scene
            .elements()
            .iter()
            .map(|el| {
                let body = to_rect(&el.bounds());
                HitRegion {
                    id: el.id,
                    body,
                    handle: handle_rect(body, handle_size),
                }
            })
            .collect();
        Self { regions }
    }

    /// Find the topmost target at (px, py). A handle wins over the body it
    /// belongs to; a higher element's body wins over a lower one's handle.
    pub fn hit_test(&self, px: f32, py: f32) -> Option<HitTarget> {
        let p = Point::new(px as f64, py as f64);
        for region in self.regions.iter().rev() {
            if region.handle.contains(p) {
                return Some(HitTarget::ResizeHandle(region.id));
            }
            if region.body.contains(p) {
                return Some(HitTarget::Body(region.id));
            }
        }
        None
    }

    pub fn region(&self, id: ElementId) -> Option<&HitRegion> {
        self.regions.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::{Element, ElementType, Position, Size};

    fn scene_with(boxes: &[(&str, f32, f32, f32, f32)]) -> Scene {
        let mut scene = Scene::default();
        for &(name, x, y, w, h) in boxes {
            let mut el = Element::with_defaults(ElementId::intern(name), ElementType::Shape);
            el.position = Position::new(x, y);
            el.size = Size::new(w, h);
            scene.push(el);
        }
        scene
    }

    #[test]
    fn body_and_handle() {
        let scene = scene_with(&[("a", 10.0, 10.0, 100.0, 100.0)]);
        let regions = HitRegions::build(&scene, DEFAULT_HANDLE_SIZE);
        let a = ElementId::intern("a");

        assert_eq!(regions.hit_test(50.0, 50.0), Some(HitTarget::Body(a)));
        assert_eq!(
            regions.hit_test(105.0, 105.0),
            Some(HitTarget::ResizeHandle(a))
        );
        assert_eq!(regions.hit_test(300.0, 300.0), None);
    }

    #[test]
    fn topmost_element_wins() {
        let scene = scene_with(&[
            ("under", 0.0, 0.0, 100.0, 100.0),
            ("over", 50.0, 50.0, 100.0, 100.0),
        ]);
        let regions = HitRegions::build(&scene, DEFAULT_HANDLE_SIZE);

        // Inside both bodies → the later (upper) element.
        assert_eq!(
            regions.hit_test(75.0, 75.0),
            Some(HitTarget::Body(ElementId::intern("over")))
        );
        // The lower element's handle is covered by the upper body.
        assert_eq!(
            regions.hit_test(95.0, 95.0),
            Some(HitTarget::Body(ElementId::intern("over")))
        );
        // Outside the upper element, the lower one is still reachable.
        assert_eq!(
            regions.hit_test(20.0, 20.0),
            Some(HitTarget::Body(ElementId::intern("under")))
        );
    }

    #[test]
    fn rebuild_tracks_moved_elements() {
        let mut scene = scene_with(&[("m", 0.0, 0.0, 60.0, 40.0)]);
        scene.elements[0].position = Position::new(200.0, 200.0);

        let regions = HitRegions::build(&scene, DEFAULT_HANDLE_SIZE);
        assert_eq!(regions.hit_test(10.0, 10.0), None);
        assert!(regions.hit_test(210.0, 210.0).is_some());
        assert_eq!(regions.len(), 1);
    }
}
