//! Core data model for template scenes.
//!
//! A scene is a flat, ordered list of placed elements on a fixed-size
//! canvas. Insertion order is z-order: later elements paint on top.
//! Everything here is plain data so a whole scene can be snapshotted for
//! history or written to storage and restored with identical ids.

use crate::id::ElementId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Smallest width a resize gesture can produce.
pub const MIN_WIDTH: f32 = 50.0;
/// Smallest height a resize gesture can produce.
pub const MIN_HEIGHT: f32 = 30.0;

/// Where every newly added element lands.
pub const DEFAULT_POSITION: Position = Position { x: 50.0, y: 50.0 };

pub const DEFAULT_TEXT: &str = "Double click to edit";
pub const DEFAULT_FONT_SIZE: f32 = 16.0;
pub const PLACEHOLDER_IMAGE_SRC: &str = "/api/placeholder/100/100";
pub const PLACEHOLDER_IMAGE_ALT: &str = "Template Image";

/// Bounds applied to font sizes coming from the property panel.
pub const FONT_SIZE_RANGE: (f32, f32) = (1.0, 1000.0);

// ─── Colors ──────────────────────────────────────────────────────────────

/// RGBA color. Stored as 4 × f32 [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// Helper to parse a single hex digit.
fn hex_val(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl Color {
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, `#RRGGBBAA`.
    /// The leading `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = hex.as_bytes();
        let pair = |i: usize| -> Option<u8> { Some(hex_val(bytes[i])? << 4 | hex_val(bytes[i + 1])?) };

        match bytes.len() {
            3 => {
                let r = hex_val(bytes[0])?;
                let g = hex_val(bytes[1])?;
                let b = hex_val(bytes[2])?;
                Some(Self::rgb8(r * 17, g * 17, b * 17))
            }
            6 => Some(Self::rgb8(pair(0)?, pair(2)?, pair(4)?)),
            8 => {
                let mut c = Self::rgb8(pair(0)?, pair(2)?, pair(4)?);
                c.a = pair(6)? as f32 / 255.0;
                Some(c)
            }
            _ => None,
        }
    }

    /// Emit as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(&self) -> String {
        let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (ch(self.r), ch(self.g), ch(self.b), ch(self.a));
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

// ─── Geometry ────────────────────────────────────────────────────────────

/// Offset from the canvas origin, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Floor both dimensions at the resize minimums.
    pub fn floored(self) -> Self {
        Self {
            width: self.width.max(MIN_WIDTH),
            height: self.height.max(MIN_HEIGHT),
        }
    }
}

/// Canvas dimensions in device-independent pixels (72 DPI basis).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Absolute bounding box of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }

    /// True when the whole box lies inside `[0, w] × [0, h]`.
    pub fn fits_within(&self, canvas: CanvasSize) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= canvas.width && self.bottom() <= canvas.height
    }
}

// ─── Elements ────────────────────────────────────────────────────────────

/// The three element types offered by the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Shape,
    Image,
}

impl ElementType {
    pub fn name(self) -> &'static str {
        match self {
            ElementType::Text => "text",
            ElementType::Shape => "shape",
            ElementType::Image => "image",
        }
    }
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ElementType::Text),
            "shape" => Ok(ElementType::Shape),
            "image" => Ok(ElementType::Image),
            other => Err(format!("unknown element type: {other}")),
        }
    }
}

/// Kind-specific payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// Editable text; edited in place after a double-click.
    Text { content: String },
    /// A filled rectangle.
    Shape,
    /// An image referenced by source URL.
    Image { src: String, alt: String },
}

impl ElementKind {
    pub fn element_type(&self) -> ElementType {
        match self {
            ElementKind::Text { .. } => ElementType::Text,
            ElementKind::Shape => ElementType::Shape,
            ElementKind::Image { .. } => ElementType::Image,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, ElementKind::Text { .. })
    }
}

/// Visual style. `color` is the foreground for text and the fill for
/// shapes and images.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Style {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

/// One placed object on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub kind: ElementKind,
    pub position: Position,
    pub size: Size,
    #[serde(default)]
    pub style: Style,
}

impl Element {
    /// Build an element of type `ty` with the toolbar defaults, placed at
    /// [`DEFAULT_POSITION`].
    pub fn with_defaults(id: ElementId, ty: ElementType) -> Self {
        let (kind, size, style) = match ty {
            ElementType::Text => (
                ElementKind::Text {
                    content: DEFAULT_TEXT.to_string(),
                },
                Size::new(180.0, 40.0),
                Style {
                    color: Some(Color::BLACK),
                    font_size: Some(DEFAULT_FONT_SIZE),
                },
            ),
            ElementType::Shape => (
                ElementKind::Shape,
                Size::new(100.0, 100.0),
                Style {
                    color: Some(Color::rgb8(0x5C, 0x6E, 0xFF)),
                    font_size: None,
                },
            ),
            ElementType::Image => (
                ElementKind::Image {
                    src: PLACEHOLDER_IMAGE_SRC.to_string(),
                    alt: PLACEHOLDER_IMAGE_ALT.to_string(),
                },
                Size::new(100.0, 100.0),
                Style::default(),
            ),
        };
        Self {
            id,
            kind,
            position: DEFAULT_POSITION,
            size,
            style,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds {
            x: self.position.x,
            y: self.position.y,
            width: self.size.width,
            height: self.size.height,
        }
    }

    /// Text content, for text elements.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            ElementKind::Text { content } => Some(content),
            _ => None,
        }
    }

    /// Effective font size of a text element.
    pub fn font_size(&self) -> Option<f32> {
        self.kind
            .is_text()
            .then(|| self.style.font_size.unwrap_or(DEFAULT_FONT_SIZE))
    }
}

// ─── Scene ───────────────────────────────────────────────────────────────

/// The complete editable state: canvas size plus ordered elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub canvas: CanvasSize,
    pub elements: Vec<Element>,
    /// Counter for minting element ids. Persisted with the scene so ids
    /// minted after a reload never collide with restored ones.
    #[serde(default)]
    pub next_id: u64,
}

impl Scene {
    /// An empty scene on a canvas of the given size.
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            elements: Vec::new(),
            next_id: 0,
        }
    }

    /// Allocate a fresh id for an element of type `ty`.
    pub fn mint_id(&mut self, ty: ElementType) -> ElementId {
        loop {
            let id = ElementId::numbered(ty.name(), self.next_id);
            self.next_id += 1;
            if !self.contains(id) {
                return id;
            }
        }
    }

    /// Append an element on top of everything else.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.index_of(id).is_some()
    }

    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id == id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// The topmost element, if any.
    pub fn topmost(&self) -> Option<&Element> {
        self.elements.last()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(crate::layout::DEFAULT_CANVAS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_roundtrip() {
        let c = Color::from_hex("#ff0000").unwrap();
        assert_eq!(c.to_hex(), "#FF0000");
        let short = Color::from_hex("#5cf").unwrap();
        assert_eq!(short.to_hex(), "#55CCFF");
        let translucent = Color::from_hex("#00000080").unwrap();
        assert_eq!(translucent.to_hex(), "#00000080");
    }

    #[test]
    fn color_rejects_garbage() {
        assert!(Color::from_hex("red").is_none());
        assert!(Color::from_hex("#12345").is_none());
        assert!(Color::from_hex("#GG0000").is_none());
    }

    #[test]
    fn defaults_per_type() {
        let text = Element::with_defaults(ElementId::intern("t"), ElementType::Text);
        assert_eq!(text.text(), Some(DEFAULT_TEXT));
        assert_eq!(text.font_size(), Some(16.0));
        assert_eq!(text.position, DEFAULT_POSITION);

        let shape = Element::with_defaults(ElementId::intern("s"), ElementType::Shape);
        assert_eq!(shape.size, Size::new(100.0, 100.0));
        assert_eq!(shape.style.color.map(|c| c.to_hex()).as_deref(), Some("#5C6EFF"));
        assert_eq!(shape.font_size(), None);

        let image = Element::with_defaults(ElementId::intern("i"), ElementType::Image);
        match &image.kind {
            ElementKind::Image { src, .. } => assert_eq!(src, PLACEHOLDER_IMAGE_SRC),
            _ => panic!("expected Image"),
        }
    }

    #[test]
    fn mint_id_skips_existing() {
        let mut scene = Scene::default();
        let taken = ElementId::numbered("shape", 0);
        scene.push(Element::with_defaults(taken, ElementType::Shape));

        let fresh = scene.mint_id(ElementType::Shape);
        assert_ne!(fresh, taken);
        assert_eq!(fresh.as_str(), "shape_1");
    }

    #[test]
    fn size_floor() {
        assert_eq!(Size::new(10.0, -40.0).floored(), Size::new(MIN_WIDTH, MIN_HEIGHT));
        assert_eq!(Size::new(120.0, 80.0).floored(), Size::new(120.0, 80.0));
    }

    #[test]
    fn element_type_parsing() {
        assert_eq!("image".parse::<ElementType>(), Ok(ElementType::Image));
        assert!("circle".parse::<ElementType>().is_err());
    }
}
