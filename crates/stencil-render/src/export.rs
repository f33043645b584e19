//! Export preview: cleaned scene → standalone HTML document.
//!
//! Consumes the export display list, so selection outlines and resize
//! handles can never leak into the output. Nothing is written to disk;
//! the host shows the document in a new window.

use crate::paint::{DrawCmd, build_export_list};
use kurbo::Rect;
use std::fmt::Write;
use stencil_core::Scene;

/// Render the scene as a standalone preview document.
pub fn export_preview_html(scene: &Scene) -> String {
    let mut body = String::new();
    for cmd in build_export_list(scene) {
        write_cmd(&mut body, &cmd);
    }

    format!(
        "<html>\n\
         <head>\n\
         <title>Template Export Preview</title>\n\
         <style>\n\
         body {{ margin: 0; padding: 20px; }}\n\
         .template-element {{ position: absolute; box-sizing: border-box; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <div style=\"position: relative; width: {w}px; height: {h}px; border: 1px solid #ddd;\">\n\
         {body}\
         </div>\n\
         </body>\n\
         </html>\n",
        w = scene.canvas.width,
        h = scene.canvas.height,
    )
}

fn write_cmd(out: &mut String, cmd: &DrawCmd) {
    // `write!` into a String cannot fail.
    let _ = match cmd {
        DrawCmd::Canvas { .. } | DrawCmd::SelectionOutline { .. } | DrawCmd::ResizeHandle { .. } => {
            Ok(())
        }
        DrawCmd::FillRect { id, rect, color } => writeln!(
            out,
            "<div class=\"template-element\" data-id=\"{}\" style=\"{} background-color: {};\"></div>",
            escape_html(id.as_str()),
            placement(rect),
            color.to_hex()
        ),
        DrawCmd::Text {
            id,
            rect,
            content,
            color,
            font_size,
        } => writeln!(
            out,
            "<div class=\"template-element\" data-id=\"{}\" style=\"{} color: {}; font-size: {}px;\">{}</div>",
            escape_html(id.as_str()),
            placement(rect),
            color.to_hex(),
            font_size,
            escape_html(content)
        ),
        DrawCmd::Image { id, rect, src, alt } => writeln!(
            out,
            "<div class=\"template-element\" data-id=\"{}\" style=\"{}\"><img src=\"{}\" alt=\"{}\" style=\"width: 100%; height: 100%;\"></div>",
            escape_html(id.as_str()),
            placement(rect),
            escape_html(src),
            escape_html(alt)
        ),
    };
}

fn placement(rect: &Rect) -> String {
    format!(
        "left: {}px; top: {}px; width: {}px; height: {}px;",
        rect.x0,
        rect.y0,
        rect.width(),
        rect.height()
    )
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stencil_core::{Element, ElementKind, ElementType};

    #[test]
    fn preview_contains_elements_without_chrome() {
        let mut scene = Scene::default();
        for ty in [ElementType::Text, ElementType::Shape, ElementType::Image] {
            let id = scene.mint_id(ty);
            scene.push(Element::with_defaults(id, ty));
        }

        let html = export_preview_html(&scene);
        assert!(html.contains("width: 612px; height: 792px;"));
        assert!(html.contains("Double click to edit"));
        assert!(html.contains("background-color: #5C6EFF;"));
        assert!(html.contains("<img src=\"/api/placeholder/100/100\""));
        assert!(!html.contains("selected"));
        assert!(!html.contains("resize-handle"));
    }

    #[test]
    fn text_is_escaped() {
        let mut scene = Scene::default();
        let id = scene.mint_id(ElementType::Text);
        let mut el = Element::with_defaults(id, ElementType::Text);
        el.kind = ElementKind::Text {
            content: "<script>alert(\"x\")</script> & more".into(),
        };
        scene.push(el);

        let html = export_preview_html(&scene);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; more"));
    }
}
