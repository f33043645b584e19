pub mod export;
pub mod hit;
pub mod paint;

pub use export::export_preview_html;
pub use hit::{DEFAULT_HANDLE_SIZE, HitRegion, HitRegions, HitTarget};
pub use paint::{DrawCmd, build_display_list, build_export_list};
