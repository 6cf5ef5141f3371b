//! Reusable UI Components

mod api_key_input;
mod card;
mod drawing_canvas;
mod svg_preview;
mod toast;

pub use api_key_input::ApiKeyInput;
pub use card::Card;
pub use drawing_canvas::{wipe, DrawingCanvas, SurfaceHandle};
pub use svg_preview::SvgPreview;
pub use toast::{use_toaster, Toaster, ToasterContext};
