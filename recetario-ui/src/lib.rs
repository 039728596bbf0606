//! Presentation adapters for Recetario.
//!
//! Stateless formatters (labels, image lookup, date formatting, text
//! cards) plus the one piece of transient per-card state, the
//! [`LikeCounter`]. Adapters never fail: unrecognized input passes
//! through or falls back to a default.

mod adapters;
mod card;
mod like;

pub use adapters::{DEFAULT_IMAGE, cuisine_image, cuisine_label, difficulty_label, format_date};
pub use card::render_card;
pub use like::LikeCounter;
