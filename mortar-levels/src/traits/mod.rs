//! Traits and data for parts of a level

pub mod brushes;
pub mod faces;

pub use self::brushes::{Brush, HasBrushes};
pub use self::faces::{Face, NULL_TEXTURE};
