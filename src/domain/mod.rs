//! Domain layer: pattern models
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod catalog;
pub mod composite;
pub mod error;
pub mod flyweight;
pub mod render;

pub use composite::{Node, NodeId, NodeKind, Tree, Visit, Walk, DEPTH_STEP};
pub use error::{DomainError, DomainResult};
pub use flyweight::{FlyweightPool, Glyph, GlyphFactory};
pub use render::{DisplayStyle, TreeNodeConvert};
