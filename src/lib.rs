//! Folio - Region-based template composer.
mod delegate;
mod engine;
mod extract;
mod format;
mod log;
mod pipe;
mod render;
mod span;
mod store;
mod syntax;

pub use delegate::Delegate;
pub use engine::Engine;
pub use extract::{extract, Regions};
pub use format::Currency;
pub use log::Error;
pub use render::{render, Renderer};
pub use span::Span;
pub use store::Store;
pub use syntax::{field_markers, item_markers, region_blocks, Marker, RegionBlock};
