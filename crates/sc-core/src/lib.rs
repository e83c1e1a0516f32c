//! Constellation composition engine.
//!
//! Maps a constellation's star geometry and mythology to deterministic
//! image-composition guidance: canvas-relative focal points, a visual-flow
//! classification, a balance classification, and thematic suggestions.
//! No generative inference anywhere — identical inputs always produce
//! byte-identical results.
//!
//! Zero I/O — pure geometry with no opinions about transport or rendering.

pub mod catalog;
pub mod compose;
pub mod constants;
pub mod data;
pub mod error;
pub mod geometry;
pub mod search;
pub mod suggest;

pub use catalog::{BrightnessTier, Catalog, ConstellationRecord, ShapeClass, Star};
pub use compose::{
    Balance, BalanceType, CompositionRequest, CompositionResult, FlowType, FocalPoint,
    SpatialDistribution, VisualFlow, compose,
};
pub use constants::{MAX_CANVAS, MIN_CANVAS};
pub use error::{ComposeError, Result};
pub use geometry::Point;
pub use search::{SearchFilters, SearchHit, search};
pub use suggest::{SuggestedElements, suggested_elements};
