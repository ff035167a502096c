//! Three-dimensional morpheme model.
//!
//! The `ttm-core` crate models a morpheme as a point in an analytical space
//! with three independent axes:
//!
//! - **Width** (X): derivation degree, from root and affixes.
//! - **Depth** (Y): semantic level in focus, from literal to mystical.
//! - **Height** (Z): vocalic or tonal configuration.
//!
//! On top of the model it provides [`MorphemeSpace`] and [`RootSpace`] for
//! nearest-neighbour, radius, density and statistics queries, plus the
//! wire form and graph tuples consumed by outer layers.
//!
//! # Entry Point
//!
//! ```
//! use ttm_core::{Morpheme, RootSpace, Width};
//!
//! let base = Morpheme::new("play", "play").with_width(Width::new("play"));
//! let mut space = RootSpace::new("play", "en");
//! space.add_morpheme(base.translate_along_x(None, Some("ing"))).unwrap();
//! space.add_morpheme(base).unwrap();
//!
//! assert_eq!(space.len(), 2);
//! assert_eq!(space.get_statistics().unique_roots(), 1);
//! ```
//!
//! # Serialization
//!
//! ```
//! use ttm_core::Morpheme;
//!
//! let m = Morpheme::new("kitab", "k-t-b").with_language("ar");
//! let wire = m.to_dict();
//! assert_eq!(Morpheme::from_dict(&wire).unwrap(), m);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod dimensions;
pub mod error;
pub mod morpheme;
pub mod serializer;
pub mod space;

pub use dimensions::{
    Depth, Diacritic, Height, MarkFunction, MarkPosition, SemanticLayer, SemanticLevel, Width,
};
pub use error::{Error, Result};
pub use morpheme::{create_semitic_morpheme, Coordinates, Morpheme, SemiticOptions};
pub use serializer::graph::GraphExport;
pub use space::{MorphemeSpace, PlotPoint, RootSpace, SpaceStatistics, SpaceSummary};
