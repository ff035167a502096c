//! Serializers for morphemes and morpheme spaces.
//!
//! Two output shapes are supported:
//! - **Wire form** ([`dict`]): the JSON object exchanged with request-serving
//!   façades through [`Morpheme::to_dict`](crate::Morpheme::to_dict) and
//!   [`Morpheme::from_dict`](crate::Morpheme::from_dict).
//! - **Graph tuples** ([`graph`]): deduplicated root, morpheme and
//!   semantic-field records for a graph-persistence adapter.

pub mod dict;
pub mod graph;
