//! Top-level module for the syllable-based name generation system.
//!
//! This module provides, from leaf to top:
//! - Weighted sampling over integer frequency tables (`WeightedPool`)
//! - Phone classes and per-position cluster tables
//! - Scheme data (`SchemeDefinition`) and built schemes (`SyllableScheme`)
//! - Syllable count selection (`SyllableCount`)
//! - A high-level generation interface (`NameGenerator`)

/// High-level interface assembling names from one or three schemes.
///
/// Exposes positional scheme selection, single and batch generation.
pub mod generator;

/// Syllable positions and their weighted cluster tables.
pub mod cluster_table;

/// Named phone classes mapped to weighted phonemes.
pub mod phone_classes;

/// Serializable scheme frequency data with builder helpers.
pub mod scheme_definition;

/// Validated, immutable syllable scheme.
///
/// Generates one syllable at a time.
pub mod syllable_scheme;

/// Number of syllables of a generated name.
pub mod syllable_count;

/// Integer-weighted random sampling.
pub mod weighted_pool;
