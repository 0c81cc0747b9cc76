//! Syllable-based fictional name generation library.
//!
//! This crate generates pronounceable names from phonological schemes:
//! - Weighted phone classes (ex. vowels, nasals) sampled by frequency
//! - Onset / nucleus / coda clusters drawn per syllable
//! - Names assembled from one scheme, or one scheme per syllable position
//! - Ready-made example schemes (`presets`)
//!
//! ```
//! use rs_syllable_core::model::syllable_count::SyllableCount;
//!
//! let generator = rs_syllable_core::presets::generator().unwrap();
//! let name = generator.generate(SyllableCount::Range(2, 3)).unwrap();
//! assert!(!name.is_empty());
//! ```

/// Errors and result alias shared by all modules.
pub mod error;

/// Core scheme models and generation logic.
pub mod model;

/// Example schemes for first, medial and last syllables.
pub mod presets;

pub use error::{Error, Result};
pub use model::generator::NameGenerator;
pub use model::scheme_definition::SchemeDefinition;
pub use model::syllable_count::SyllableCount;
pub use model::syllable_scheme::SyllableScheme;
