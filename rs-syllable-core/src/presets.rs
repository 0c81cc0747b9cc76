//! Ready-made syllable schemes.
//!
//! The three schemes share one phoneme inventory (7 vowels, 9 consonant
//! classes) with different frequencies:
//! - `first`: open, vowel-heavy first syllables
//! - `medial`: mostly open syllables led by voiced stops
//! - `last`: closed syllables with heavier codas

use crate::error::Result;
use crate::model::generator::NameGenerator;
use crate::model::scheme_definition::SchemeDefinition;

const VOWEL: &str = "vowel";
const TRAP: &str = "trap";
const NASAL1: &str = "nasal1";
const NASAL2: &str = "nasal2";
const FRIC_SIB_VOICELESS: &str = "fricSibVoiceless";
const FRIC_SIB_VOICED: &str = "fricSibVoiced";
const FRIC_NSIB: &str = "fricNsib";
const PLOSIVE_VOICELESS: &str = "plosiveVoiceless";
const PLOSIVE_VOICED: &str = "plosiveVoiced";

/// Phoneme frequencies of one preset, in `phone_classes` order.
struct Inventory {
	vowel: [u64; 7],
	nasal1: [u64; 3],
	nasal2: [u64; 3],
	fric_nsib: [u64; 3],
	plosive_voiceless: [u64; 4],
	plosive_voiced: [u64; 3],
}

fn phone_classes(weights: Inventory) -> SchemeDefinition {
	let [a, e, i, o, u, y, ae] = weights.vowel;
	let [n1, m1, ny] = weights.nasal1;
	let [n2, m2, ng] = weights.nasal2;
	let [s, z, sh] = weights.fric_nsib;
	let [p, t, k, c] = weights.plosive_voiceless;
	let [b, d, g] = weights.plosive_voiced;

	SchemeDefinition::new()
		.with_class(VOWEL, &[("a", a), ("e", e), ("i", i), ("o", o), ("u", u), ("y", y), ("æ", ae)])
		.with_class(TRAP, &[("r", 5), ("l", 3), ("j", 1)])
		.with_class(NASAL1, &[("n", n1), ("m", m1), ("ɲ", ny)])
		.with_class(NASAL2, &[("n", n2), ("m", m2), ("ŋ", ng)])
		.with_class(FRIC_SIB_VOICELESS, &[("f", 1), ("þ", 1)])
		.with_class(FRIC_SIB_VOICED, &[("v", 1), ("w", 1), ("h", 2)])
		.with_class(FRIC_NSIB, &[("s", s), ("z", z), ("š", sh)])
		.with_class(PLOSIVE_VOICELESS, &[("p", p), ("t", t), ("k", k), ("c", c)])
		.with_class(PLOSIVE_VOICED, &[("b", b), ("d", d), ("g", g)])
		.with_nucleus(&[VOWEL], 1)
}

/// Scheme of the first syllable of a name.
pub fn first() -> SchemeDefinition {
	phone_classes(Inventory {
		vowel: [15, 10, 8, 7, 5, 1, 4],
		nasal1: [1, 3, 1],
		nasal2: [3, 1, 1],
		fric_nsib: [5, 1, 3],
		plosive_voiceless: [1, 3, 1, 3],
		plosive_voiced: [3, 1, 3],
	})
	.with_onset(&[], 13)
	.with_onset(&[PLOSIVE_VOICELESS], 1)
	.with_onset(&[PLOSIVE_VOICED], 8)
	.with_onset(&[PLOSIVE_VOICED, FRIC_SIB_VOICED], 1)
	.with_onset(&[PLOSIVE_VOICELESS, TRAP], 1)
	.with_onset(&[PLOSIVE_VOICED, TRAP], 1)
	.with_onset(&[PLOSIVE_VOICED, FRIC_SIB_VOICED, TRAP], 1)
	.with_onset(&[FRIC_NSIB], 3)
	.with_onset(&[FRIC_NSIB, FRIC_SIB_VOICED], 1)
	.with_onset(&[FRIC_NSIB, TRAP], 1)
	.with_onset(&[FRIC_SIB_VOICELESS], 4)
	.with_onset(&[FRIC_SIB_VOICED], 5)
	.with_onset(&[FRIC_SIB_VOICELESS, TRAP], 1)
	.with_onset(&[NASAL1], 5)
	.with_coda(&[], 16)
	.with_coda(&[TRAP], 9)
	.with_coda(&[TRAP, NASAL2], 1)
	.with_coda(&[TRAP, FRIC_NSIB], 1)
	.with_coda(&[TRAP, PLOSIVE_VOICELESS], 1)
	.with_coda(&[NASAL2], 7)
	.with_coda(&[FRIC_SIB_VOICELESS], 1)
	.with_coda(&[FRIC_NSIB], 1)
	.with_coda(&[PLOSIVE_VOICELESS], 3)
}

/// Scheme of the syllables between the first and the last one.
pub fn medial() -> SchemeDefinition {
	phone_classes(Inventory {
		vowel: [4, 8, 5, 3, 2, 1, 1],
		nasal1: [6, 3, 1],
		nasal2: [8, 1, 1],
		fric_nsib: [8, 1, 1],
		plosive_voiceless: [2, 12, 1, 1],
		plosive_voiced: [1, 4, 4],
	})
	.with_onset(&[], 1)
	.with_onset(&[PLOSIVE_VOICELESS], 2)
	.with_onset(&[PLOSIVE_VOICED], 18)
	.with_onset(&[PLOSIVE_VOICELESS, FRIC_SIB_VOICED], 1)
	.with_onset(&[PLOSIVE_VOICELESS, TRAP], 4)
	.with_onset(&[PLOSIVE_VOICED, TRAP], 1)
	.with_onset(&[PLOSIVE_VOICED, NASAL1], 1)
	.with_onset(&[FRIC_NSIB], 2)
	.with_onset(&[FRIC_SIB_VOICELESS], 1)
	.with_onset(&[FRIC_SIB_VOICED], 2)
	.with_onset(&[FRIC_SIB_VOICED, TRAP], 1)
	.with_onset(&[NASAL1], 4)
	.with_onset(&[TRAP], 6)
	.with_coda(&[], 16)
	.with_coda(&[TRAP], 3)
	.with_coda(&[NASAL2], 2)
}

/// Scheme of the last syllable of a multi-syllable name.
pub fn last() -> SchemeDefinition {
	phone_classes(Inventory {
		vowel: [15, 13, 10, 5, 4, 1, 1],
		nasal1: [9, 9, 1],
		nasal2: [10, 1, 1],
		fric_nsib: [6, 2, 1],
		plosive_voiceless: [1, 8, 3, 4],
		plosive_voiced: [1, 6, 1],
	})
	.with_onset(&[], 1)
	.with_onset(&[PLOSIVE_VOICELESS], 2)
	.with_onset(&[PLOSIVE_VOICED], 21)
	.with_onset(&[PLOSIVE_VOICELESS, TRAP], 1)
	.with_onset(&[PLOSIVE_VOICED, TRAP], 1)
	.with_onset(&[FRIC_NSIB], 4)
	.with_onset(&[FRIC_NSIB, FRIC_SIB_VOICED], 1)
	.with_onset(&[FRIC_SIB_VOICELESS], 2)
	.with_onset(&[FRIC_SIB_VOICED], 4)
	.with_onset(&[FRIC_SIB_VOICELESS, TRAP], 1)
	.with_onset(&[NASAL1], 4)
	.with_onset(&[TRAP], 8)
	.with_coda(&[], 8)
	.with_coda(&[TRAP], 5)
	.with_coda(&[TRAP, FRIC_SIB_VOICELESS], 2)
	.with_coda(&[TRAP, PLOSIVE_VOICELESS], 3)
	.with_coda(&[TRAP, PLOSIVE_VOICED], 6)
	.with_coda(&[NASAL2], 3)
	.with_coda(&[NASAL2, FRIC_SIB_VOICELESS], 1)
	.with_coda(&[NASAL2, PLOSIVE_VOICED], 2)
	.with_coda(&[FRIC_SIB_VOICED], 1)
	.with_coda(&[FRIC_NSIB], 3)
	.with_coda(&[FRIC_NSIB, PLOSIVE_VOICELESS], 1)
	.with_coda(&[PLOSIVE_VOICELESS], 4)
	.with_coda(&[PLOSIVE_VOICED], 4)
}

/// Positional generator over `first`, `medial` and `last`.
pub fn generator() -> Result<NameGenerator> {
	Ok(NameGenerator::positional(first().build()?, medial().build()?, last().build()?))
}
