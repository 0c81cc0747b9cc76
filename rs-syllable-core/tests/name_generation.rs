use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_syllable_core::model::cluster_table::Position;
use rs_syllable_core::{Error, NameGenerator, SchemeDefinition, SyllableCount, SyllableScheme, presets};

/// Consonant-vowel syllables where each scheme uses its own letters.
fn disjoint_scheme(consonants: &[(&str, u64)], vowels: &[(&str, u64)]) -> SyllableScheme {
	SchemeDefinition::new()
		.with_class("c", consonants)
		.with_class("v", vowels)
		.with_onset(&["c"], 1)
		.with_nucleus(&["v"], 1)
		.with_coda(&[], 1)
		.build()
		.unwrap()
}

fn initial() -> SyllableScheme {
	disjoint_scheme(&[("b", 1), ("d", 1)], &[("a", 1), ("e", 1)])
}

fn medial() -> SyllableScheme {
	disjoint_scheme(&[("k", 1), ("l", 1)], &[("i", 1), ("o", 1)])
}

fn last() -> SyllableScheme {
	disjoint_scheme(&[("m", 1), ("n", 1)], &[("u", 1), ("y", 1)])
}

fn pairs(name: &str) -> Vec<String> {
	let chars: Vec<char> = name.to_lowercase().chars().collect();
	chars.chunks(2).map(|pair| pair.iter().collect()).collect()
}

#[test]
fn fixed_count_gives_that_many_syllables() {
	let generator = NameGenerator::new(initial());
	let mut rng = StdRng::seed_from_u64(1);

	for _ in 0..200 {
		let name = generator.generate_with(SyllableCount::Fixed(3), &mut rng).unwrap();
		assert_eq!(name.chars().count(), 6, "name {name}");
		for syllable in pairs(&name) {
			let mut chars = syllable.chars();
			assert!("bd".contains(chars.next().unwrap()));
			assert!("ae".contains(chars.next().unwrap()));
		}
	}
}

#[test]
fn degenerate_range_equals_fixed_count() {
	let generator = NameGenerator::new(initial());
	for seed in 0..20 {
		let ranged = generator
			.generate_with(SyllableCount::Range(2, 2), &mut StdRng::seed_from_u64(seed))
			.unwrap();
		let fixed = generator
			.generate_with(SyllableCount::Fixed(2), &mut StdRng::seed_from_u64(seed))
			.unwrap();
		assert_eq!(ranged, fixed);
	}
}

#[test]
fn three_schemes_follow_syllable_positions() {
	let generator = NameGenerator::positional(initial(), medial(), last());
	let mut rng = StdRng::seed_from_u64(99);

	for _ in 0..200 {
		let name = generator.generate_with(SyllableCount::Fixed(1), &mut rng).unwrap();
		let syllables = pairs(&name);
		assert_eq!(syllables.len(), 1);
		assert!("bd".contains(syllables[0].chars().next().unwrap()), "{name}");
	}

	for _ in 0..200 {
		let name = generator.generate_with(SyllableCount::Fixed(4), &mut rng).unwrap();
		let syllables = pairs(&name);
		assert_eq!(syllables.len(), 4);
		assert!("bd".contains(syllables[0].chars().next().unwrap()), "{name}");
		assert!("kl".contains(syllables[1].chars().next().unwrap()), "{name}");
		assert!("kl".contains(syllables[2].chars().next().unwrap()), "{name}");
		assert!("mn".contains(syllables[3].chars().next().unwrap()), "{name}");
	}
}

#[test]
fn only_first_letter_is_capitalized() {
	let generator = NameGenerator::positional(initial(), medial(), last());
	let mut rng = StdRng::seed_from_u64(3);

	for _ in 0..100 {
		let name = generator.generate_with(SyllableCount::Range(1, 4), &mut rng).unwrap();
		let mut chars = name.chars();
		assert!(chars.next().unwrap().is_uppercase());
		assert!(chars.all(|c| c.is_lowercase()), "{name}");
	}
}

#[test]
fn errors_are_reported_not_swallowed() {
	let generator = NameGenerator::new(initial());
	let err = generator.generate(SyllableCount::Range(5, 1)).unwrap_err();
	assert!(matches!(err, Error::InvalidRange { lo: 5, hi: 1 }));

	let err = SchemeDefinition::new()
		.with_class("v", &[("a", 1)])
		.with_onset(&["c"], 1)
		.with_nucleus(&["v"], 1)
		.with_coda(&[], 1)
		.build()
		.unwrap_err();
	assert!(matches!(err, Error::UnknownPhoneClass { position: Position::Onset, .. }));

	let err = SchemeDefinition::new()
		.with_class("v", &[("a", 0)])
		.with_onset(&[], 1)
		.with_nucleus(&["v"], 1)
		.with_coda(&[], 1)
		.build()
		.unwrap_err();
	assert!(matches!(err, Error::ZeroWeight { .. }));
}

#[test]
fn embedded_presets_generate_the_same_names() {
	let bytes = presets::first().to_bytes().unwrap();
	let decoded = SchemeDefinition::from_bytes(&bytes).unwrap();
	assert_eq!(decoded, presets::first());

	let original = NameGenerator::new(presets::first().build().unwrap());
	let restored = NameGenerator::new(decoded.build().unwrap());
	for seed in 0..20 {
		assert_eq!(
			original.generate_with(SyllableCount::Default, &mut StdRng::seed_from_u64(seed)).unwrap(),
			restored.generate_with(SyllableCount::Default, &mut StdRng::seed_from_u64(seed)).unwrap(),
		);
	}
}

#[test]
fn schemes_are_shared_across_threads() {
	let scheme = Arc::new(initial());
	let generator = NameGenerator::from_shared(scheme.clone(), scheme.clone(), scheme);

	let handles: Vec<_> = (0..4u64)
		.map(|seed| {
			let generator = generator.clone();
			thread::spawn(move || {
				let mut rng = StdRng::seed_from_u64(seed);
				generator.generate_batch(8, SyllableCount::Fixed(2), 50, &mut rng).unwrap()
			})
		})
		.collect();

	for handle in handles {
		let names = handle.join().unwrap();
		assert_eq!(names.len(), 8);
		let distinct: HashSet<_> = names.iter().map(|n| n.to_lowercase()).collect();
		assert_eq!(distinct.len(), 8);
	}
}
