use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_syllable_core::{NameGenerator, SyllableCount, presets};

/// Prints names generated from the bundled example schemes
#[derive(Parser, Debug)]
#[command(name = "rs-syllable-exemple", version, about)]
struct Args {
    /// Number of names to print
    #[arg(short = 'n', long, default_value_t = 10)]
    count: usize,

    /// Syllables per name: `N` for a fixed count, `LO HI` for a range.
    /// Without it, names have 1 to 4 syllables
    #[arg(short, long, num_args = 1..=2, value_name = "N")]
    syllables: Vec<usize>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Use the first-syllable scheme for every syllable
    #[arg(long)]
    single: bool,

    /// Re-draws allowed per duplicate name (0 allows duplicates)
    #[arg(short, long, default_value_t = 0)]
    unique_tries: usize,
}

impl Args {
    /// Converts the `--syllables` values into a syllable count.
    fn syllable_count(&self) -> SyllableCount {
        match self.syllables[..] {
            [n] => SyllableCount::Fixed(n),
            [lo, hi] => SyllableCount::Range(lo, hi),
            _ => SyllableCount::Default,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    // Either one scheme for every syllable, or first / medial / last schemes
    let generator = if args.single {
        NameGenerator::new(presets::first().build()?)
    } else {
        presets::generator()?
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let count = args.syllable_count();
    info!("Generating {} names ({:?})", args.count, count);

    for name in generator.generate_batch(args.count, count, args.unique_tries, &mut rng)? {
        println!("{}", name);
    }

    Ok(())
}
