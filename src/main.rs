//! Generic vs Specialized Quicksort Benchmark
//!
//! Runs a fixed sequence with no arguments or flags: first a sanity pass
//! that sorts one small array per element type and prints it before and
//! after for visual inspection, then repeated timed trials of each sort
//! variant over fresh random data, finishing with a totals/averages report.
//!
//! All configuration is compiled-in constants; the specific values are
//! illustrative, not load-bearing.

use std::process;
use std::time::Instant;

use rand::rngs::ThreadRng;

use dispatch_sorting::data_gen;
use dispatch_sorting::generic_sort;
use dispatch_sorting::report::{comparison_line, Report, VariantStats};
use dispatch_sorting::specialized_sort;
use dispatch_sorting::{IntCompare, SortError, StrCompare};

/// Timed sort invocations per variant.
const TRIALS: u32 = 10;
/// Integers per trial array.
const INT_COUNT: usize = 10_000;
/// Upper bound (exclusive) for generated integers.
const INT_MAX: i64 = 1_000_000;
/// Strings per trial array.
const STRING_COUNT: usize = 1_000;
/// Maximum length of a generated string.
const MAX_STRING_LEN: usize = 100;

fn main() {
    if let Err(e) = run() {
        eprintln!("benchmark failed: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), SortError> {
    println!("Generic vs Specialized Quicksort Benchmark");
    println!("==========================================\n");

    let mut rng = rand::thread_rng();

    sanity_pass(&mut rng)?;
    benchmark_ints(&mut rng);
    benchmark_strings(&mut rng);

    Ok(())
}

/// Sort one small array per element type through the checked entry points
/// and print before/after so the output can be eyeballed.
fn sanity_pass(rng: &mut ThreadRng) -> Result<(), SortError> {
    println!("--- Sanity Pass ---");

    let mut ints = vec![5i64, 3, 1, 4, 2];
    println!("Ints before: {:?}", ints);
    let len = ints.len();
    generic_sort::sort_range(&mut ints, 0..len, &IntCompare, rng)?;
    println!("Ints after:  {:?}", ints);
    assert!(specialized_sort::is_sorted(&ints), "sanity int sort failed!");
    println!("Int sort verified: OK");

    let mut strings: Vec<String> = ["banana", "apple", "cherry"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    println!("Strings before: {:?}", strings);
    let len = strings.len();
    specialized_sort::sort_strings_range(&mut strings, 0..len, rng)?;
    println!("Strings after:  {:?}", strings);
    assert!(
        specialized_sort::is_sorted(&strings),
        "sanity string sort failed!"
    );
    println!("String sort verified: OK");

    Ok(())
}

/// Trial loop for the integer variants. Each trial generates fresh data and
/// clones it so both variants sort the same input.
fn benchmark_ints(rng: &mut ThreadRng) {
    println!(
        "\n--- Integer Benchmark ({} elements, {} trials) ---",
        INT_COUNT, TRIALS
    );

    let mut generic = VariantStats::new("generic-int");
    let mut specialized = VariantStats::new("specialized-int");

    for _ in 0..TRIALS {
        let data = data_gen::random_ints(rng, INT_COUNT, INT_MAX);

        let mut generic_data = data.clone();
        let start = Instant::now();
        generic_sort::sort(&mut generic_data, &IntCompare, rng);
        generic.record(start.elapsed());
        debug_assert!(specialized_sort::is_sorted(&generic_data));

        let mut specialized_data = data;
        let start = Instant::now();
        specialized_sort::sort_ints(&mut specialized_data, rng);
        specialized.record(start.elapsed());
        debug_assert!(specialized_sort::is_sorted(&specialized_data));
    }

    print_results(generic, specialized);
}

/// Trial loop for the string variants.
fn benchmark_strings(rng: &mut ThreadRng) {
    println!(
        "\n--- String Benchmark ({} elements, max length {}, {} trials) ---",
        STRING_COUNT, MAX_STRING_LEN, TRIALS
    );

    let mut generic = VariantStats::new("generic-string");
    let mut specialized = VariantStats::new("specialized-string");

    for _ in 0..TRIALS {
        let data = data_gen::random_strings(rng, STRING_COUNT, MAX_STRING_LEN);

        let mut generic_data = data.clone();
        let start = Instant::now();
        generic_sort::sort(&mut generic_data, &StrCompare, rng);
        generic.record(start.elapsed());
        debug_assert!(specialized_sort::is_sorted(&generic_data));

        let mut specialized_data = data;
        let start = Instant::now();
        specialized_sort::sort_strings(&mut specialized_data, rng);
        specialized.record(start.elapsed());
        debug_assert!(specialized_sort::is_sorted(&specialized_data));
    }

    print_results(generic, specialized);
}

fn print_results(generic: VariantStats, specialized: VariantStats) {
    let line = comparison_line(&generic, &specialized);

    let mut report = Report::new();
    report.push(generic);
    report.push(specialized);

    print!("{}", report.render());
    println!("{}", line);
}
