use simplelog::*;

use algoseq::prelude::*;

// -------------------------------------------------------------------------------------------------

fn print_rhythm(name: &str, rhythm: &[u8]) {
    let steps = rhythm
        .iter()
        .map(|step| if *step == 1 { "x" } else { "~" })
        .collect::<Vec<_>>()
        .join(" ");
    println!("{:<24} {}", name, steps);
}

fn main() -> anyhow::Result<()> {
    // init logging
    TermLogger::init(
        log::STATIC_MAX_LEVEL,
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        eprintln!("Failed to initialize logger: {}", err);
    });

    for (steps, beats) in [(8, 3), (12, 5), (16, 7)] {
        print_rhythm(
            &format!("euclidean({}, {})", steps, beats),
            &euclidean(steps, beats, 0),
        );
        print_rhythm(
            &format!("fast_euclidean({}, {})", steps, beats),
            &fast_euclidean(steps, beats, 0),
        );
    }
    print_rhythm("hex_beat(\"f8a9\")", &hex_beat("f8a9"));
    let collatz_rhythm = collatz_mod(27, 2)?
        .into_iter()
        .map(|value| value as u8)
        .collect::<Vec<_>>();
    print_rhythm("collatz_mod(27, 2)", &collatz_rhythm);

    let period = pisano_period(12)?;
    println!("pisano period of 12: {:?} ({} steps)", period, period.len());

    if let Terms::Exact(numbers) = fibonacci(1, 150, NumberFormat::Exact) {
        println!("fibonacci(150): {}", numbers.join(""));
    }
    println!("infinity series: {:?}", infinity_series(16, [0, 1], 0)?);

    Ok(())
}
