use simplelog::*;

use algoseq::prelude::*;

// -------------------------------------------------------------------------------------------------

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

    // rule number from the command line, defaults to 110
    let rule = std::env::args().nth(1).unwrap_or("110".to_string());

    let mut automaton = Automaton::new(64, rule.as_str())?;
    let mut seed = vec![0u8; automaton.len()];
    seed[automaton.len() / 2] = 1;
    automaton.feed(seed);

    println!("rule {} ({})", automaton.table().number(), automaton.table());
    for generation in automaton.take(32) {
        let cells = generation
            .iter()
            .map(|cell| if *cell == 1 { '#' } else { '.' })
            .collect::<String>();
        println!("{}", cells);
    }

    Ok(())
}
