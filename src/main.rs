use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use word_scramble::cli::{CliInterface, parse_cli};
use word_scramble::logging::init_logger;
use word_scramble::tui::TuiInterface;
use word_scramble::{GameSession, game_loop, load_dictionary, load_start_words};

fn main() -> anyhow::Result<()> {
    let cli = parse_cli();
    init_logger(cli.verbose, cli.tui);

    let mut session = GameSession::new(&cli.fallback_root)?;
    let start_words = load_start_words(cli.start_words_path.as_deref())
        .context("could not load root words")?;
    let dictionary = load_dictionary(cli.dictionary_path.as_deref())
        .context("could not load dictionary")?;
    log::info!(
        "{} root words, {} dictionary words",
        start_words.len(),
        dictionary.len()
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if cli.tui {
        let mut interface = TuiInterface::new().context("failed to initialize terminal")?;
        game_loop(&mut session, &start_words, &dictionary, &mut interface, &mut rng);
        interface.cleanup().context("failed to restore terminal")?;
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(&mut session, &start_words, &dictionary, &mut interface, &mut rng);
    }

    Ok(())
}
