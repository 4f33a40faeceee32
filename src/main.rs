use clap::{Parser, Subcommand};
use toptrumps::card::{Card, CardCatalog};
use toptrumps::config::GameConfig;
use toptrumps::console::TerminalConsole;
use toptrumps::game::Game;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "toptrumps")]
#[command(about = "Top Trumps, but it's planes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the deal (for reproducibility)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Card catalog JSON to play with instead of the bundled one
    #[arg(short, long, global = true)]
    cards: Option<String>,

    /// Log game events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Keep previous rounds on screen
    #[arg(long, global = true)]
    no_clear: bool,

    /// Go straight to the next round without waiting for enter
    #[arg(long, global = true)]
    no_pause: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a two-player game (default)
    Play,

    /// List every card in the catalog
    Cards,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            seed: self.seed,
            cards: self.cards.clone(),
            clear_screen: !self.no_clear,
            pause_between_rounds: !self.no_pause,
            verbose: self.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let config = cli.config();
    init_tracing(&config);

    let catalog = match config.load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("✗ Failed to load cards: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Some(Commands::Cards) => list_cards(&catalog),
        Some(Commands::Play) | None => play(&config, &catalog),
    }
}

/// Logs go to stderr so they never interleave with the game's prompts on stdout
fn init_tracing(config: &GameConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn play(config: &GameConfig, catalog: &CardCatalog) {
    let mut rng = config.rng();
    let mut console = TerminalConsole::stdout();

    let game = match Game::deal(catalog, &mut rng) {
        Ok(game) => game,
        Err(e) => {
            eprintln!("✗ Failed to deal: {}", e);
            std::process::exit(1);
        }
    };
    let mut game = game.with_interludes(config.pause_between_rounds, config.clear_screen);

    if let Err(e) = game.introduce(&mut console, catalog.card_count(), rng.seed()) {
        eprintln!("✗ Failed to start the game: {}", e);
        std::process::exit(1);
    }

    match game.run(&mut console) {
        Ok(result) => {
            println!();
            println!(
                "Rounds played: {} ({} drawn)",
                result.rounds, result.draws
            );
            for (player, size) in result.deck_sizes.iter().enumerate() {
                println!("  Player {}: {} cards", player + 1, size);
            }
        }
        Err(e) => {
            eprintln!("✗ Game aborted: {}", e);
            std::process::exit(1);
        }
    }
}

fn list_cards(catalog: &CardCatalog) {
    let attributes = Card::attributes();

    print!("{:30}", "Name");
    for attribute in attributes {
        print!(" {:>24}", attribute.name);
    }
    println!();
    println!("{:-<130}", "");

    for card in catalog.cards() {
        print!("{:30}", card.name());
        for attribute in attributes {
            print!(" {:>24}", attribute.value(card));
        }
        println!();
    }
    println!("\n{} cards", catalog.card_count());
}
