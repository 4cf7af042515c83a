use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    banner, init_logging, random_board, render_board, CliGunner, Combatant, ConsoleReporter, Game,
    MatchState, RandomGunner, Side, BOARD_SIZE,
};

#[derive(Parser)]
#[command(author, version, about = "Classic sea battle on a 6x6 grid", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g. --seed 12345)")]
        seed: Option<u64>,
    },
    /// Watch two automated gunners play each other.
    Auto {
        #[arg(long, help = "Fix RNG seed for a reproducible game (e.g. --seed 12345)")]
        seed: Option<u64>,
    },
}

fn seeded_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Play { seed } => play(seed),
        Commands::Auto { seed } => auto(seed),
    }
}

/// Human (side A) against a uniform-random computer opponent (side B).
fn play(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let your_board = random_board(BOARD_SIZE, &mut rng);
    let enemy_board = random_board(BOARD_SIZE, &mut rng);
    let enemy_rng = SmallRng::from_rng(&mut rng);

    let you = Combatant::new("You", Box::new(CliGunner::new()));
    let computer = Combatant::new("Computer", Box::new(RandomGunner::new(BOARD_SIZE, enemy_rng)));

    let mut game = Game::new(your_board, you, enemy_board, computer);
    let mut reporter = ConsoleReporter;

    println!("{}", banner());
    let winner = loop {
        println!("\nYour fleet:");
        print!("{}", render_board(game.board(Side::A), true));
        println!("Enemy waters:");
        print!("{}", render_board(game.board(Side::B), false));
        if let Some(side) = game.active() {
            println!("--- {} to fire ---", game.combatant(side).name());
        }
        if let MatchState::Finished(winner) = game.play_turn(&mut reporter) {
            break winner;
        }
    };

    println!("\nFinal enemy board:");
    print!("{}", render_board(game.board(Side::B), true));
    match winner {
        Side::A => println!("\nYou win! The enemy fleet is destroyed."),
        Side::B => println!("\nThe computer wins. Your fleet is destroyed."),
    }
    Ok(())
}

/// Two automated gunners, useful for demos and sanity checks.
fn auto(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let board_a = random_board(BOARD_SIZE, &mut rng);
    let board_b = random_board(BOARD_SIZE, &mut rng);
    let rng_a = SmallRng::from_rng(&mut rng);
    let rng_b = SmallRng::from_rng(&mut rng);

    let gunner_a = Combatant::new("Gunner A", Box::new(RandomGunner::new(BOARD_SIZE, rng_a)));
    let gunner_b = Combatant::new("Gunner B", Box::new(RandomGunner::new(BOARD_SIZE, rng_b)));

    let mut game = Game::new(board_a, gunner_a, board_b, gunner_b);
    let mut reporter = ConsoleReporter;
    let winner = game.run(&mut reporter);

    println!("\n{} wins in {} turns", game.combatant(winner).name(), game.turns());
    println!("\nSide A board:");
    print!("{}", render_board(game.board(Side::A), true));
    println!("Side B board:");
    print!("{}", render_board(game.board(Side::B), true));
    Ok(())
}
