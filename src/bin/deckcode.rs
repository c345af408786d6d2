//! Deckcode Binary
//!
//! Encode a message onto a deck, or read one back.
//!
//! Commands: encode, decode, inspect

use anyhow::Context;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use deckcode::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
    #[arg(short, long, global = true, help = "Log each pipeline stage")]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Write a message onto a freshly shuffled deck", alias = "enc")]
    Encode {
        #[arg(required = true)]
        message: String,
        #[arg(long, env = "DECKCODE_SEED", default_value_t = DEFAULT_SEED)]
        seed: u64,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    #[command(about = "Read a message off 52 cards (numbers or notation like As)", alias = "dec")]
    Decode {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    #[command(about = "Show how a message would be laid out", alias = "ins")]
    Inspect {
        #[arg(required = true)]
        message: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Cards,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Warn,
    });
    match args.command {
        Command::Encode {
            message,
            seed,
            format,
        } => {
            let deck = Messenger::from(seed)
                .encode(&message)
                .with_context(|| format!("encoding {:?}", message))?;
            match format {
                Format::Json => println!("{}", serde_json::to_string(&deck)?),
                Format::Cards => println!("{}", deck),
            }
        }
        Command::Decode { cards } => {
            let ref text = cards.join(" ");
            let deck = serde_json::from_str::<Deck>(text)
                .or_else(|_| Deck::try_from(text.as_str()))
                .context("reading deck")?;
            match Messenger::default().decode(&deck) {
                Some(message) => println!("{}", message),
                None => println!("{}", NO_MESSAGE),
            }
        }
        Command::Inspect { message } => {
            let report = Codec::inspect(&message)
                .with_context(|| format!("inspecting {:?}", message))?;
            println!("{}", report);
        }
    }
    Ok(())
}
