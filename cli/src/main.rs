use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use tuckshop_cli::session::Session;
use tuckshop_common::locale::Language;
use tuckshop_common::store::DataStore;

#[derive(Parser)]
#[command(name = "tuckshop", about = "Console tuckshop purchase simulator")]
struct Cli {
    /// Directory holding users.json and products.json
    /// (default: the platform data dir, e.g. ~/.local/share/tuckshop).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Skip the interactive language menu (en or fr).
    #[arg(long)]
    language: Option<Language>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the demo catalog into the data directory and exit.
    Seed,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the console UI.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let store = DataStore::new(&data_dir);

    if let Some(Command::Seed) = cli.command {
        store
            .seed_demo_data()
            .with_context(|| format!("failed to write demo data to {}", data_dir.display()))?;
        println!("Demo catalog written to {}", data_dir.display());
        return Ok(());
    }

    let mut catalog = store.load().with_context(|| {
        format!(
            "failed to load catalog from {} (run `tuckshop seed` to create demo data)",
            data_dir.display()
        )
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    let end = Session::new(&mut input, &mut output, &mut catalog, &store).run(cli.language)?;
    tracing::info!(?end, "session finished");
    Ok(())
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("tuckshop"))
        .unwrap_or_else(|| PathBuf::from("data"))
}
