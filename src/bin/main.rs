use clap::Parser;

use bank_ledger::{Ledger, Menu, Operation};

/// A cli interface to the in-memory bank ledger
#[derive(Debug, Parser)]
#[clap(version)]
struct Args {
    /// A CSV file of operations to apply instead of running the interactive menu
    #[clap(long)]
    script: Option<std::path::PathBuf>,
    /// The log filter, overridden by `RUST_LOG`
    #[clap(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let mut ledger = Ledger::new();
    match args.script {
        Some(path) => run_script(&mut ledger, path)?,
        None => {
            let stdin = std::io::stdin();
            Menu::new(&mut ledger, stdin.lock(), std::io::stdout()).run()?;
        }
    }

    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

fn run_script(ledger: &mut Ledger, path: std::path::PathBuf) -> anyhow::Result<()> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(&path)?;
    tracing::info!(script = %path.display(), "applying operations");

    for operation in reader.deserialize::<Operation>() {
        let operation = operation?;
        // failed operations are logged and otherwise ignored
        if let Err(error) = ledger.apply(&operation) {
            tracing::warn!(?operation, %error, "operation rejected");
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(std::io::stdout());

    for account in ledger.all_accounts().into_iter().flatten() {
        writer.serialize(account)?;
    }
    writer.flush()?;

    Ok(())
}
