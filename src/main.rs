use clap::Parser;
use miette::{IntoDiagnostic, Result};
use promopay::application::engine::AllocationEngine;
use promopay::domain::ports::MethodStoreBox;
use promopay::infrastructure::in_memory::InMemoryMethodStore;
use promopay::interfaces::json::method_reader::MethodReader;
use promopay::interfaces::json::order_reader::OrderReader;
use promopay::interfaces::json::spend_writer::SpendWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input orders JSON file
    orders: PathBuf,

    /// Input payment methods JSON file
    methods: PathBuf,

    /// Logging verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    promopay::logging::set_up(cli.verbose);

    let orders_file = File::open(&cli.orders).into_diagnostic()?;
    let orders = OrderReader::new(orders_file)
        .read_orders()
        .into_diagnostic()?;
    tracing::info!("loaded {} orders from {}", orders.len(), cli.orders.display());

    let methods_file = File::open(&cli.methods).into_diagnostic()?;
    let methods = MethodReader::new(methods_file)
        .read_methods()
        .into_diagnostic()?;
    tracing::info!(
        "loaded {} payment methods from {}",
        methods.len(),
        cli.methods.display()
    );

    let store: MethodStoreBox = Box::new(InMemoryMethodStore::from_methods(&methods));
    let engine = AllocationEngine::new(store);

    // Orders are allocated strictly in input sequence; an unpayable order
    // is reported and skipped without stopping the run.
    for order in &orders {
        if let Err(e) = engine.process_order(order).await {
            eprintln!("{e}");
        }
    }

    let report = engine.into_results().await.into_diagnostic()?;

    let stdout = io::stdout();
    let mut writer = SpendWriter::new(stdout.lock());
    writer.write_report(&report).into_diagnostic()?;

    Ok(())
}
