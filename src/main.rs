use clap::Parser;
use pdf_processor::utils::{logger, validation::Validate};
use pdf_processor::{CliConfig, CopyCommand, LocalStorage, ProcessorError};

fn report(e: &ProcessorError) -> ! {
    tracing::debug!("processor failed: {} (Category: {:?})", e, e.category());
    if e.reports_to_stdout() {
        println!("{}", e);
    } else {
        eprintln!("Error: {}", e);
    }
    std::process::exit(e.exit_code());
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report(&e);
    }

    let command = CopyCommand::new(LocalStorage::new(), config);

    match command.run().await {
        Ok(output_path) => {
            tracing::info!("Output saved to: {}", output_path.display());
            println!("{}", output_path.display());
        }
        Err(e) => report(&e),
    }
}
