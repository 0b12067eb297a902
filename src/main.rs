use clap::Parser;
use csvgen::utils::{logger, validation::Validate};
use csvgen::{CliConfig, CsvGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting csvgen");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(2);
    }

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let generator = CsvGenerator::random(config.columns, &mut rng);

    match generator.generate(&config.output, config.rows, &mut rng) {
        Ok(()) => {
            tracing::info!("CSV generation completed");
            println!(
                "Wrote {} rows x {} columns to {}",
                config.rows, config.columns, config.output
            );
        }
        Err(e) => {
            tracing::error!("CSV generation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
