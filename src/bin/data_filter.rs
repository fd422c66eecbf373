use clap::Parser;
use demo_kit::core::{ConfigProvider, Storage};
use demo_kit::utils::error::DemoError;
use demo_kit::utils::{logger, validation::Validate};
use demo_kit::{CliConfig, FilterConfig, FilterEngine, LocalStorage};
use std::path::Path;

fn main() {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI config: {:?}", args);

    if let Err(e) = run(args) {
        tracing::error!(
            "❌ data-filter failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}

fn run(args: CliConfig) -> Result<(), DemoError> {
    args.validate()?;

    let Some(path) = args.config.clone() else {
        return execute(LocalStorage::new("."), args);
    };

    tracing::info!("📁 Loading configuration from: {}", path);
    let mut config = FilterConfig::from_file(&path)?;
    config.apply_overrides(args.threshold, args.values_override(), args.format);
    config.validate()?;

    // CSV paths in the file are relative to the file itself
    let base = Path::new(&path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    execute(LocalStorage::new(base), config)
}

fn execute<S: Storage, C: ConfigProvider>(storage: S, config: C) -> Result<(), DemoError> {
    let engine = FilterEngine::new(storage, config);
    let report = engine.run()?;
    println!("{}", engine.render(&report)?);
    Ok(())
}
