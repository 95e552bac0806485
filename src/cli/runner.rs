use std::io::Write;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use doc2pdf::core::locator::resolve_override_from_env;
use doc2pdf::core::params::ConfigFile;
use doc2pdf::{
    Console, ConversionParams, Converter, convert_inputs, find_converter, prepare_output_dir,
};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(enabled: bool) {
    if enabled {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn locate_converter(command: Option<&str>) -> Result<Converter, AppError> {
    match command {
        Some(cmd) => resolve_override_from_env(cmd).ok_or_else(|| {
            AppError::ConverterOverrideNotFound {
                command: cmd.to_string(),
            }
        }),
        None => find_converter().ok_or(AppError::ConverterNotFound),
    }
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    init_logging(args.log);

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            ConfigFile::load(path)?
        }
        None => ConfigFile::default(),
    };

    let converter = locate_converter(args.converter.as_deref().or(config.converter.as_deref()))?;

    let mut console = Console::stdio();
    writeln!(console.out, "Using LibreOffice command: {}", converter.command())?;
    debug!("Converter executable: {:?}", converter.program());

    let output_dir = match args.output_dir.or(config.output_dir) {
        Some(dir) => {
            let dir = prepare_output_dir(&dir)?;
            writeln!(console.out, "Output directory set to: {}", dir.display())?;
            Some(dir)
        }
        None => None,
    };

    let params = ConversionParams::default()
        .with_extensions(&config.extensions)
        .with_output_dir(output_dir);
    debug!("Supported extensions: {:?}", params.extensions);

    convert_inputs(&args.inputs, &params, &converter, &mut console)?;

    writeln!(console.out, "\nConversion process finished.")?;
    Ok(())
}
