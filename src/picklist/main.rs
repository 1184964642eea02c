use clap::Parser;
use log::{debug, warn};
use picklist::api::{MappingOverrides, PicklistApi};
use picklist::config::{PicklistConfig, CONFIG_DIRNAME};
use picklist::error::Result;
use picklist::logging;
use std::io::Read;
use std::path::{Path, PathBuf};

mod args;
mod print;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        print::print_error(&e.to_string());
        std::process::exit(1);
    }
}

struct AppContext {
    api: PicklistApi,
    config_dir: PathBuf,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    // Setting a key must work even when the stored file is broken
    let repairing = matches!(
        cli.command,
        Commands::Config {
            key: Some(_),
            value: Some(_)
        }
    );
    let ctx = init_context(repairing)?;

    match cli.command {
        Commands::Build {
            file,
            value_field,
            display_format,
            json,
        } => {
            let overrides = MappingOverrides {
                value_field,
                display_format,
            };
            handle_build(&ctx, file.as_deref(), &overrides, json)
        }
        Commands::Config { key, value } => handle_config(&ctx, key, value),
    }
}

fn init_context(repairing: bool) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = cwd.join(CONFIG_DIRNAME);
    let config = match PicklistConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) if repairing => {
            warn!("ignoring unreadable config in {}: {}", config_dir.display(), e);
            PicklistConfig::default()
        }
        Err(e) => return Err(e),
    };
    debug!("using config from {}", config_dir.display());

    Ok(AppContext {
        api: PicklistApi::new(config),
        config_dir,
    })
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn handle_build(
    ctx: &AppContext,
    file: Option<&Path>,
    overrides: &MappingOverrides,
    json: bool,
) -> Result<()> {
    let input = read_input(file)?;
    let pairs = ctx.api.build_json(&input, overrides)?;

    if json {
        print::print_pairs_json(&pairs)
    } else {
        print::print_pairs(&pairs);
        Ok(())
    }
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = ctx.api.config().clone();

    match (key, value) {
        (None, _) => print::print_config(&config),
        (Some(key), None) => print::print_config_value(config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(&ctx.config_dir)?;
            print::print_success(&format!("Set {} = {}", key, value));
        }
    }
    Ok(())
}
