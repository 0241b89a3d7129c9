//! CLI entry point for themeport.

mod cli;

use clap::error::ErrorKind;
use clap::Parser;
use themeport::build_info;
use themeport::config::load_config_with_source;
use themeport::error::AppError;
use themeport::logging::init_logging;
use themeport::render::{OutputStyle, Renderer};
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = match cli::Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors share exit code 1 with every other non-data failure.
            let _ = e.print();
            std::process::exit(1);
        }
    };

    init_logging();
    debug!("{}", build_info::summary_line());

    let mut config = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => {
            debug!(source = ?loaded.source, "using config");
            loaded.config
        }
        Err(e) => {
            let err = AppError::from(e);
            Renderer::new(!args.no_color).error(&err.to_string());
            std::process::exit(err.exit_code());
        }
    };
    if args.no_color {
        config.display.color = false;
    }

    let renderer = Renderer::new(config.display.color);
    let style = if args.preview {
        OutputStyle::Preview
    } else {
        OutputStyle::Plain
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = themeport::run(&args.source, &config, &renderer, style, &mut stdout).await {
        match e {
            AppError::Palette(_) => renderer.fatal(&e.to_string()),
            _ => renderer.error(&e.to_string()),
        }
        std::process::exit(e.exit_code());
    }
}
