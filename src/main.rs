// SPDX-License-Identifier: MPL-2.0
use pinch_viewer::app::script::{load_script, Script};
use pinch_viewer::app::{Session, TextRenderer};
use pinch_viewer::config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: pinch_viewer [--config-dir DIR] [--script FILE] MANIFEST";

struct Flags {
    config_dir: Option<PathBuf>,
    script: Option<PathBuf>,
    manifest: PathBuf,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let script = args.opt_value_from_str("--script")?;
    let manifest = args.free_from_str()?;
    Ok(Flags {
        config_dir,
        script,
        manifest,
    })
}

fn run(flags: Flags) -> pinch_viewer::error::Result<()> {
    let (config, warning) = config::load_with_override(flags.config_dir);
    if let Some(key) = warning {
        tracing::warn!(%key, "using default settings");
    }

    let script = match &flags.script {
        Some(path) => load_script(path)?,
        None => Script::default(),
    };

    let mut session = Session::open(&config, &flags.manifest)?;
    let stdout = std::io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    session.render(&mut renderer)?;
    let rendered = session.replay(&script, &mut renderer)?;
    tracing::info!(events = script.event.len(), rendered, "replay finished");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    match run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "viewer session failed");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
