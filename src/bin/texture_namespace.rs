//! Pipeline filter entry point.
//!
//! Usage:
//!   texture-namespace '{"studio":"chillcraft","project":"mechs"}'
//!   texture-namespace --pack-root build/RP '{"texture_dirs":["entity"]}'
//!
//! Status lines go to stdout. Set `RUST_LOG=debug` for per-file tracing on
//! stderr.

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;
use texture_namespace::{DEFAULT_PACK_ROOT, Settings, migrate_pack_with_progress};

#[derive(Parser, Debug)]
#[command(name = "texture-namespace")]
#[command(about = "Move pack textures under textures/<studio>/<project>/ and rewrite JSON references")]
struct Cli {
    /// Settings object as JSON (studio, project, texture_dirs). Unreadable input uses defaults.
    #[arg(allow_hyphen_values = true)]
    settings: Option<String>,
    /// Further arguments from the pipeline; ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    ignored: Vec<String>,
    /// Resource pack root containing textures/.
    #[arg(long, env = "TEXTURE_NAMESPACE_PACK_ROOT", default_value = DEFAULT_PACK_ROOT)]
    pack_root: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if !cli.ignored.is_empty() {
        debug!("ignoring extra arguments {:?}", cli.ignored);
    }
    let settings = Settings::from_arg(cli.settings.as_deref());

    migrate_pack_with_progress(&cli.pack_root, &settings, |line| println!("{line}"))?;
    Ok(())
}
