use clap::Parser;
use log::info;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use vita::{Layout, OutputFormat, PageConfig, Profile, ProfilePage, VitaError, format, simulate};

/// Print the outline of a profile page with the entry highlighted at a given
/// scroll position.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Profile JSON (`person` + `about`)
    profile: PathBuf,

    /// Page configuration JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// JSON object mapping entry ids to document offsets in pixels.
    /// Without it, anchors are stacked `--spacing` pixels apart.
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Spacing used when no layout file is given
    #[arg(long, default_value_t = 400.0)]
    spacing: f32,

    /// Scroll offset to simulate
    #[arg(long, default_value_t = 0.0)]
    scroll: f32,
}

fn run(args: Args) -> Result<(), VitaError> {
    let profile = Profile::from_file(&args.profile)?;
    let config = match &args.config {
        Some(path) => PageConfig::from_file(path)?,
        None => PageConfig::default(),
    };
    let page = ProfilePage::new(profile, config);
    info!("Loaded profile from {}", args.profile.display());

    let layout = match &args.layout {
        Some(path) => Layout::from_file(path)?,
        None => Layout::evenly_spaced(&page, args.spacing),
    };
    let view = simulate(&page, &layout, args.scroll);

    println!("{}", format::render(&page, &view, args.format)?);
    Ok(())
}

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        unsafe {
            env::set_var("RUST_LOG", "vita=info");
        }
    }
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
