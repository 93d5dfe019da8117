use anyhow::Result;
use argh::FromArgs;
use course_planner::logging::{LogConfig, init_logging};
use course_planner::{Config, Planner, load_catalog};
use std::path::PathBuf;

#[derive(FromArgs)]
/// Interactive course advising planner.
struct Args {
    #[argh(option, short = 'f')]
    /// course file to load before the menu is shown.
    file: Option<PathBuf>,

    #[argh(option)]
    /// file loaded when the file-name prompt is left empty.
    default_file: Option<PathBuf>,

    #[argh(switch, short = 'v')]
    /// log debug events to stderr.
    verbose: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();
    init_logging(&LogConfig::from_verbose(args.verbose))?;

    let mut config = Config::from_env();
    if let Some(default_file) = args.default_file {
        config = config.with_default_file(default_file);
    }

    let mut planner = Planner::with_config(config);
    if let Some(file) = args.file {
        load_catalog(planner.session_mut(), &file, &mut std::io::stdout())?;
    }

    planner.repl()
}
