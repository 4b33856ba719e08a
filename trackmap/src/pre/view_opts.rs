use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Alexander Heilmeier <alexander.heilmeier@tum.de>",
    name = "TrackMap",
    about = "Track map with a synchronized playback of a recorded driver lap"
)]
pub struct ViewOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Activate debug logging
    #[clap(short, long)]
    pub debug: bool,

    /// Activate GUI (otherwise a report is printed to the console)
    #[clap(short, long)]
    pub gui: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set path to the view parameter file
    #[clap(parse(from_os_str), short, long)]
    pub parfile_path: PathBuf,

    /// Set sample index for which the telemetry metrics are reported (not relevant in case GUI is
    /// activated)
    #[clap(short, long, default_value = "0")]
    pub index: usize,

    /// Set path of a CSV file the mapped telemetry trace is exported to (not usable in case GUI is
    /// activated)
    #[clap(parse(from_os_str), short, long)]
    pub export_path: Option<PathBuf>,
}
