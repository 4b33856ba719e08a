use anyhow::anyhow;
use clap::Parser;
use gui::core::gui::TrackMapApp;
use std::path::Path;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trackmap::core::track_map::TrackMap;
use trackmap::post::export::export_trace;
use trackmap::post::lap_summary::print_report;
use trackmap::pre::check_view_opts_pars::check_view_opts_pars;
use trackmap::pre::read_data::load_track_data;
use trackmap::pre::read_view_pars::read_view_pars;
use trackmap::pre::view_opts::ViewOpts;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get viewer options from the command line arguments
    let view_opts: ViewOpts = ViewOpts::parse();

    // set up logging (RUST_LOG overrides the level selected by the debug flag)
    let default_level = if view_opts.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // read and check viewer parameters
    let view_pars = read_view_pars(view_opts.parfile_path.as_path())?;
    check_view_opts_pars(&view_opts, &view_pars)?;

    // data files are given relative to the parameter file
    let base_dir = view_opts
        .parfile_path
        .parent()
        .unwrap_or_else(|| Path::new("."));

    info!("Loading track map {}", view_pars.name);

    // EXECUTION -----------------------------------------------------------------------------------
    let t_start = Instant::now();
    let track_data = load_track_data(&view_pars, base_dir);
    let track_map = TrackMap::new(&view_pars.name, track_data);

    info!(
        "Execution time (loading and mapping): {}ms",
        t_start.elapsed().as_millis()
    );

    if view_opts.gui {
        // GUI CASE --------------------------------------------------------------------------------
        // start GUI (must be done in the main thread)
        let app = TrackMapApp::new(track_map, &view_pars)?;
        let native_options = eframe::NativeOptions::default();

        eframe::run_native(
            "TrackMap",
            native_options,
            Box::new(|_cc| Box::new(app)),
        )
        .map_err(|e| anyhow!("Failed to run the GUI: {}", e))?;
    } else {
        // POST-PROCESSING -------------------------------------------------------------------------
        // print results
        print_report(&track_map, view_opts.index);

        // export mapped telemetry trace
        if let Some(export_path) = view_opts.export_path.as_ref() {
            let no_rows = export_trace(&track_map, export_path.as_path())?;
            info!(
                "Exported {} trace rows to {}",
                no_rows,
                export_path.display()
            );
        }
    }

    Ok(())
}
