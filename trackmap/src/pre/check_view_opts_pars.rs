use crate::core::playback::PlaybackSpeed;
use crate::interfaces::gui_interface::MapStyle;
use crate::pre::read_view_pars::ViewPars;
use crate::pre::view_opts::ViewOpts;
use anyhow::Context;
use helpers::general::InputValueError;

/// check_view_opts_pars assures that the inserted options and parameters are within reasonable
/// limits and raises an error if not.
pub fn check_view_opts_pars(view_opts: &ViewOpts, view_pars: &ViewPars) -> anyhow::Result<()> {
    // PART 1: VIEW OPTIONS
    if view_opts.gui && view_opts.export_path.is_some() {
        return Err(InputValueError)
            .context("If gui is activated, the telemetry trace cannot be exported!");
    }

    // PART 2: VIEW PARAMETERS
    // PLAYBACK ------------------------------------------------------------------------------------
    if PlaybackSpeed::from_factor(view_pars.initial_speed).is_none() {
        return Err(InputValueError).context(format!(
            "initial_speed is {}, which is not one of the selectable speeds {:?}!",
            view_pars.initial_speed,
            PlaybackSpeed::ALL
                .iter()
                .map(|speed| speed.factor())
                .collect::<Vec<f64>>()
        ));
    }

    // STYLE ---------------------------------------------------------------------------------------
    let style = &view_pars.style;

    if !(0.0 <= style.fit_padding && style.fit_padding <= 200.0) {
        return Err(InputValueError).context(format!(
            "fit_padding is {:.1}px, which is not within the reasonable range of [0.0, 200.0]px!",
            style.fit_padding
        ));
    }

    if !(style.corner_radius > 0.0 && style.marker_radius > 0.0) {
        return Err(InputValueError)
            .context("corner_radius and marker_radius must be greater than zero!");
    }

    // colors are checked by parsing them
    MapStyle::new(style)?;

    Ok(())
}
