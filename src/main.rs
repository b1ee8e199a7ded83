use clap::Parser;
use log::{info, warn};
use prism_dispersion::{
    console::{show_intro, Args, PartialArgs},
    error::PrismResult,
    report::{RayStatus, SceneReport},
    PrismOpticsModel,
};

fn main() -> PrismResult<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    show_intro();

    //parse CLI arguments
    let prism_args = Args::try_from(PartialArgs::parse())?;

    //compute the prism scene
    let scene = PrismOpticsModel::compute(prism_args.incident_angle, prism_args.prism_angle)?;
    let report = SceneReport::from(&scene);
    for ray in report.rays() {
        if ray.status() != RayStatus::Exits {
            warn!("{} ray does not leave the prism", ray.wavelength());
        }
    }

    //write or print the report
    if let Some(output) = &prism_args.output {
        report.write_to_file(output)?;
        info!("report written to {}", output.display());
    } else {
        print!("{}", report.to_yaml()?);
    }
    Ok(())
}
