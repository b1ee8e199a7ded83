use approx::assert_abs_diff_eq;
use assert_matches::assert_matches;
use nalgebra::Point2;
use prism_dispersion::{
    error::PrismError,
    report::{RayStatus, SceneReport},
    scene_document::SceneDocument,
    viewport::{origin, EXIT_RAY_LENGTH},
    wavelength::Wavelength,
    PrismOpticsModel, PrismScene,
};
use uom::si::angle::radian;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn scene_types_are_thread_safe() {
    assert_send_sync::<PrismScene>();
    assert_send_sync::<SceneReport>();
    assert_send_sync::<PrismError>();
}
#[test]
fn white_light_splits_into_two_rays() {
    let scene = PrismOpticsModel::compute(45.0, 60.0).unwrap();
    assert_eq!(scene.geometry().vertices()[0], origin());
    let red = scene.ray(Wavelength::Red).as_ref().unwrap();
    let violet = scene.ray(Wavelength::Violet).as_ref().unwrap();
    assert_abs_diff_eq!(
        red.angle_inside().get::<radian>(),
        0.486_295_561_228_221_9,
        epsilon = 1e-6
    );
    assert_abs_diff_eq!(
        violet.angle_inside().get::<radian>(),
        0.479_750_607_346_928_3,
        epsilon = 1e-6
    );
    for ray in [red, violet] {
        let segment = ray.exit_segment();
        assert_eq!(segment.start, ray.internal_point());
        assert_abs_diff_eq!(segment.length(), EXIT_RAY_LENGTH, epsilon = 1e-9);
        // rays leave the prism towards the upper right
        assert!(segment.end.x > segment.start.x);
        assert!(segment.end.y < segment.start.y);
    }
    assert!(violet.exit_direction() > red.exit_direction());
}
#[test]
fn prism_angle_sweep() {
    for incident in (1..90_i32).step_by(8) {
        for prism in (1..90_i32).step_by(8) {
            let scene =
                PrismOpticsModel::compute(f64::from(incident), f64::from(prism)).unwrap();
            for (wavelength, ray) in scene.rays() {
                match ray {
                    Ok(path) => {
                        let p = path.internal_point();
                        assert!(p.x.is_finite() && p.y.is_finite());
                        assert!(path.angle_outside().get::<radian>().is_finite());
                    }
                    Err(e) => assert_eq!(e, &PrismError::TotalInternalReflection(wavelength)),
                }
            }
        }
    }
}
#[test]
fn document_to_report() {
    let document = SceneDocument::from_string("incident_angle: 30\nprism_angle: 60\n").unwrap();
    let scene = document.compute().unwrap();
    let report = SceneReport::from(&scene);
    let status: Vec<RayStatus> = report.rays().iter().map(|r| r.status()).collect();
    assert_eq!(
        status,
        vec![RayStatus::Exits, RayStatus::TotalInternalReflection]
    );
    assert_eq!(report.triangle()[0], Point2::new(300.0, 300.0));
    assert!(report.to_yaml().unwrap().contains("wavelength: violet"));
}
#[test]
fn invalid_input() {
    assert_matches!(
        PrismOpticsModel::compute(0.0, 60.0),
        Err(PrismError::InvalidAngle(_))
    );
    assert_matches!(
        PrismOpticsModel::compute(45.0, 90.0),
        Err(PrismError::InvalidAngle(_))
    );
}
