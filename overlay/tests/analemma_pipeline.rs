//! End-to-end pipeline test: solar models through horizon projection to
//! an anchored pixel trajectory, on the reference observer used across
//! the workspace (40.1 N, 88.2 W).

use approx::assert_relative_eq;
use ndarray::Array2;
use overlay::{
    detect_sun, AnchorPoint, CameraCalibration, ImageProjector, PixelShape,
};
use skymap::{HorizonProjector, ObserverLocation};
use solar::{ApproximateModel, SolarPositionProvider, SolarPositionSeries, EARTH_OBLIQUITY_DEG};
use time::macros::datetime;

fn reference_observer() -> HorizonProjector {
    HorizonProjector::new(ObserverLocation::new(40.1, -88.2).unwrap())
}

#[test]
fn full_year_noon_analemma() {
    let model = ApproximateModel::new();
    let series = SolarPositionSeries::for_year(&model, 2026, 12, 0).unwrap();
    assert_eq!(series.len(), 365);

    // Equation of time spans roughly half an hour over the year
    let (min_eot, max_eot) = series.equation_of_time_range();
    let eot_span = max_eot - min_eot;
    assert!(
        (30.0..=35.0).contains(&eot_span),
        "equation-of-time span out of range: {}",
        eot_span
    );

    let projector = reference_observer();
    let positions = projector.project_series(&series);

    // Altitude swings through twice the obliquity between solstices
    let altitudes: Vec<f64> = positions.iter().map(|p| p.altitude_deg).collect();
    let max_altitude = altitudes.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min_altitude = altitudes.iter().cloned().fold(f64::INFINITY, f64::min);
    assert_relative_eq!(
        max_altitude - min_altitude,
        2.0 * EARTH_OBLIQUITY_DEG,
        epsilon = 1.5
    );

    // Every noon azimuth is defined and south of the zenith band
    for position in &positions {
        let azimuth = position.azimuth_deg.unwrap();
        assert!((0.0..360.0).contains(&azimuth));
    }
}

#[test]
fn detected_sun_anchors_the_overlay() {
    // Synthetic photograph: saturated disc where the Sun would be
    let mut photo = Array2::<f64>::zeros((1200, 1600));
    let (sun_x, sun_y) = (900.0, 350.0);
    for row in 0..1200 {
        for col in 0..1600 {
            let dx = col as f64 - sun_x;
            let dy = row as f64 - sun_y;
            if (dx * dx + dy * dy).sqrt() <= 8.0 {
                photo[[row, col]] = 255.0;
            }
        }
    }

    let detection = detect_sun(&photo.view()).unwrap();
    assert_relative_eq!(detection.pixel.0, sun_x, epsilon = 1.0);
    assert_relative_eq!(detection.pixel.1, sun_y, epsilon = 1.0);

    // Anchor the mapping at the detected pixel
    let model = ApproximateModel::new();
    let anchor_solar = model.position_at(datetime!(2026-06-21 12:00)).unwrap();
    let anchor_horizon = reference_observer().project(&anchor_solar);
    let anchor = AnchorPoint::new(anchor_horizon, detection.pixel).unwrap();

    let calibration =
        CameraCalibration::from_fov(PixelShape::new(1600, 1200), 80.0, 60.0).unwrap();
    let image_projector = ImageProjector::new(anchor, calibration);

    // The anchor's own sky coordinates must come back to its pixel
    let (x, y) = image_projector.sky_to_pixel(anchor.altitude_deg(), anchor.azimuth_deg());
    assert_eq!((x, y), detection.pixel);

    // And the full year projects into an ordered, fully visible figure
    let series = SolarPositionSeries::for_year(&model, 2026, 12, 0).unwrap();
    let positions = reference_observer().project_series(&series);
    let trajectory = image_projector.project_year(&positions);

    assert_eq!(trajectory.stats.visible, 365);
    assert_eq!(trajectory.stats.filtered_below_horizon, 0);

    // The anchor day itself sits exactly on the anchor pixel
    let solstice = trajectory
        .points
        .iter()
        .find(|p| p.day_of_year == 172)
        .unwrap();
    assert_relative_eq!(solstice.pixel_x, sun_x, epsilon = 1.0);
    assert_relative_eq!(solstice.pixel_y, sun_y, epsilon = 1.0);
}
