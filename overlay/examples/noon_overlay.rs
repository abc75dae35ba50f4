//! Compute a noon analemma trajectory for a synthetic photograph and
//! print the pixel path with its statistics.

use ndarray::Array2;
use overlay::{detect_sun, AnchorPoint, CameraCalibration, ImageProjector, PixelShape};
use skymap::{HorizonProjector, ObserverLocation};
use solar::{ApproximateModel, SolarPositionProvider, SolarPositionSeries};
use time::macros::datetime;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let observer = ObserverLocation::new(40.1, -88.2)?;
    let projector = HorizonProjector::new(observer);
    let model = ApproximateModel::new();

    // Synthetic photo with a bright disc standing in for the Sun
    let shape = PixelShape::new(1600, 1200);
    let mut photo = Array2::<f64>::zeros((shape.height, shape.width));
    for row in 330..370 {
        for col in 880..920 {
            let dx = col as f64 - 900.0;
            let dy = row as f64 - 350.0;
            if (dx * dx + dy * dy).sqrt() <= 9.0 {
                photo[[row, col]] = 255.0;
            }
        }
    }

    let detection = detect_sun(&photo.view())?;
    println!(
        "sun detected at ({:.1}, {:.1}) via {:?}",
        detection.pixel.0, detection.pixel.1, detection.strategy
    );

    let anchor_time = datetime!(2026-06-21 12:00);
    let anchor_horizon = projector.project(&model.position_at(anchor_time)?);
    let anchor = AnchorPoint::new(anchor_horizon, detection.pixel)?;

    let calibration = CameraCalibration::from_fov(shape, 80.0, 60.0)?;
    let image_projector = ImageProjector::new(anchor, calibration);

    let series = SolarPositionSeries::for_year(&model, 2026, 12, 0)?;
    let positions = projector.project_series(&series);
    let trajectory = image_projector.project_year(&positions);

    println!(
        "{} visible points, {} below horizon, {} inside the frame",
        trajectory.stats.visible,
        trajectory.stats.filtered_below_horizon,
        trajectory.within_bounds(shape)
    );

    for point in trajectory.points.iter().step_by(30) {
        println!(
            "day {:>3}  alt {:>6.2}  az {:>7.2}  pixel ({:>7.1}, {:>7.1})",
            point.day_of_year, point.altitude_deg, point.azimuth_deg, point.pixel_x, point.pixel_y
        );
    }

    Ok(())
}
