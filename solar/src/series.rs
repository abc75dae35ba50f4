//! Year-long solar position series at a fixed clock time

use time::{Date, PrimitiveDateTime, Time};

use crate::{Result, SolarError, SolarPosition, SolarPositionProvider};

/// One solar position per calendar day of a year, all computed for the
/// same local clock time, ordered by day of year.
#[derive(Debug, Clone)]
pub struct SolarPositionSeries {
    year: i32,
    positions: Vec<SolarPosition>,
}

impl SolarPositionSeries {
    /// Compute the series for a whole calendar year.
    ///
    /// Produces one entry per day starting January 1st: 365 entries, or
    /// 366 in a leap year. Pure function of its inputs; recomputing with
    /// the same provider and arguments yields the same series.
    pub fn for_year(
        provider: &dyn SolarPositionProvider,
        year: i32,
        hour: u8,
        minute: u8,
    ) -> Result<Self> {
        let clock = Time::from_hms(hour, minute, 0)
            .map_err(|e| SolarError::InvalidTime(format!("{hour:02}:{minute:02} ({e})")))?;

        let days = time::util::days_in_year(year);
        let mut positions = Vec::with_capacity(days as usize);

        for ordinal in 1..=days {
            let date = Date::from_ordinal_date(year, ordinal)
                .map_err(|e| SolarError::InvalidTime(e.to_string()))?;
            positions.push(provider.position_at(PrimitiveDateTime::new(date, clock))?);
        }

        Ok(Self { year, positions })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[SolarPosition] {
        &self.positions
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SolarPosition> {
        self.positions.iter()
    }

    /// Minimum and maximum equation-of-time values over the year, in
    /// minutes
    pub fn equation_of_time_range(&self) -> (f64, f64) {
        self.positions.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), position| {
                (
                    min.min(position.equation_of_time_min),
                    max.max(position.equation_of_time_min),
                )
            },
        )
    }
}

impl<'a> IntoIterator for &'a SolarPositionSeries {
    type Item = &'a SolarPosition;
    type IntoIter = std::slice::Iter<'a, SolarPosition>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

/// Per-quantity differences between two providers at one instant
#[derive(Debug, Clone, Copy)]
pub struct ModeComparison {
    pub declination_diff_deg: f64,
    pub equation_of_time_diff_min: f64,
}

/// Compare two providers at the same timestamp.
///
/// Useful for validating the closed-form model against a delegated
/// ephemeris and for quantifying the precision gap between modes.
pub fn compare_modes(
    first: &dyn SolarPositionProvider,
    second: &dyn SolarPositionProvider,
    timestamp: PrimitiveDateTime,
) -> Result<ModeComparison> {
    let a = first.position_at(timestamp)?;
    let b = second.position_at(timestamp)?;

    Ok(ModeComparison {
        declination_diff_deg: (a.declination_deg - b.declination_deg).abs(),
        equation_of_time_diff_min: (a.equation_of_time_min - b.equation_of_time_min).abs(),
    })
}
