//! Weather report formatting
//!
//! The one piece of real domain logic: classifying wind speed into a
//! severity band, classifying wind direction into a compass octant, and
//! composing the final Russian summary.

use std::fmt;

use crate::models::WeatherRecord;

/// hPa to millimeters of mercury
const HPA_TO_MMHG: f64 = 0.750_062;

/// Wind severity bands over integer speed in m/s
///
/// Closed upper bounds {5, 14, 24, 32}; anything above the last bound is
/// storm-force. Total over all integers: negative input lands in the
/// lowest band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WindStrength {
    Light,
    Moderate,
    Strong,
    VeryStrong,
    StormForce,
}

impl WindStrength {
    /// Classify an integer wind speed (m/s)
    #[must_use]
    pub fn from_speed(speed_ms: i64) -> Self {
        if speed_ms <= 5 {
            Self::Light
        } else if speed_ms <= 14 {
            Self::Moderate
        } else if speed_ms <= 24 {
            Self::Strong
        } else if speed_ms <= 32 {
            Self::VeryStrong
        } else {
            Self::StormForce
        }
    }
}

impl fmt::Display for WindStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "слабый"),
            Self::Moderate => write!(f, "умеренный"),
            Self::Strong => write!(f, "сильный"),
            Self::VeryStrong => write!(f, "очень сильный"),
            Self::StormForce => write!(f, "ураганный"),
        }
    }
}

/// The eight principal and intermediate compass directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompassOctant {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassOctant {
    /// Classify a wind bearing in degrees (0/360 = north, clockwise)
    ///
    /// Strict `>` thresholds evaluated in descending order, falling back
    /// to north at 22.5 and below. The boundary set is not evenly spaced
    /// around the circle (157.5 down to 122.5 spans only 35 degrees);
    /// it is kept as-is to match the established reply text.
    #[must_use]
    pub fn from_degrees(degree: f64) -> Self {
        if degree > 337.5 {
            Self::North
        } else if degree > 292.5 {
            Self::NorthWest
        } else if degree > 247.5 {
            Self::West
        } else if degree > 202.5 {
            Self::SouthWest
        } else if degree > 157.5 {
            Self::South
        } else if degree > 122.5 {
            Self::SouthEast
        } else if degree > 67.5 {
            Self::East
        } else if degree > 22.5 {
            Self::NorthEast
        } else {
            Self::North
        }
    }
}

impl fmt::Display for CompassOctant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::North => write!(f, "северный"),
            Self::NorthEast => write!(f, "северо-восточный"),
            Self::East => write!(f, "восточный"),
            Self::SouthEast => write!(f, "юго-восточный"),
            Self::South => write!(f, "южный"),
            Self::SouthWest => write!(f, "юго-западный"),
            Self::West => write!(f, "западный"),
            Self::NorthWest => write!(f, "северо-западный"),
        }
    }
}

/// Compose the reply text for one weather snapshot
///
/// Pure and deterministic: the same record always yields byte-identical
/// output. Temperatures and pressure are rounded half away from zero;
/// humidity is passed through as-is. The wind speed is rounded once and
/// that integer drives both the severity label and the displayed value.
#[must_use]
pub fn format_report(record: &WeatherRecord) -> String {
    let wind_speed = record.wind_speed.round() as i64;

    format!(
        "Погода: {}\n\
         Температура: {}-{}°C\n\
         Давление: {} мм рт. ст., влажность {}%\n\
         Ветер: {}, {} м/с, {}",
        record.description,
        record.temp_min.round() as i64,
        record.temp_max.round() as i64,
        (record.pressure * HPA_TO_MMHG).round() as i64,
        record.humidity,
        WindStrength::from_speed(wind_speed),
        wind_speed,
        CompassOctant::from_degrees(record.wind_deg),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> WeatherRecord {
        WeatherRecord {
            description: "пасмурно".to_string(),
            temp_min: 3.4,
            temp_max: 3.6,
            pressure: 1013.0,
            humidity: 97.0,
            wind_speed: 4.3,
            wind_deg: 250.0,
        }
    }

    #[test]
    fn test_wind_strength_band_boundaries() {
        assert_eq!(WindStrength::from_speed(0), WindStrength::Light);
        assert_eq!(WindStrength::from_speed(5), WindStrength::Light);
        assert_eq!(WindStrength::from_speed(6), WindStrength::Moderate);
        assert_eq!(WindStrength::from_speed(14), WindStrength::Moderate);
        assert_eq!(WindStrength::from_speed(15), WindStrength::Strong);
        assert_eq!(WindStrength::from_speed(24), WindStrength::Strong);
        assert_eq!(WindStrength::from_speed(25), WindStrength::VeryStrong);
        assert_eq!(WindStrength::from_speed(32), WindStrength::VeryStrong);
        assert_eq!(WindStrength::from_speed(33), WindStrength::StormForce);
        assert_eq!(WindStrength::from_speed(100), WindStrength::StormForce);
    }

    #[test]
    fn test_wind_strength_negative_is_light() {
        assert_eq!(WindStrength::from_speed(-1), WindStrength::Light);
    }

    #[test]
    fn test_wind_strength_monotone() {
        let mut previous = WindStrength::from_speed(0);
        for speed in 1..=40 {
            let current = WindStrength::from_speed(speed);
            assert!(current >= previous, "severity regressed at {} m/s", speed);
            previous = current;
        }
    }

    #[test]
    fn test_compass_octant_centers() {
        assert_eq!(CompassOctant::from_degrees(0.0), CompassOctant::North);
        assert_eq!(CompassOctant::from_degrees(45.0), CompassOctant::NorthEast);
        assert_eq!(CompassOctant::from_degrees(90.0), CompassOctant::East);
        assert_eq!(CompassOctant::from_degrees(135.0), CompassOctant::SouthEast);
        assert_eq!(CompassOctant::from_degrees(180.0), CompassOctant::South);
        assert_eq!(CompassOctant::from_degrees(225.0), CompassOctant::SouthWest);
        assert_eq!(CompassOctant::from_degrees(270.0), CompassOctant::West);
        assert_eq!(CompassOctant::from_degrees(315.0), CompassOctant::NorthWest);
        assert_eq!(CompassOctant::from_degrees(359.0), CompassOctant::North);
    }

    #[test]
    fn test_compass_boundaries_are_strict() {
        // Exactly on a threshold falls to the band below it
        assert_eq!(CompassOctant::from_degrees(22.5), CompassOctant::North);
        assert_eq!(CompassOctant::from_degrees(22.6), CompassOctant::NorthEast);
        assert_eq!(CompassOctant::from_degrees(337.5), CompassOctant::NorthWest);
        assert_eq!(CompassOctant::from_degrees(338.0), CompassOctant::North);
    }

    #[test]
    fn test_compass_asymmetric_southeast_band() {
        // The south band starts above 157.5, not 167.5: 155 is still
        // south-east even though a naive even split would call it south
        assert_eq!(CompassOctant::from_degrees(123.0), CompassOctant::SouthEast);
        assert_eq!(CompassOctant::from_degrees(155.0), CompassOctant::SouthEast);
        assert_eq!(CompassOctant::from_degrees(158.0), CompassOctant::South);
    }

    #[test]
    fn test_format_report_full_message() {
        let report = format_report(&test_record());
        assert_eq!(
            report,
            "Погода: пасмурно\n\
             Температура: 3-4°C\n\
             Давление: 760 мм рт. ст., влажность 97%\n\
             Ветер: слабый, 4 м/с, западный"
        );
    }

    #[test]
    fn test_format_report_is_deterministic() {
        let record = test_record();
        assert_eq!(format_report(&record), format_report(&record));
    }

    #[test]
    fn test_temperatures_round_independently() {
        let report = format_report(&test_record());
        // 3.4 and 3.6 round to 3 and 4, not to an averaged pair
        assert!(report.contains("Температура: 3-4°C"));
    }

    #[test]
    fn test_pressure_conversion_to_mmhg() {
        // 1013 hPa * 0.750062 = 760.1 -> 760
        let report = format_report(&test_record());
        assert!(report.contains("760 мм рт. ст."));
    }

    #[test]
    fn test_humidity_passes_through_unrounded() {
        let mut record = test_record();
        record.humidity = 80.5;
        assert!(format_report(&record).contains("влажность 80.5%"));
    }

    #[test]
    fn test_wind_speed_rounds_once_for_label_and_value() {
        let mut record = test_record();
        record.wind_speed = 5.6; // rounds to 6: moderate, displayed as 6
        let report = format_report(&record);
        assert!(report.contains("Ветер: умеренный, 6 м/с"));
    }

    #[test]
    fn test_negative_temperatures() {
        let mut record = test_record();
        record.temp_min = -10.4;
        record.temp_max = -8.6;
        assert!(format_report(&record).contains("Температура: -10--9°C"));
    }
}
