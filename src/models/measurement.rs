use serde::{Deserialize, Serialize};

use super::entry::Entry;

/// A numeric field of an entry that can be charted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementField {
    #[default]
    Weight,
    BodyFatPercent,
    MuscleMass,
    Waist,
    Chest,
    Arms,
    Hips,
    Legs,
    Neck,
    SystolicBp,
    DiastolicBp,
    RestingHeartRate,
}

impl MeasurementField {
    pub const ALL: [MeasurementField; 12] = [
        Self::Weight,
        Self::BodyFatPercent,
        Self::MuscleMass,
        Self::Waist,
        Self::Chest,
        Self::Arms,
        Self::Hips,
        Self::Legs,
        Self::Neck,
        Self::SystolicBp,
        Self::DiastolicBp,
        Self::RestingHeartRate,
    ];

    /// Field name as used in JSON bodies and query strings
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::BodyFatPercent => "body_fat_percent",
            Self::MuscleMass => "muscle_mass",
            Self::Waist => "waist",
            Self::Chest => "chest",
            Self::Arms => "arms",
            Self::Hips => "hips",
            Self::Legs => "legs",
            Self::Neck => "neck",
            Self::SystolicBp => "systolic_bp",
            Self::DiastolicBp => "diastolic_bp",
            Self::RestingHeartRate => "resting_heart_rate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weight => "Weight",
            Self::BodyFatPercent => "Body Fat %",
            Self::MuscleMass => "Muscle Mass",
            Self::Waist => "Waist",
            Self::Chest => "Chest",
            Self::Arms => "Arms",
            Self::Hips => "Hips",
            Self::Legs => "Legs",
            Self::Neck => "Neck",
            Self::SystolicBp => "Systolic",
            Self::DiastolicBp => "Diastolic",
            Self::RestingHeartRate => "Resting Heart Rate",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Self::Weight | Self::MuscleMass => "lbs",
            Self::BodyFatPercent => "%",
            Self::Waist | Self::Chest | Self::Arms | Self::Hips | Self::Legs | Self::Neck => "in",
            Self::SystolicBp | Self::DiastolicBp => "mmHg",
            Self::RestingHeartRate => "bpm",
        }
    }

    /// Decimal places used when rendering a value of this field.
    pub fn precision(&self) -> usize {
        match self {
            Self::SystolicBp | Self::DiastolicBp | Self::RestingHeartRate => 0,
            _ => 1,
        }
    }

    /// Raw stored value, if any. Callers apply the "> 0 means set" rule.
    pub fn value(&self, entry: &Entry) -> Option<f64> {
        match self {
            Self::Weight => Some(entry.weight),
            Self::BodyFatPercent => entry.body_fat_percent,
            Self::MuscleMass => entry.muscle_mass,
            Self::Waist => entry.waist,
            Self::Chest => entry.chest,
            Self::Arms => entry.arms,
            Self::Hips => entry.hips,
            Self::Legs => entry.legs,
            Self::Neck => entry.neck,
            Self::SystolicBp => entry.systolic_bp.map(f64::from),
            Self::DiastolicBp => entry.diastolic_bp.map(f64::from),
            Self::RestingHeartRate => entry.resting_heart_rate.map(f64::from),
        }
    }

    pub fn display_value(&self, entry: &Entry) -> String {
        super::entry::format_measurement(self.value(entry), self.precision())
    }
}

/// Window of history shown on the chart screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1W")]
    Week,
    #[default]
    #[serde(rename = "1M")]
    Month,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    Year,
    #[serde(rename = "All")]
    All,
}

impl TimeRange {
    /// Number of days to look back. `None` means no cutoff.
    pub fn days(&self) -> Option<i64> {
        match self {
            Self::Week => Some(7),
            Self::Month => Some(30),
            Self::ThreeMonths => Some(90),
            Self::SixMonths => Some(180),
            Self::Year => Some(365),
            Self::All => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Week => "1 Week",
            Self::Month => "1 Month",
            Self::ThreeMonths => "3 Months",
            Self::SixMonths => "6 Months",
            Self::Year => "1 Year",
            Self::All => "All Time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::tests::sample_entry;
    use chrono::NaiveDate;

    #[test]
    fn test_units() {
        assert_eq!(MeasurementField::Weight.unit(), "lbs");
        assert_eq!(MeasurementField::MuscleMass.unit(), "lbs");
        assert_eq!(MeasurementField::BodyFatPercent.unit(), "%");
        assert_eq!(MeasurementField::Neck.unit(), "in");
        assert_eq!(MeasurementField::SystolicBp.unit(), "mmHg");
        assert_eq!(MeasurementField::RestingHeartRate.unit(), "bpm");
    }

    #[test]
    fn test_value_reads_matching_column() {
        let mut entry = sample_entry(NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(), 180.0);
        entry.hips = Some(38.5);
        entry.resting_heart_rate = Some(64);
        assert_eq!(MeasurementField::Hips.value(&entry), Some(38.5));
        assert_eq!(MeasurementField::RestingHeartRate.value(&entry), Some(64.0));
        assert_eq!(MeasurementField::Chest.value(&entry), None);
        assert_eq!(MeasurementField::RestingHeartRate.display_value(&entry), "64");
        assert_eq!(MeasurementField::Hips.display_value(&entry), "38.5");
    }

    #[test]
    fn test_field_deserializes_from_query_value() {
        let field: MeasurementField = serde_json::from_str(r#""body_fat_percent""#).unwrap();
        assert_eq!(field, MeasurementField::BodyFatPercent);
        assert_eq!(MeasurementField::default(), MeasurementField::Weight);
    }

    #[test]
    fn test_as_str_matches_serde_name() {
        for field in MeasurementField::ALL {
            let json = serde_json::to_value(field).unwrap();
            assert_eq!(json, field.as_str());
        }
    }

    #[test]
    fn test_time_range_days() {
        assert_eq!(TimeRange::Week.days(), Some(7));
        assert_eq!(TimeRange::Month.days(), Some(30));
        assert_eq!(TimeRange::ThreeMonths.days(), Some(90));
        assert_eq!(TimeRange::SixMonths.days(), Some(180));
        assert_eq!(TimeRange::Year.days(), Some(365));
        assert_eq!(TimeRange::All.days(), None);
        assert_eq!(TimeRange::default(), TimeRange::Month);
    }

    #[test]
    fn test_time_range_serde_codes() {
        let r: TimeRange = serde_json::from_str(r#""3M""#).unwrap();
        assert_eq!(r, TimeRange::ThreeMonths);
        assert_eq!(r.label(), "3 Months");
        assert_eq!(serde_json::to_value(TimeRange::All).unwrap(), "All");
    }
}
