use serde::{Deserialize, Serialize};

/// How worrying a reading is. Drives the color the UI shows next to a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Benign,
    Caution,
    Warning,
    Critical,
    Neutral,
}

impl Severity {
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Benign => "green",
            Severity::Caution => "yellow",
            Severity::Warning => "orange",
            Severity::Critical => "red",
            Severity::Neutral => "gray",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BloodPressureCategory {
    Normal,
    Elevated,
    #[serde(rename = "stage1_high")]
    Stage1High,
    #[serde(rename = "stage2_high")]
    Stage2High,
    Unknown,
}

impl BloodPressureCategory {
    /// Classify a reading. Both values must be present and positive; otherwise
    /// the category is `Unknown`.
    ///
    /// The branches overlap by range and are resolved by order: the first
    /// match wins. Keep them as a chain.
    pub fn classify(systolic: Option<i32>, diastolic: Option<i32>) -> Self {
        let (s, d) = match (systolic, diastolic) {
            (Some(s), Some(d)) if s > 0 && d > 0 => (s, d),
            _ => return Self::Unknown,
        };

        if s < 120 && d < 80 {
            Self::Normal
        } else if s < 130 && d < 80 {
            Self::Elevated
        } else if (130..140).contains(&s) || (80..90).contains(&d) {
            Self::Stage1High
        } else if s >= 140 || d >= 90 {
            Self::Stage2High
        } else {
            Self::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Elevated => "Elevated",
            Self::Stage1High => "Stage 1 High",
            Self::Stage2High => "Stage 2 High",
            Self::Unknown => "Unknown",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Normal => Severity::Benign,
            Self::Elevated => Severity::Caution,
            Self::Stage1High => Severity::Warning,
            Self::Stage2High => Severity::Critical,
            Self::Unknown => Severity::Neutral,
        }
    }

    pub fn color(&self) -> &'static str {
        self.severity().color()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateCategory {
    Low,
    Normal,
    High,
    Unknown,
}

impl HeartRateCategory {
    pub fn classify(bpm: Option<i32>) -> Self {
        match bpm {
            Some(hr) if hr > 0 => {
                if hr < 60 {
                    Self::Low
                } else if hr <= 100 {
                    Self::Normal
                } else {
                    Self::High
                }
            }
            _ => Self::Unknown,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low (Bradycardia)",
            Self::Normal => "Normal",
            Self::High => "High (Tachycardia)",
            Self::Unknown => "Unknown",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::Normal => Severity::Benign,
            Self::Low | Self::High => Severity::Caution,
            Self::Unknown => Severity::Neutral,
        }
    }

    /// Out-of-range heart rates share the caution severity with Elevated
    /// blood pressure but are drawn orange, not yellow.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Low | Self::High => "orange",
            _ => self.severity().color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bp(s: i32, d: i32) -> BloodPressureCategory {
        BloodPressureCategory::classify(Some(s), Some(d))
    }

    // ── Blood pressure ───────────────────────────────────────────────────

    #[test]
    fn test_bp_normal_region() {
        for s in [90, 100, 110, 119] {
            for d in [50, 60, 70, 79] {
                assert_eq!(bp(s, d), BloodPressureCategory::Normal, "{}/{}", s, d);
            }
        }
    }

    #[test]
    fn test_bp_elevated() {
        assert_eq!(bp(120, 79), BloodPressureCategory::Elevated);
        assert_eq!(bp(129, 70), BloodPressureCategory::Elevated);
    }

    #[test]
    fn test_bp_systolic_140_is_stage2_regardless_of_diastolic() {
        for d in [40, 79, 80, 89, 90, 120] {
            assert_eq!(bp(140, d), BloodPressureCategory::Stage2High, "140/{}", d);
        }
        assert_eq!(bp(185, 60), BloodPressureCategory::Stage2High);
    }

    #[test]
    fn test_bp_130_over_79_is_stage1() {
        assert_eq!(bp(130, 79), BloodPressureCategory::Stage1High);
    }

    #[test]
    fn test_bp_119_over_79_is_normal() {
        assert_eq!(bp(119, 79), BloodPressureCategory::Normal);
    }

    #[test]
    fn test_bp_119_over_80_skips_elevated() {
        assert_eq!(bp(119, 80), BloodPressureCategory::Stage1High);
    }

    #[test]
    fn test_bp_135_over_75_is_stage1() {
        assert_eq!(bp(135, 75), BloodPressureCategory::Stage1High);
    }

    #[test]
    fn test_bp_diastolic_90_is_stage2() {
        assert_eq!(bp(110, 90), BloodPressureCategory::Stage2High);
    }

    #[test]
    fn test_bp_missing_or_non_positive_is_unknown() {
        use BloodPressureCategory::Unknown;
        assert_eq!(BloodPressureCategory::classify(None, None), Unknown);
        assert_eq!(BloodPressureCategory::classify(Some(120), None), Unknown);
        assert_eq!(BloodPressureCategory::classify(None, Some(80)), Unknown);
        assert_eq!(BloodPressureCategory::classify(Some(0), Some(80)), Unknown);
        assert_eq!(BloodPressureCategory::classify(Some(120), Some(-5)), Unknown);
    }

    #[test]
    fn test_bp_labels_and_severity() {
        assert_eq!(BloodPressureCategory::Stage1High.label(), "Stage 1 High");
        assert_eq!(BloodPressureCategory::Stage2High.severity(), Severity::Critical);
        assert_eq!(BloodPressureCategory::Elevated.severity(), Severity::Caution);
        assert_eq!(BloodPressureCategory::Unknown.severity().color(), "gray");
    }

    // ── Heart rate ───────────────────────────────────────────────────────

    #[test]
    fn test_hr_bounds() {
        assert_eq!(HeartRateCategory::classify(Some(59)), HeartRateCategory::Low);
        assert_eq!(HeartRateCategory::classify(Some(60)), HeartRateCategory::Normal);
        assert_eq!(HeartRateCategory::classify(Some(100)), HeartRateCategory::Normal);
        assert_eq!(HeartRateCategory::classify(Some(101)), HeartRateCategory::High);
    }

    #[test]
    fn test_hr_missing_or_non_positive_is_unknown() {
        assert_eq!(HeartRateCategory::classify(None), HeartRateCategory::Unknown);
        assert_eq!(HeartRateCategory::classify(Some(0)), HeartRateCategory::Unknown);
        assert_eq!(HeartRateCategory::classify(Some(-3)), HeartRateCategory::Unknown);
    }

    #[test]
    fn test_hr_labels_and_severity() {
        assert_eq!(HeartRateCategory::Low.label(), "Low (Bradycardia)");
        assert_eq!(HeartRateCategory::High.label(), "High (Tachycardia)");
        assert_eq!(HeartRateCategory::High.severity(), Severity::Caution);
        assert_eq!(HeartRateCategory::Normal.severity(), Severity::Benign);
    }

    #[test]
    fn test_caution_colors_differ_by_vital() {
        assert_eq!(BloodPressureCategory::Elevated.color(), "yellow");
        assert_eq!(HeartRateCategory::Low.color(), "orange");
        assert_eq!(HeartRateCategory::High.color(), "orange");
        assert_eq!(HeartRateCategory::Normal.color(), "green");
        assert_eq!(HeartRateCategory::Unknown.color(), "gray");
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_value(BloodPressureCategory::Stage1High).unwrap();
        assert_eq!(json, "stage1_high");
        let json = serde_json::to_value(Severity::Critical).unwrap();
        assert_eq!(json, "critical");
    }
}
