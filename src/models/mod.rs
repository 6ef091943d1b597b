pub mod entry;
pub mod measurement;
pub mod vitals;

pub use entry::{Entry, NewEntry};
pub use measurement::{MeasurementField, TimeRange};
pub use vitals::{BloodPressureCategory, HeartRateCategory, Severity};
