pub mod draft;
pub mod history;
pub mod series;
pub mod summary;
