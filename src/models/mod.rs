pub mod emotion;
pub mod insights;
pub mod records;
