pub mod dates;
pub mod emotion;
pub mod insights;
pub mod rounding;

pub use emotion::EmotionClassifier;
pub use insights::InsightsAggregator;
