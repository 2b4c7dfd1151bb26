pub mod distance_metric;
pub mod error;
pub mod match_result;
pub mod window;
