pub mod cancel;
pub mod parallel;
pub mod partition;
pub mod sequential;
