pub mod linalg;
pub mod parallel;
pub mod workspace;
