//! Persistence and normalization engine for geoscientific dataset metadata submissions.

pub mod server;
