//! Server-side core of the metadata submission engine.
//!
//! This module converts decoded form submissions into a normalized relational graph. Submissions
//! are parsed into typed rows in `model`, persisted through the repositories in `data`, and
//! coordinated by the savers and the submission pipeline in `service`.

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
