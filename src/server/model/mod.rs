//! Submission models.
//!
//! This module contains the decoded form submission and the typed rows each form group is
//! parsed into. Parsing happens once at the boundary so repositories and services only see
//! trimmed, typed values.

pub mod affiliation;
pub mod author;
pub mod contributor;
pub mod coverage;
pub mod description;
pub mod form;
pub mod funding_reference;
pub mod ggm;
pub mod report;
pub mod resource;
pub mod role;
