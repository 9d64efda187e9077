//! Test fixture modules.
//!
//! - `form` - JSON submission documents for every form group
//! - `resource` - Resource rows inserted straight into the database

pub mod form;
pub mod resource;
