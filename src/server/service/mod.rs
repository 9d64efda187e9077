//! Service layer.
//!
//! Services coordinate repositories into the submission savers: the resource orchestrator,
//! one saver per form group, the role and affiliation linkers and the full submission
//! pipeline. Savers are generic over the connection type so they run both on a plain
//! connection and inside the pipeline's transaction.

pub mod affiliation;
pub mod author;
pub mod contributor;
pub mod coverage;
pub mod dependency;
pub mod description;
pub mod funding_reference;
pub mod ggm;
pub mod resource;
pub mod role;
pub mod submission;
