//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for one table family each and are generic over
//! [`sea_orm::ConnectionTrait`], so the same repository runs against a plain connection or an
//! open transaction. Find-or-create for natural-key entities goes through
//! [`resolver::EntityResolver`].

pub mod affiliation;
pub mod author;
pub mod contributor;
pub mod coverage;
pub mod description;
pub mod funding_reference;
pub mod ggm;
pub mod resolver;
pub mod resource;
pub mod role;
pub mod title;
pub mod vocabulary;

#[cfg(test)]
mod tests;
