//! `SeaORM` entities for the metadata schema.

pub mod prelude;

pub mod affiliation;
pub mod author;
pub mod author_has_affiliation;
pub mod author_institution;
pub mod author_person;
pub mod contributor_institution;
pub mod contributor_institution_has_affiliation;
pub mod contributor_institution_has_role;
pub mod contributor_person;
pub mod contributor_person_has_affiliation;
pub mod contributor_person_has_role;
pub mod description;
pub mod file_format;
pub mod funding_reference;
pub mod ggm_properties;
pub mod language;
pub mod mathematical_representation;
pub mod model_type;
pub mod resource;
pub mod resource_has_author;
pub mod resource_has_contact_person;
pub mod resource_has_contributor_institution;
pub mod resource_has_contributor_person;
pub mod resource_has_free_keywords;
pub mod resource_has_funding_reference;
pub mod resource_has_ggm_properties;
pub mod resource_has_originating_laboratory;
pub mod resource_has_related_work;
pub mod resource_has_spatial_temporal_coverage;
pub mod resource_has_thesaurus_keywords;
pub mod resource_type;
pub mod rights;
pub mod role;
pub mod spatial_temporal_coverage;
pub mod title;
pub mod title_type;
