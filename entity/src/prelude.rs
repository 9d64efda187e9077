//! `SeaORM` entity prelude

pub use super::affiliation::Entity as Affiliation;
pub use super::author::Entity as Author;
pub use super::author_has_affiliation::Entity as AuthorHasAffiliation;
pub use super::author_institution::Entity as AuthorInstitution;
pub use super::author_person::Entity as AuthorPerson;
pub use super::contributor_institution::Entity as ContributorInstitution;
pub use super::contributor_institution_has_affiliation::Entity as ContributorInstitutionHasAffiliation;
pub use super::contributor_institution_has_role::Entity as ContributorInstitutionHasRole;
pub use super::contributor_person::Entity as ContributorPerson;
pub use super::contributor_person_has_affiliation::Entity as ContributorPersonHasAffiliation;
pub use super::contributor_person_has_role::Entity as ContributorPersonHasRole;
pub use super::description::Entity as Description;
pub use super::file_format::Entity as FileFormat;
pub use super::funding_reference::Entity as FundingReference;
pub use super::ggm_properties::Entity as GgmProperties;
pub use super::language::Entity as Language;
pub use super::mathematical_representation::Entity as MathematicalRepresentation;
pub use super::model_type::Entity as ModelType;
pub use super::resource::Entity as Resource;
pub use super::resource_has_author::Entity as ResourceHasAuthor;
pub use super::resource_has_contact_person::Entity as ResourceHasContactPerson;
pub use super::resource_has_contributor_institution::Entity as ResourceHasContributorInstitution;
pub use super::resource_has_contributor_person::Entity as ResourceHasContributorPerson;
pub use super::resource_has_free_keywords::Entity as ResourceHasFreeKeywords;
pub use super::resource_has_funding_reference::Entity as ResourceHasFundingReference;
pub use super::resource_has_ggm_properties::Entity as ResourceHasGgmProperties;
pub use super::resource_has_originating_laboratory::Entity as ResourceHasOriginatingLaboratory;
pub use super::resource_has_related_work::Entity as ResourceHasRelatedWork;
pub use super::resource_has_spatial_temporal_coverage::Entity as ResourceHasSpatialTemporalCoverage;
pub use super::resource_has_thesaurus_keywords::Entity as ResourceHasThesaurusKeywords;
pub use super::resource_type::Entity as ResourceType;
pub use super::rights::Entity as Rights;
pub use super::role::Entity as Role;
pub use super::spatial_temporal_coverage::Entity as SpatialTemporalCoverage;
pub use super::title::Entity as Title;
pub use super::title_type::Entity as TitleType;
