use serde::Serialize;

/// Outcome of one submission, one flag per form group
///
/// `ggm_properties` is `None` when the submission carried no GGM group. When the resource
/// itself could not be saved no group runs and every flag stays `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    pub resource_id: Option<i32>,
    pub descriptions: bool,
    pub authors: bool,
    pub contributor_persons: bool,
    pub contributor_institutions: bool,
    pub funding_references: bool,
    pub spatial_temporal_coverage: bool,
    pub ggm_properties: Option<bool>,
    /// Set when atomic mode discarded the submission because a group failed
    pub rolled_back: bool,
}

impl SubmissionReport {
    /// True when the resource and every group it carried were saved
    pub fn is_complete(&self) -> bool {
        self.resource_id.is_some()
            && self.descriptions
            && self.authors
            && self.contributor_persons
            && self.contributor_institutions
            && self.funding_references
            && self.spatial_temporal_coverage
            && self.ggm_properties.unwrap_or(true)
    }
}
