use super::*;

fn person(affiliation: &str, ror_ids: &str, roles: serde_json::Value) -> ContributorPersonRow {
    ContributorPersonRow {
        familyname: "Noether".to_string(),
        givenname: "Emmy".to_string(),
        orcid: String::new(),
        affiliation: affiliation.to_string(),
        ror_ids: ror_ids.to_string(),
        roles: RoleNames::parse(&roles),
    }
}

/// Expect Ok for a named person with a role and a named affiliation carrying a ROR id
#[test]
fn accepts_complete_person() {
    let row = person("GFZ", "04z8jg394", json!("Data Curator"));

    assert!(check_contributor_person(0, &row).is_ok());
}

/// Expect Dependency error when a person has no role
#[test]
fn rejects_person_without_role() {
    let row = person("", "", json!(""));

    let result = check_contributor_person(3, &row);

    assert!(matches!(
        result,
        Err(ValidationError::Dependency { row: 3, .. })
    ));
}

/// Expect Dependency error when a ROR id arrives without affiliation text
#[test]
fn rejects_ror_id_without_affiliation() {
    let row = person("", "04z8jg394", json!("Researcher"));

    assert!(check_contributor_person(0, &row).is_err());
}

/// Expect Dependency error for an institution without a name
#[test]
fn rejects_unnamed_institution() {
    let row = ContributorInstitutionRow {
        name: String::new(),
        affiliation: String::new(),
        ror_ids: String::new(),
        roles: RoleNames::parse(&json!("Sponsor")),
    };

    assert!(matches!(
        check_contributor_institution(1, &row),
        Err(ValidationError::Dependency {
            group: "contributor institution",
            row: 1,
            ..
        })
    ));
}
