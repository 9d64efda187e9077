use super::*;

/// Expect Dependency error when a grant is given without a funder name
#[test]
fn rejects_grant_without_funder() {
    let row = FundingReferenceRow {
        funder: String::new(),
        funder_id: String::new(),
        grant_number: "EAR-1".to_string(),
        grant_name: String::new(),
        award_uri: String::new(),
    };

    assert!(check_funding_reference(0, &row).is_err());
}

/// Expect Ok when only the funder name is given
#[test]
fn accepts_funder_only() {
    let row = FundingReferenceRow {
        funder: "DFG".to_string(),
        funder_id: String::new(),
        grant_number: String::new(),
        grant_name: String::new(),
        award_uri: String::new(),
    };

    assert!(check_funding_reference(0, &row).is_ok());
}
