use super::*;

/// Expect Ok(true) with the institution linked and its role attached
#[tokio::test]
async fn saves_institution_with_role() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;

    let result = ContributorInstitutionService::new(&test.db)
        .save(resource.id, &submission(form::contributors()))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap());
    let institution_ids = ContributorInstitutionRepository::new(&test.db)
        .get_ids_by_resource_id(resource.id)
        .await?;
    assert_eq!(institution_ids.len(), 1);
    assert_eq!(
        role_names(&test, RoleOwner::ContributorInstitution, institution_ids[0]).await?,
        vec!["Data Curator".to_string()]
    );

    Ok(())
}

/// Expect person-only roles to be ignored for institutions
#[tokio::test]
async fn ignores_person_only_roles() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(json!({
        "cbOrganisationName": ["GFZ Data Services"],
        "OrganisationAffiliation": [""],
        "hiddenOrganisationRorId": [""],
        "cbOrganisationRoles": [["Researcher", "Hosting Institution"]],
    }));

    let result = ContributorInstitutionService::new(&test.db)
        .save(resource.id, &form)
        .await;

    assert!(result.unwrap());
    let institution_ids = ContributorInstitutionRepository::new(&test.db)
        .get_ids_by_resource_id(resource.id)
        .await?;
    assert_eq!(
        role_names(&test, RoleOwner::ContributorInstitution, institution_ids[0]).await?,
        vec!["Hosting Institution".to_string()]
    );

    Ok(())
}

/// Expect Ok(false) for an institution whose ROR id has no affiliation name
#[tokio::test]
async fn rejects_ror_id_without_affiliation() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(json!({
        "cbOrganisationName": ["GFZ Data Services"],
        "OrganisationAffiliation": [""],
        "hiddenOrganisationRorId": ["04z8jg394"],
        "cbOrganisationRoles": ["Sponsor"],
    }));

    let result = ContributorInstitutionService::new(&test.db)
        .save(resource.id, &form)
        .await;

    assert!(!result.unwrap());
    assert_eq!(
        test.count(entity::prelude::ContributorInstitution).await?,
        0
    );

    Ok(())
}
