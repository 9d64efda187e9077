use super::*;

/// Expect the funder id reduced to its trailing ten digits and typed as Crossref Funder ID
#[tokio::test]
async fn persists_normalized_funder_id() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;

    let result = FundingReferenceService::new(&test.db)
        .save(resource.id, &submission(form::funding_references()))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap());
    let references = FundingReferenceRepository::new(&test.db)
        .get_by_resource_id(resource.id)
        .await?;
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].funder, "National Science Foundation");
    assert_eq!(references[0].funderid.as_deref(), Some("9100000001"));
    assert_eq!(
        references[0].funderidtyp.as_deref(),
        Some("Crossref Funder ID")
    );
    assert_eq!(references[0].grantnumber.as_deref(), Some("EAR-1234567"));
    assert_eq!(references[0].awarduri, None);

    Ok(())
}

/// Expect one funding reference row shared by two resources
#[tokio::test]
async fn shares_reference_between_resources() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let first = test.resource().insert_mock_resource(Some("10.1/a")).await?;
    let second = test.resource().insert_mock_resource(Some("10.1/b")).await?;
    let form = submission(form::funding_references());

    let funding_service = FundingReferenceService::new(&test.db);
    assert!(funding_service.save(first.id, &form).await.unwrap());
    assert!(funding_service.save(second.id, &form).await.unwrap());

    assert_eq!(test.count(entity::prelude::FundingReference).await?, 1);
    assert_eq!(
        test.count(entity::prelude::ResourceHasFundingReference)
            .await?,
        2
    );

    Ok(())
}

/// Expect a repeated save for the same resource to keep a single link
#[tokio::test]
async fn links_once_per_resource() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(form::funding_references());

    let funding_service = FundingReferenceService::new(&test.db);
    assert!(funding_service.save(resource.id, &form).await.unwrap());
    assert!(funding_service.save(resource.id, &form).await.unwrap());

    assert_eq!(
        test.count(entity::prelude::ResourceHasFundingReference)
            .await?,
        1
    );

    Ok(())
}

/// Expect blank rows skipped and a grant without funder to fail the group
#[tokio::test]
async fn rejects_grant_without_funder() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(json!({
        "funder": ["", "", "DFG"],
        "funderId": ["", "", ""],
        "grantNummer": ["", "EAR-1", ""],
        "grantName": ["", "", ""],
        "awardURI": ["", "", ""],
    }));

    let result = FundingReferenceService::new(&test.db)
        .save(resource.id, &form)
        .await;

    assert!(!result.unwrap());
    let references = FundingReferenceRepository::new(&test.db)
        .get_by_resource_id(resource.id)
        .await?;
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].funder, "DFG");
    assert_eq!(references[0].funderid, None);

    Ok(())
}

/// Expect Ok(false) and no funding reference row kept for a resource that does not exist
#[tokio::test]
async fn rolls_back_for_missing_resource() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let result = FundingReferenceService::new(&test.db)
        .save(99, &submission(form::funding_references()))
        .await;

    assert!(!result.unwrap());
    assert_eq!(test.count(entity::prelude::FundingReference).await?, 0);

    Ok(())
}
