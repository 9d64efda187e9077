use super::*;

/// Expect a new resource with its titles
#[tokio::test]
async fn creates_resource_with_titles() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let result = ResourceService::new(&test.db)
        .save(&submission(form::resource(Some("10.5880/GFZ.1.1.2024.001"))))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let resource_id = result.unwrap().unwrap();
    let resource = ResourceRepository::new(&test.db)
        .find_by_id(resource_id)
        .await?
        .unwrap();
    assert_eq!(resource.doi.as_deref(), Some("10.5880/GFZ.1.1.2024.001"));
    assert_eq!(resource.year, 2024);
    assert_eq!(resource.version, Some(1.0));
    let titles = TitleRepository::new(&test.db)
        .get_by_resource_id(resource_id)
        .await?;
    assert_eq!(titles.len(), 2);

    Ok(())
}

/// Expect repeated `(title, type)` pairs to be stored once
#[tokio::test]
async fn deduplicates_titles() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let mut value = form::resource(None);
    value["title"] = json!(["A", "A", "B"]);
    value["titleType"] = json!(["1", "1", "2"]);

    let resource_id = ResourceService::new(&test.db)
        .save(&submission(value))
        .await
        .unwrap()
        .unwrap();

    let titles = TitleRepository::new(&test.db)
        .get_by_resource_id(resource_id)
        .await?;
    assert_eq!(titles.len(), 2);

    Ok(())
}

/// Expect a matching DOI to update the resource in place and replace its children
#[tokio::test]
async fn updates_resource_with_same_doi() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let doi = "10.5880/GFZ.1.1.2024.002";
    let resource_service = ResourceService::new(&test.db);

    let first = resource_service
        .save(&submission(form::resource(Some(doi))))
        .await
        .unwrap()
        .unwrap();
    DescriptionService::new(&test.db)
        .save(first, &submission(form::descriptions()))
        .await
        .unwrap();

    let mut value = form::resource(Some(doi));
    value["year"] = json!("2025");
    value["title"] = json!(["Revised title"]);
    value["titleType"] = json!(["1"]);
    let second = resource_service
        .save(&submission(value))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(test.count(entity::prelude::Resource).await?, 1);
    let resource = ResourceRepository::new(&test.db)
        .find_by_id(second)
        .await?
        .unwrap();
    assert_eq!(resource.year, 2025);
    let titles = TitleRepository::new(&test.db)
        .get_by_resource_id(second)
        .await?;
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].text, "Revised title");
    assert!(DescriptionRepository::new(&test.db)
        .get_by_resource_id(second)
        .await?
        .is_empty());

    Ok(())
}

/// Expect two submissions without DOI to create two resources
#[tokio::test]
async fn creates_new_resource_without_doi() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource_service = ResourceService::new(&test.db);

    let first = resource_service
        .save(&submission(form::resource(None)))
        .await
        .unwrap();
    let second = resource_service
        .save(&submission(form::resource(None)))
        .await
        .unwrap();

    assert_ne!(first, second);
    assert_eq!(test.count(entity::prelude::Resource).await?, 2);

    Ok(())
}

/// Expect Ok(None) and nothing written when a required field is missing
#[tokio::test]
async fn returns_none_for_invalid_submission() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let mut value = form::resource(None);
    value["rights"] = json!("");

    let result = ResourceService::new(&test.db).save(&submission(value)).await;

    assert_eq!(result.unwrap(), None);
    assert_eq!(test.count(entity::prelude::Resource).await?, 0);

    Ok(())
}

/// Expect an Err and no resource kept when the insert violates a foreign key
#[tokio::test]
async fn rolls_back_on_database_error() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let mut value = form::resource(None);
    value["resourcetype"] = json!("999");

    let result = ResourceService::new(&test.db).save(&submission(value)).await;

    assert!(matches!(result, Err(Error::DbErr(_))));
    assert_eq!(test.count(entity::prelude::Resource).await?, 0);

    Ok(())
}
