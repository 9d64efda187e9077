use super::*;

/// Expect Ok(true) with every column of the coverage stored
#[tokio::test]
async fn saves_coverage() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;

    let result = CoverageService::new(&test.db)
        .save(resource.id, &submission(form::coverage()))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap());
    let coverages = CoverageRepository::new(&test.db)
        .get_by_resource_id(resource.id)
        .await?;
    assert_eq!(coverages.len(), 1);
    let coverage = &coverages[0];
    assert_eq!(coverage.latitude_max, Some(52.42));
    assert_eq!(coverage.description, "Potsdam Telegrafenberg");
    assert_eq!(coverage.date_start, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert_eq!(coverage.time_start, NaiveTime::from_hms_opt(8, 0, 0));
    assert_eq!(coverage.time_end, NaiveTime::from_hms_opt(17, 30, 0));
    assert_eq!(coverage.timezone, "+01:00");

    Ok(())
}

/// Expect an identical coverage saved twice to produce two rows
#[tokio::test]
async fn does_not_deduplicate() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(form::coverage());

    let coverage_service = CoverageService::new(&test.db);
    assert!(coverage_service.save(resource.id, &form).await.unwrap());
    assert!(coverage_service.save(resource.id, &form).await.unwrap());

    assert_eq!(
        test.count(entity::prelude::SpatialTemporalCoverage).await?,
        2
    );

    Ok(())
}

/// Expect a point coverage to store null maximum coordinates and times
#[tokio::test]
async fn stores_null_optionals() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(json!({
        "tscLatitudeMin": ["-12.5"],
        "tscLatitudeMax": [""],
        "tscLongitudeMin": ["130.8"],
        "tscLongitudeMax": [""],
        "tscDescription": ["Darwin"],
        "tscDateStart": ["2021-05-01"],
        "tscDateEnd": ["2021-05-01"],
        "tscTimezone": ["+09:30"],
    }));

    let result = CoverageService::new(&test.db).save(resource.id, &form).await;

    assert!(result.unwrap());
    let coverages = CoverageRepository::new(&test.db)
        .get_by_resource_id(resource.id)
        .await?;
    assert_eq!(coverages[0].latitude_max, None);
    assert_eq!(coverages[0].longitude_max, None);
    assert_eq!(coverages[0].time_start, None);
    assert_eq!(coverages[0].time_end, None);

    Ok(())
}

/// Expect Ok(false) and nothing written when a required array is missing
#[tokio::test]
async fn rejects_missing_arrays() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let mut value = form::coverage();
    if let Some(fields) = value.as_object_mut() {
        fields.remove("tscTimezone");
    }

    let result = CoverageService::new(&test.db)
        .save(resource.id, &submission(value))
        .await;

    assert!(!result.unwrap());
    assert_eq!(
        test.count(entity::prelude::SpatialTemporalCoverage).await?,
        0
    );

    Ok(())
}

/// Expect an invalid row to fail the group while valid rows are still saved
#[tokio::test]
async fn keeps_valid_rows_when_one_fails() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(json!({
        "tscLatitudeMin": ["52.38", "95.0"],
        "tscLongitudeMin": ["13.06", "13.06"],
        "tscDescription": ["Potsdam", "Beyond the pole"],
        "tscDateStart": ["2020-01-01", "2020-01-01"],
        "tscDateEnd": ["2020-12-31", "2020-12-31"],
        "tscTimezone": ["+01:00", "+01:00"],
    }));

    let result = CoverageService::new(&test.db).save(resource.id, &form).await;

    assert!(!result.unwrap());
    assert_eq!(
        test.count(entity::prelude::SpatialTemporalCoverage).await?,
        1
    );

    Ok(())
}
