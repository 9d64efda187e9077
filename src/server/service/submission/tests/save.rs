use super::*;

/// Expect every group saved and committed for a complete submission
#[tokio::test]
async fn saves_complete_submission() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let form = submission(form::complete_submission("10.5880/GFZ.1.2.2024.001"));

    let result = SubmissionService::new(&test.db, true).save(&form).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let report = result.unwrap();
    assert!(report.is_complete(), "Report: {:?}", report);
    assert_eq!(report.ggm_properties, Some(true));
    assert!(!report.rolled_back);
    assert_eq!(test.count(entity::prelude::Resource).await?, 1);
    assert_eq!(test.count(entity::prelude::Title).await?, 2);
    assert_eq!(test.count(entity::prelude::Description).await?, 2);
    assert_eq!(test.count(entity::prelude::ResourceHasAuthor).await?, 2);
    assert_eq!(
        test.count(entity::prelude::ResourceHasContributorPerson)
            .await?,
        1
    );
    assert_eq!(
        test.count(entity::prelude::ResourceHasContributorInstitution)
            .await?,
        1
    );
    assert_eq!(
        test.count(entity::prelude::ResourceHasFundingReference)
            .await?,
        1
    );
    assert_eq!(
        test.count(entity::prelude::ResourceHasSpatialTemporalCoverage)
            .await?,
        1
    );
    assert_eq!(
        test.count(entity::prelude::ResourceHasGgmProperties).await?,
        1
    );

    Ok(())
}

/// Expect absent optional groups to count as saved and GGM to be reported as not submitted
#[tokio::test]
async fn treats_absent_groups_as_saved() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let form = submission(form::merge(&[
        form::resource(None),
        form::descriptions(),
        form::authors(),
    ]));

    let report = SubmissionService::new(&test.db, true)
        .save(&form)
        .await
        .unwrap();

    assert!(report.is_complete(), "Report: {:?}", report);
    assert!(report.spatial_temporal_coverage);
    assert_eq!(report.ggm_properties, None);

    Ok(())
}

/// Expect one failing group to roll back the whole submission in atomic mode
#[tokio::test]
async fn rolls_back_everything_in_atomic_mode() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let report = SubmissionService::new(&test.db, true)
        .save(&submission_with_bad_coverage("10.5880/GFZ.1.2.2024.002"))
        .await
        .unwrap();

    assert!(!report.is_complete());
    assert!(!report.spatial_temporal_coverage);
    assert!(report.authors);
    assert!(report.rolled_back);
    assert_eq!(test.count(entity::prelude::Resource).await?, 0);
    assert_eq!(test.count(entity::prelude::Author).await?, 0);
    assert_eq!(
        test.count(entity::prelude::SpatialTemporalCoverage).await?,
        0
    );

    Ok(())
}

/// Expect successful groups to stay committed when another group fails in non-atomic mode
#[tokio::test]
async fn keeps_saved_groups_in_non_atomic_mode() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let report = SubmissionService::new(&test.db, false)
        .save(&submission_with_bad_coverage("10.5880/GFZ.1.2.2024.003"))
        .await
        .unwrap();

    assert!(!report.is_complete());
    assert!(!report.spatial_temporal_coverage);
    assert!(!report.rolled_back);
    assert!(report.descriptions && report.authors && report.funding_references);
    assert_eq!(test.count(entity::prelude::Resource).await?, 1);
    assert_eq!(
        test.count(entity::prelude::SpatialTemporalCoverage).await?,
        1
    );

    Ok(())
}

/// Expect no group to run when the resource fails validation
#[tokio::test]
async fn skips_groups_without_resource() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let mut value = form::complete_submission("10.5880/GFZ.1.2.2024.004");
    value["year"] = json!("");

    let report = SubmissionService::new(&test.db, true)
        .save(&submission(value))
        .await
        .unwrap();

    assert_eq!(report, SubmissionReport::default());
    assert_eq!(test.count(entity::prelude::Author).await?, 0);

    Ok(())
}

/// Expect resubmitting the same DOI to update the resource without duplicating shared entities
#[tokio::test]
async fn resubmission_replaces_children() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let form = submission(form::complete_submission("10.5880/GFZ.1.2.2024.005"));

    let submission_service = SubmissionService::new(&test.db, true);
    let first = submission_service.save(&form).await.unwrap();
    let second = submission_service.save(&form).await.unwrap();

    assert!(second.is_complete(), "Report: {:?}", second);
    assert_eq!(first.resource_id, second.resource_id);
    assert_eq!(test.count(entity::prelude::Resource).await?, 1);
    assert_eq!(test.count(entity::prelude::Title).await?, 2);
    assert_eq!(test.count(entity::prelude::Description).await?, 2);
    assert_eq!(test.count(entity::prelude::Author).await?, 2);
    assert_eq!(test.count(entity::prelude::FundingReference).await?, 1);
    assert_eq!(test.count(entity::prelude::GgmProperties).await?, 1);
    assert_eq!(
        test.count(entity::prelude::ResourceHasSpatialTemporalCoverage)
            .await?,
        1
    );

    Ok(())
}

/// Expect a resubmission without authors to leave no author links by default
#[tokio::test]
async fn resubmission_without_authors_clears_author_links() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let doi = "10.5880/GFZ.1.2.2024.006";

    let submission_service = SubmissionService::new(&test.db, false);
    submission_service
        .save(&submission(form::complete_submission(doi)))
        .await
        .unwrap();
    let report = submission_service
        .save(&submission(form::merge(&[
            form::resource(Some(doi)),
            form::descriptions(),
        ])))
        .await
        .unwrap();

    assert!(!report.authors);
    assert!(!report.rolled_back);
    assert_eq!(test.count(entity::prelude::Resource).await?, 1);
    assert_eq!(test.count(entity::prelude::ResourceHasAuthor).await?, 0);

    Ok(())
}

/// Expect a failed resubmission in atomic mode to keep the previous author links
#[tokio::test]
async fn atomic_resubmission_without_authors_keeps_previous_links() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let doi = "10.5880/GFZ.1.2.2024.007";

    let submission_service = SubmissionService::new(&test.db, true);
    submission_service
        .save(&submission(form::complete_submission(doi)))
        .await
        .unwrap();
    let report = submission_service
        .save(&submission(form::merge(&[
            form::resource(Some(doi)),
            form::descriptions(),
        ])))
        .await
        .unwrap();

    assert!(!report.authors);
    assert!(report.rolled_back);
    assert_eq!(test.count(entity::prelude::ResourceHasAuthor).await?, 2);
    assert_eq!(test.count(entity::prelude::Title).await?, 2);

    Ok(())
}
