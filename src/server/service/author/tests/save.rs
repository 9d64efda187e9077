use crate::server::data::affiliation::AffiliationRepository;

use super::*;

/// Expect Ok(true) with one person, one institution and a normalized ROR affiliation
#[tokio::test]
async fn saves_person_and_institution_authors() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;

    let result = AuthorService::new(&test.db)
        .save(resource.id, &submission(form::authors()))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap());
    assert_eq!(test.count(entity::prelude::Author).await?, 2);
    assert_eq!(test.count(entity::prelude::ResourceHasAuthor).await?, 2);

    let author_ids = AuthorRepository::new(&test.db)
        .get_ids_by_resource_id(resource.id)
        .await?;
    let mut affiliations = Vec::new();
    for author_id in author_ids {
        affiliations.extend(
            AffiliationRepository::new(&test.db)
                .get_by_owner(AffiliationOwner::Author(author_id))
                .await?,
        );
    }
    assert_eq!(affiliations.len(), 1);
    assert_eq!(
        affiliations[0].name,
        "GFZ German Research Centre for Geosciences"
    );
    assert_eq!(
        affiliations[0].ror_id.as_deref(),
        Some("https://ror.org/04z8jg394")
    );

    Ok(())
}

/// Expect saving the same authors twice to create no new rows
#[tokio::test]
async fn saving_twice_is_idempotent() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(form::authors());

    let author_service = AuthorService::new(&test.db);
    assert!(author_service.save(resource.id, &form).await.unwrap());
    assert!(author_service.save(resource.id, &form).await.unwrap());

    assert_eq!(test.count(entity::prelude::AuthorPerson).await?, 1);
    assert_eq!(test.count(entity::prelude::AuthorInstitution).await?, 1);
    assert_eq!(test.count(entity::prelude::Author).await?, 2);
    assert_eq!(test.count(entity::prelude::ResourceHasAuthor).await?, 2);
    assert_eq!(test.count(entity::prelude::Affiliation).await?, 1);
    assert_eq!(test.count(entity::prelude::AuthorHasAffiliation).await?, 1);

    Ok(())
}

/// Expect a person shared by two resources to be stored once and linked twice
#[tokio::test]
async fn shares_person_between_resources() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let first = test.resource().insert_mock_resource(Some("10.1/a")).await?;
    let second = test.resource().insert_mock_resource(Some("10.1/b")).await?;
    let form = submission(json!({
        "familynames": ["Curie"],
        "givennames": ["Marie"],
        "orcids": [""],
    }));

    let author_service = AuthorService::new(&test.db);
    assert!(author_service.save(first.id, &form).await.unwrap());
    assert!(author_service.save(second.id, &form).await.unwrap());

    assert_eq!(test.count(entity::prelude::AuthorPerson).await?, 1);
    assert_eq!(test.count(entity::prelude::ResourceHasAuthor).await?, 2);

    Ok(())
}

/// Expect a row carrying a ROR id without affiliation text to be skipped, not failed
#[tokio::test]
async fn skips_ror_id_without_affiliation() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(json!({
        "familynames": ["Curie", "Noether"],
        "givennames": ["Marie", "Emmy"],
        "orcids": ["", ""],
        "personAffiliation": ["", ""],
        "authorPersonRorIds": ["04z8jg394", ""],
    }));

    let result = AuthorService::new(&test.db).save(resource.id, &form).await;

    assert!(result.unwrap());
    assert_eq!(test.count(entity::prelude::AuthorPerson).await?, 1);
    assert_eq!(test.count(entity::prelude::Affiliation).await?, 0);

    Ok(())
}

/// Expect Ok(false) and no rows when no author has a name
#[tokio::test]
async fn rejects_group_without_named_author() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(json!({
        "familynames": [""],
        "givennames": ["Marie"],
        "orcids": ["0000-0002-1825-0097"],
    }));

    let result = AuthorService::new(&test.db).save(resource.id, &form).await;

    assert!(!result.unwrap());
    assert_eq!(test.count(entity::prelude::Author).await?, 0);

    Ok(())
}

/// Expect Ok(false) and the failed row rolled back when linking its affiliation fails
#[tokio::test]
async fn rolls_back_row_when_linker_fails() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let resource = test.resource().insert_mock_resource(None).await?;
    let form = submission(json!({
        "familynames": ["Curie", "Noether"],
        "givennames": ["Marie", "Emmy"],
        "orcids": ["", ""],
        "personAffiliation": ["Sorbonne", ""],
        "authorPersonRorIds": ["", ""],
    }));

    let result = AuthorService::with_linker(&test.db, FailingLinker)
        .save(resource.id, &form)
        .await;

    assert!(!result.unwrap());
    assert_eq!(test.count(entity::prelude::AuthorPerson).await?, 1);
    assert_eq!(test.count(entity::prelude::ResourceHasAuthor).await?, 1);

    Ok(())
}
