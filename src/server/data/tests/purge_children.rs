use crate::server::{
    data::{
        author::AuthorRepository, description::DescriptionRepository,
        ggm::GgmPropertiesRepository, resource::ResourceRepository, title::TitleRepository,
    },
    model::{
        author::{AuthorEntity, InstitutionKey},
        ggm::GgmForm,
        resource::TitleEntry,
    },
};
use entity::description::DescriptionType;

use super::*;

/// Expect titles, descriptions and associations of one resource removed while shared entities,
/// other resources and the GGM link stay
#[tokio::test]
async fn removes_only_owned_rows() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let target = test.resource().insert_mock_resource(Some("10.1/a")).await?;
    let other = test.resource().insert_mock_resource(Some("10.1/b")).await?;

    let titles = [TitleEntry {
        text: "Title".to_string(),
        title_type_id: 1,
    }];
    let title_repo = TitleRepository::new(&test.db);
    title_repo.create_many(target.id, &titles).await?;
    title_repo.create_many(other.id, &titles).await?;
    DescriptionRepository::new(&test.db)
        .create(target.id, DescriptionType::Abstract, "Abstract")
        .await?;

    let author_repo = AuthorRepository::new(&test.db);
    let author_id = author_repo
        .resolve(&AuthorEntity::Institution(InstitutionKey::new("GFZ")))
        .await?;
    author_repo.link_to_resource(target.id, author_id).await?;
    author_repo.link_to_resource(other.id, author_id).await?;

    let ggm_form = FormData::from_json(form::ggm("EIGEN-6C4")).unwrap();
    let ggm = GgmForm::validate(&ggm_form).unwrap();
    GgmPropertiesRepository::new(&test.db)
        .create(target.id, &ggm.properties)
        .await?;

    let purged = ResourceRepository::new(&test.db)
        .purge_children(target.id)
        .await?;

    assert_eq!(purged, 3);
    assert_eq!(title_repo.get_by_resource_id(target.id).await?.len(), 0);
    assert_eq!(title_repo.get_by_resource_id(other.id).await?.len(), 1);
    assert!(author_repo.get_ids_by_resource_id(target.id).await?.is_empty());
    assert_eq!(author_repo.get_ids_by_resource_id(other.id).await?, vec![author_id]);
    assert_eq!(test.count(entity::prelude::Author).await?, 1);
    assert_eq!(test.count(entity::prelude::ResourceHasGgmProperties).await?, 1);

    Ok(())
}
