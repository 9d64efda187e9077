use crate::server::{
    data::{
        contributor::ContributorPersonRepository,
        role::{RoleOwner, RoleRepository},
    },
    model::author::PersonKey,
};

use super::*;

/// Expect the second call to replace the first role set instead of merging with it
#[tokio::test]
async fn replaces_previous_links() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;
    let person_id = ContributorPersonRepository::new(&test.db)
        .resolve(&PersonKey::new("Noether", "Emmy", ""))
        .await?;

    let role_repo = RoleRepository::new(&test.db);
    role_repo
        .replace_links(RoleOwner::ContributorPerson, person_id, &[1, 2])
        .await?;
    role_repo
        .replace_links(RoleOwner::ContributorPerson, person_id, &[3])
        .await?;

    let role_ids = role_repo
        .get_role_ids(RoleOwner::ContributorPerson, person_id)
        .await?;
    assert_eq!(role_ids, vec![3]);

    Ok(())
}

/// Expect institution roles to exclude person-only roles
#[tokio::test]
async fn filters_roles_by_scope() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let roles = RoleRepository::new(&test.db)
        .get_by_owner(RoleOwner::ContributorInstitution)
        .await?;

    assert!(roles.iter().any(|role| role.name == "Data Curator"));
    assert!(roles.iter().any(|role| role.name == "Sponsor"));
    assert!(!roles.iter().any(|role| role.name == "Researcher"));

    Ok(())
}
