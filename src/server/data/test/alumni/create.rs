use super::*;

/// Tests registering a graduate with optional details.
///
/// Expected: Ok with optional fields stored
#[tokio::test]
async fn creates_alumni_with_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Alumni)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut param = graduate("Sita Karki", 2015);
    param.current_organization = Some("Kathmandu University".to_string());
    param.designation = Some("Lecturer".to_string());

    let repo = AlumniRepository::new(db);
    let alumni = repo.create(param).await?;

    assert!(alumni.id > 0);
    assert_eq!(alumni.graduation_year, 2015);
    assert_eq!(
        alumni.current_organization.as_deref(),
        Some("Kathmandu University")
    );
    assert_eq!(alumni.designation.as_deref(), Some("Lecturer"));
    assert!(alumni.email.is_none());
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
