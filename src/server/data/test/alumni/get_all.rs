use super::*;

/// Tests that alumni are listed most recent graduation year first.
///
/// Expected: Ok with descending years, same-year ties by descending ID
#[tokio::test]
async fn orders_by_graduation_year_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Alumni)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AlumniRepository::new(db);
    repo.create(graduate("Old", 2001)).await?;
    let first_recent = repo.create(graduate("Recent A", 2020)).await?;
    let second_recent = repo.create(graduate("Recent B", 2020)).await?;
    repo.create(graduate("Middle", 2010)).await?;

    let alumni = repo.get_all().await?;
    let years: Vec<i32> = alumni.iter().map(|a| a.graduation_year).collect();

    assert_eq!(years, vec![2020, 2020, 2010, 2001]);
    assert_eq!(alumni[0].id, second_recent.id);
    assert_eq!(alumni[1].id, first_recent.id);

    Ok(())
}
