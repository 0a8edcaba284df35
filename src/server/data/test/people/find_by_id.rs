use super::*;

/// Tests finding an existing character by id.
///
/// Expected: Ok(Some(Person)) with matching data
#[tokio::test]
async fn finds_existing_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::people::PeopleFactory::new(db)
        .name("Leia Organa")
        .birth_year("19BBY")
        .height(150)
        .build()
        .await?;

    let person = PeopleRepository::new(db)
        .find_by_id(created.id)
        .await?
        .expect("person exists");

    assert_eq!(person.name, "Leia Organa");
    assert_eq!(person.birth_year.as_deref(), Some("19BBY"));
    assert_eq!(person.height, Some(150));
    assert!(person.gender.is_none());

    Ok(())
}

/// Tests querying for a non-existent character.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_person() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PeopleRepository::new(db).find_by_id(999).await?.is_none());

    Ok(())
}
