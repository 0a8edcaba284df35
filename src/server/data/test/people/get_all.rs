use super::*;

/// Tests listing characters returns every row ordered by id.
///
/// Expected: Ok(Vec) with all characters
#[tokio::test]
async fn returns_all_people() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let luke = factory::people::PeopleFactory::new(db)
        .name("Luke Skywalker")
        .build()
        .await?;
    let leia = factory::people::PeopleFactory::new(db)
        .name("Leia Organa")
        .build()
        .await?;

    let people = PeopleRepository::new(db).get_all().await?;

    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec![luke.name.as_str(), leia.name.as_str()]);

    Ok(())
}

/// Tests listing characters from an empty catalog.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_when_no_people() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::People)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PeopleRepository::new(db).get_all().await?.is_empty());

    Ok(())
}
