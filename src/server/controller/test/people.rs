use super::*;

/// Tests listing characters.
///
/// Expected: 200 with every character in id order
#[tokio::test]
async fn lists_people() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::people::PeopleFactory::new(db)
        .name("Luke Skywalker")
        .build()
        .await?;
    factory::people::PeopleFactory::new(db)
        .name("Darth Vader")
        .build()
        .await?;

    let (status, body) = send(db, Method::GET, "/people").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Luke Skywalker");
    assert_eq!(body[1]["name"], "Darth Vader");

    Ok(())
}

/// Tests fetching a seeded character.
///
/// Expected: 200 with the serialized character
#[tokio::test]
async fn gets_person_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let person = factory::people::PeopleFactory::new(db)
        .name("Leia Organa")
        .hair_color("brown")
        .build()
        .await?;

    let (status, body) = send(db, Method::GET, &format!("/people/{}", person.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Leia Organa");
    assert_eq!(body["hair_color"], "brown");

    Ok(())
}

/// Tests fetching a character that does not exist.
///
/// Expected: 404 with {"message": "Character not found"}
#[tokio::test]
async fn returns_404_for_unknown_person() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, Method::GET, "/people/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Character not found"}));

    Ok(())
}

/// Tests fetching a character whose id does not fit the key column.
///
/// Expected: 404 with {"message": "Character not found"}
#[tokio::test]
async fn returns_404_for_out_of_range_person_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = send(db, Method::GET, "/people/99999999999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "Character not found"}));

    Ok(())
}
