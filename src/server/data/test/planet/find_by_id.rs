use super::*;

/// Tests finding an existing planet by id.
///
/// Expected: Ok(Some(Planet)) with matching data
#[tokio::test]
async fn finds_existing_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planets)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::planet::PlanetFactory::new(db)
        .name("Tatooine")
        .population(200_000)
        .build()
        .await?;

    let planet = PlanetRepository::new(db).find_by_id(created.id).await?;

    assert!(planet.is_some());
    let planet = planet.unwrap();
    assert_eq!(planet.name, "Tatooine");
    assert_eq!(planet.population, Some(200_000));

    Ok(())
}

/// Tests querying for a non-existent planet.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_planet() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planets)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlanetRepository::new(db).find_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}
