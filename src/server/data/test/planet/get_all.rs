use super::*;

/// Tests listing planets from an empty catalog.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_list_when_no_planets() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planets)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let planets = PlanetRepository::new(db).get_all().await?;

    assert!(planets.is_empty());

    Ok(())
}

/// Tests listing planets returns every row ordered by id.
///
/// Expected: Ok(Vec) with both planets in insertion order
#[tokio::test]
async fn returns_all_planets_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Planets)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hoth = factory::planet::PlanetFactory::new(db)
        .id(2)
        .name("Hoth")
        .climate("frozen")
        .build()
        .await?;
    let tatooine = factory::planet::PlanetFactory::new(db)
        .id(1)
        .name("Tatooine")
        .build()
        .await?;

    let planets = PlanetRepository::new(db).get_all().await?;

    let ids: Vec<i32> = planets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![tatooine.id, hoth.id]);
    assert_eq!(planets[1].climate.as_deref(), Some("frozen"));

    Ok(())
}
