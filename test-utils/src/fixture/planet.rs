//! Planet fixtures for creating in-memory test data.

use entity::planets;

/// Default test planet name.
pub const DEFAULT_NAME: &str = "Tatooine";

/// Creates a fully populated planet entity model.
///
/// # Default Values
/// - id: `1`
/// - name: `"Tatooine"`
/// - climate: `"arid"`
/// - terrain: `"desert"`
/// - population: `200000`
/// - diameter: `10465`
pub fn entity() -> planets::Model {
    planets::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some(200_000),
        diameter: Some(10_465),
    }
}
