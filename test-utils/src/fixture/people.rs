//! Character fixtures for creating in-memory test data.

use entity::people;

/// Default test character name.
pub const DEFAULT_NAME: &str = "Luke Skywalker";

/// Creates a fully populated character entity model.
///
/// # Default Values
/// - id: `1`
/// - name: `"Luke Skywalker"`
/// - gender: `"male"`
/// - birth_year: `"19BBY"`
/// - eye_color: `"blue"`
/// - hair_color: `"blond"`
/// - height: `172`
pub fn entity() -> people::Model {
    people::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        gender: Some("male".to_string()),
        birth_year: Some("19BBY".to_string()),
        eye_color: Some("blue".to_string()),
        hair_color: Some("blond".to_string()),
        height: Some(172),
    }
}
