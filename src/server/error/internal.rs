use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A favorites row references both a planet and a person, or neither.
    ///
    /// The application never writes such rows, so one can only appear through direct
    /// manipulation of the database. Results in a 500 Internal Server Error with a
    /// generic message returned to client.
    #[error(
        "Favorite {id} must reference exactly one target (planet_id: {planet_id:?}, people_id: {people_id:?})"
    )]
    MalformedFavorite {
        /// Primary key of the offending row
        id: i32,
        /// Stored planet reference
        planet_id: Option<i32>,
        /// Stored character reference
        people_id: Option<i32>,
    },
}
