use serde::Deserialize;

// No id field: create assigns one and update/delete take it from the path,
// so an id in the body is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct MovieRequest {
    pub title: String,
    pub year: i32,
    pub watched: i32,
}
