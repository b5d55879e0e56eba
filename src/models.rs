use sea_orm::{FromQueryResult, prelude::Date};
use serde::Deserialize;

use crate::entities::{actor, director, movie, review};

/// A movie hydrated with its director, cast and reviews. Never stored in this
/// shape; rebuilt from join rows by `assemble::movie_details`.
#[derive(Clone, Debug, PartialEq)]
pub struct MovieWithDetails {
    pub movie: movie::Model,
    pub director: director::Model,
    pub actors: Vec<actor::Model>,
    pub reviews: Vec<review::Model>,
}

/// One flat row of the movie detail join, one per matched
/// movie x actor x review combination. Movie and director columns are always
/// present; actor and review columns are null when the left joins miss.
#[derive(Clone, Debug, FromQueryResult)]
pub struct MovieDetailRow {
    pub movie_id: i64,
    pub title: String,
    pub release_year: i32,
    pub director_id: i64,
    pub director_name: String,
    pub director_birth_date: Date,
    pub actor_id: Option<i64>,
    pub actor_name: Option<String>,
    pub actor_birth_year: Option<i32>,
    pub review_id: Option<i64>,
    pub review_rating: Option<i32>,
    pub review_comment: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReviewForm {
    pub rating: i32,
    pub comment: String,
}
