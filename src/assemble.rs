use std::collections::HashMap;

use crate::{
    entities::{actor, director, movie, review},
    models::{MovieDetailRow, MovieWithDetails},
};

/// Folds flat join rows into one `MovieWithDetails` per distinct movie id.
///
/// Rows may arrive in any order; grouping keys on the movie id alone and the
/// output keeps the first-seen order of movie ids. The join emits the
/// cartesian product of a movie's cast and reviews, so actor and review
/// columns repeat across rows; both lists are deduped by id, keeping the
/// first occurrence. A movie whose outer joins all missed collapses to a
/// group with empty lists. An empty input yields an empty output, never a
/// placeholder.
pub fn movie_details(rows: Vec<MovieDetailRow>) -> Vec<MovieWithDetails> {
    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut out: Vec<MovieWithDetails> = Vec::new();

    for row in rows {
        let slot = match slots.get(&row.movie_id) {
            Some(&slot) => slot,
            None => {
                // All rows of a group carry identical movie and director
                // columns, so the first row seen is enough to build both.
                slots.insert(row.movie_id, out.len());
                out.push(MovieWithDetails {
                    movie: movie::Model {
                        id: row.movie_id,
                        title: row.title.clone(),
                        release_year: row.release_year,
                        director_id: row.director_id,
                    },
                    director: director::Model {
                        id: row.director_id,
                        name: row.director_name.clone(),
                        birth_date: row.director_birth_date,
                    },
                    actors: Vec::new(),
                    reviews: Vec::new(),
                });
                out.len() - 1
            },
        };

        let details = &mut out[slot];

        if let (Some(id), Some(name), Some(birth_year)) =
            (row.actor_id, row.actor_name, row.actor_birth_year)
        {
            if !details.actors.iter().any(|a| a.id == id) {
                details.actors.push(actor::Model { id, name, birth_year });
            }
        }

        if let (Some(id), Some(rating), Some(comment)) =
            (row.review_id, row.review_rating, row.review_comment)
        {
            if !details.reviews.iter().any(|r| r.id == id) {
                details.reviews.push(review::Model {
                    id,
                    movie_id: row.movie_id,
                    rating,
                    comment,
                });
            }
        }
    }

    out
}
