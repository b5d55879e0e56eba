//! The fixed sample catalog inserted on first launch.
//!
//! Ids are assigned here rather than by the database so the foreign keys
//! between the tables can be wired up statically.

pub struct SeedDirector {
    pub id: i64,
    pub name: &'static str,
    pub birth_date: &'static str,
}

pub struct SeedMovie {
    pub id: i64,
    pub title: &'static str,
    pub release_year: i32,
    pub director_id: i64,
}

pub struct SeedActor {
    pub id: i64,
    pub name: &'static str,
    pub birth_year: i32,
}

pub struct SeedReview {
    pub movie_id: i64,
    pub rating: i32,
    pub comment: &'static str,
}

pub const DIRECTORS: &[SeedDirector] = &[
    SeedDirector { id: 1, name: "Christopher Nolan", birth_date: "1970-07-30" },
    SeedDirector { id: 2, name: "Steven Spielberg", birth_date: "1946-12-18" },
    SeedDirector { id: 3, name: "Quentin Tarantino", birth_date: "1963-03-27" },
];

pub const MOVIES: &[SeedMovie] = &[
    SeedMovie { id: 1, title: "Inception", release_year: 2010, director_id: 1 },
    SeedMovie { id: 2, title: "Interstellar", release_year: 2014, director_id: 1 },
    SeedMovie { id: 3, title: "The Dark Knight", release_year: 2008, director_id: 1 },
    SeedMovie { id: 4, title: "Jurassic Park", release_year: 1993, director_id: 2 },
    SeedMovie { id: 5, title: "Schindler's List", release_year: 1993, director_id: 2 },
    SeedMovie { id: 6, title: "Pulp Fiction", release_year: 1994, director_id: 3 },
    SeedMovie { id: 7, title: "Django Unchained", release_year: 2012, director_id: 3 },
    SeedMovie { id: 8, title: "Kill Bill", release_year: 2003, director_id: 3 },
];

pub const ACTORS: &[SeedActor] = &[
    SeedActor { id: 1, name: "Leonardo DiCaprio", birth_year: 1974 },
    SeedActor { id: 2, name: "Marion Cotillard", birth_year: 1975 },
    SeedActor { id: 3, name: "Matthew McConaughey", birth_year: 1969 },
    SeedActor { id: 4, name: "Anne Hathaway", birth_year: 1982 },
    SeedActor { id: 5, name: "Christian Bale", birth_year: 1974 },
    SeedActor { id: 6, name: "Heath Ledger", birth_year: 1979 },
    SeedActor { id: 7, name: "Sam Neill", birth_year: 1947 },
    SeedActor { id: 8, name: "Laura Dern", birth_year: 1967 },
    SeedActor { id: 9, name: "John Travolta", birth_year: 1954 },
    SeedActor { id: 10, name: "Uma Thurman", birth_year: 1970 },
    SeedActor { id: 11, name: "Jamie Foxx", birth_year: 1967 },
];

/// (movie_id, actor_id) pairs. Schindler's List ships without cast rows.
pub const CAST: &[(i64, i64)] = &[
    (1, 1),
    (1, 2),
    (2, 3),
    (2, 4),
    (3, 5),
    (3, 6),
    (4, 7),
    (4, 8),
    (6, 9),
    (6, 10),
    (7, 1),
    (7, 11),
    (8, 10),
];

pub const REVIEWS: &[SeedReview] = &[
    SeedReview { movie_id: 1, rating: 5, comment: "Mind-bending masterpiece!" },
    SeedReview { movie_id: 1, rating: 5, comment: "Incredible visuals and story" },
    SeedReview { movie_id: 1, rating: 4, comment: "Complex but worth it" },
    SeedReview { movie_id: 2, rating: 5, comment: "Epic space adventure" },
    SeedReview { movie_id: 2, rating: 5, comment: "Emotionally powerful" },
    SeedReview { movie_id: 3, rating: 5, comment: "Best superhero movie ever!" },
    SeedReview { movie_id: 3, rating: 5, comment: "Heath Ledger is phenomenal" },
    SeedReview { movie_id: 4, rating: 5, comment: "Timeless classic" },
    SeedReview { movie_id: 4, rating: 4, comment: "The dinosaurs are amazing!" },
    SeedReview { movie_id: 5, rating: 5, comment: "A profound masterpiece" },
    SeedReview { movie_id: 6, rating: 5, comment: "Tarantino at his best" },
    SeedReview { movie_id: 6, rating: 5, comment: "Unforgettable dialogue" },
    SeedReview { movie_id: 7, rating: 4, comment: "Great performances" },
    SeedReview { movie_id: 7, rating: 5, comment: "Powerful and entertaining" },
    SeedReview { movie_id: 8, rating: 5, comment: "Stylish and action-packed" },
];
