use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, NotSet, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, Set, TransactionTrait,
};
use tracing::{debug, info};

use crate::{
    assemble, catalog,
    entities::{actor, cast, director, movie, review},
    error::AppResult,
    models::{MovieDetailRow, MovieWithDetails},
};

/// Data access for the movie aggregate. Built around an injected connection;
/// every method dispatches to sqlx's pool and never blocks the caller.
#[derive(Clone)]
pub struct MovieRepository {
    db: DatabaseConnection,
}

impl MovieRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// All movies, fully hydrated, in the first-seen order of the join output.
    /// An empty store yields an empty list.
    pub async fn get_all_with_details(&self) -> AppResult<Vec<MovieWithDetails>> {
        let rows = self.detail_rows(None).await?;
        Ok(assemble::movie_details(rows))
    }

    /// One movie, fully hydrated. `None` when the id matches nothing; a movie
    /// without cast or reviews still comes back as `Some`.
    pub async fn get_with_details(&self, movie_id: i64) -> AppResult<Option<MovieWithDetails>> {
        let rows = self.detail_rows(Some(movie_id)).await?;
        Ok(assemble::movie_details(rows).into_iter().next())
    }

    pub async fn get_movie(&self, movie_id: i64) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(movie_id).one(&self.db).await?)
    }

    /// The single join feeding the assembler: movies and directors inner
    /// joined, with the cast, actor and review branches left joined in. One
    /// row per matched movie x actor x review combination, in whatever order
    /// the database returns them.
    async fn detail_rows(&self, movie_id: Option<i64>) -> AppResult<Vec<MovieDetailRow>> {
        let mut select = movie::Entity::find()
            .select_only()
            .column_as(movie::Column::Id, "movie_id")
            .column_as(movie::Column::Title, "title")
            .column_as(movie::Column::ReleaseYear, "release_year")
            .column_as(movie::Column::DirectorId, "director_id")
            .column_as(director::Column::Name, "director_name")
            .column_as(director::Column::BirthDate, "director_birth_date")
            .column_as(actor::Column::Id, "actor_id")
            .column_as(actor::Column::Name, "actor_name")
            .column_as(actor::Column::BirthYear, "actor_birth_year")
            .column_as(review::Column::Id, "review_id")
            .column_as(review::Column::Rating, "review_rating")
            .column_as(review::Column::Comment, "review_comment")
            .join(JoinType::InnerJoin, movie::Relation::Director.def())
            .join(JoinType::LeftJoin, movie::Relation::Cast.def())
            .join(JoinType::LeftJoin, cast::Relation::Actor.def())
            .join(JoinType::LeftJoin, movie::Relation::Review.def());

        if let Some(id) = movie_id {
            select = select.filter(movie::Column::Id.eq(id));
        }

        Ok(select.into_model::<MovieDetailRow>().all(&self.db).await?)
    }

    /// Inserts one batch of directors atomically; a failing row rolls back
    /// the whole batch. Same contract for the other insert methods below.
    pub async fn insert_directors(&self, models: Vec<director::ActiveModel>) -> AppResult<()> {
        let txn = self.db.begin().await?;
        director::Entity::insert_many(models).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn insert_movies(&self, models: Vec<movie::ActiveModel>) -> AppResult<()> {
        let txn = self.db.begin().await?;
        movie::Entity::insert_many(models).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn insert_actors(&self, models: Vec<actor::ActiveModel>) -> AppResult<()> {
        let txn = self.db.begin().await?;
        actor::Entity::insert_many(models).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn insert_cast(&self, models: Vec<cast::ActiveModel>) -> AppResult<()> {
        let txn = self.db.begin().await?;
        cast::Entity::insert_many(models).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    pub async fn insert_reviews(&self, models: Vec<review::ActiveModel>) -> AppResult<()> {
        let txn = self.db.begin().await?;
        review::Entity::insert_many(models).exec(&txn).await?;
        txn.commit().await?;
        Ok(())
    }

    /// Stores one user-submitted review and returns the persisted row.
    pub async fn add_review(
        &self,
        movie_id: i64,
        rating: i32,
        comment: String,
    ) -> AppResult<review::Model> {
        let model = review::ActiveModel {
            id: NotSet,
            movie_id: Set(movie_id),
            rating: Set(rating),
            comment: Set(comment),
        };
        Ok(review::Entity::insert(model).exec_with_returning(&self.db).await?)
    }

    /// Seeds the fixed catalog on first launch. The emptiness check and all
    /// five batches share one transaction, so a second concurrent caller
    /// either observes the committed catalog and does nothing or fails on
    /// the primary keys without a partial seed ever becoming visible.
    /// Returns whether this call did the seeding.
    pub async fn seed_if_empty(&self) -> AppResult<bool> {
        let txn = self.db.begin().await?;

        let existing = director::Entity::find().count(&txn).await?;
        if existing > 0 {
            debug!(directors = existing, "catalog already present, skipping seed");
            txn.rollback().await?;
            return Ok(false);
        }

        let mut directors = Vec::with_capacity(catalog::DIRECTORS.len());
        for d in catalog::DIRECTORS {
            directors.push(director::ActiveModel {
                id: Set(d.id),
                name: Set(d.name.to_string()),
                birth_date: Set(d.birth_date.parse()?),
            });
        }
        director::Entity::insert_many(directors).exec(&txn).await?;

        let movies = catalog::MOVIES.iter().map(|m| movie::ActiveModel {
            id: Set(m.id),
            title: Set(m.title.to_string()),
            release_year: Set(m.release_year),
            director_id: Set(m.director_id),
        });
        movie::Entity::insert_many(movies).exec(&txn).await?;

        let actors = catalog::ACTORS.iter().map(|a| actor::ActiveModel {
            id: Set(a.id),
            name: Set(a.name.to_string()),
            birth_year: Set(a.birth_year),
        });
        actor::Entity::insert_many(actors).exec(&txn).await?;

        let links = catalog::CAST
            .iter()
            .map(|&(movie_id, actor_id)| cast::ActiveModel {
                movie_id: Set(movie_id),
                actor_id: Set(actor_id),
            });
        cast::Entity::insert_many(links).exec(&txn).await?;

        let reviews = catalog::REVIEWS.iter().map(|r| review::ActiveModel {
            id: NotSet,
            movie_id: Set(r.movie_id),
            rating: Set(r.rating),
            comment: Set(r.comment.to_string()),
        });
        review::Entity::insert_many(reviews).exec(&txn).await?;

        txn.commit().await?;

        info!(
            directors = catalog::DIRECTORS.len(),
            movies = catalog::MOVIES.len(),
            actors = catalog::ACTORS.len(),
            "seeded sample catalog"
        );
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    use super::*;

    async fn repo() -> MovieRepository {
        // One connection keeps every query on the same in-memory database.
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.expect("connect in-memory sqlite");
        Migrator::up(&db, None).await.expect("run migrations");
        MovieRepository::new(db)
    }

    fn seed_director(id: i64, name: &str, birth_date: &str) -> director::ActiveModel {
        director::ActiveModel {
            id: Set(id),
            name: Set(name.to_string()),
            birth_date: Set(birth_date.parse().expect("date")),
        }
    }

    fn seed_movie(id: i64, title: &str, release_year: i32, director_id: i64) -> movie::ActiveModel {
        movie::ActiveModel {
            id: Set(id),
            title: Set(title.to_string()),
            release_year: Set(release_year),
            director_id: Set(director_id),
        }
    }

    fn seed_actor(id: i64, name: &str, birth_year: i32) -> actor::ActiveModel {
        actor::ActiveModel { id: Set(id), name: Set(name.to_string()), birth_year: Set(birth_year) }
    }

    fn seed_cast(movie_id: i64, actor_id: i64) -> cast::ActiveModel {
        cast::ActiveModel { movie_id: Set(movie_id), actor_id: Set(actor_id) }
    }

    fn seed_review(id: i64, movie_id: i64, rating: i32, comment: &str) -> review::ActiveModel {
        review::ActiveModel {
            id: Set(id),
            movie_id: Set(movie_id),
            rating: Set(rating),
            comment: Set(comment.to_string()),
        }
    }

    #[tokio::test]
    async fn empty_store_yields_an_empty_list() {
        let repo = repo().await;
        assert!(repo.get_all_with_details().await.expect("get all").is_empty());
    }

    #[tokio::test]
    async fn seed_populates_the_catalog_once() {
        let repo = repo().await;

        assert!(repo.seed_if_empty().await.expect("first seed"));
        assert!(!repo.seed_if_empty().await.expect("second seed"));

        let db = repo.db();
        assert_eq!(director::Entity::find().count(db).await.unwrap(), 3);
        assert_eq!(movie::Entity::find().count(db).await.unwrap(), 8);
        assert_eq!(actor::Entity::find().count(db).await.unwrap(), 11);
        assert_eq!(cast::Entity::find().count(db).await.unwrap(), 13);
        assert_eq!(review::Entity::find().count(db).await.unwrap(), 15);
    }

    #[tokio::test]
    async fn seeded_catalog_round_trips_through_the_join() {
        let repo = repo().await;
        repo.seed_if_empty().await.expect("seed");

        let all = repo.get_all_with_details().await.expect("get all");
        assert_eq!(all.len(), 8);

        let inception = all.iter().find(|d| d.movie.title == "Inception").expect("Inception");
        assert_eq!(inception.movie.release_year, 2010);
        assert_eq!(inception.director.name, "Christopher Nolan");
        assert_eq!(inception.director.birth_date, "1970-07-30".parse().unwrap());
        let names: Vec<&str> = inception.actors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Leonardo DiCaprio", "Marion Cotillard"]);
        assert_eq!(inception.reviews.len(), 3);
        assert_eq!(inception.reviews[0].comment, "Mind-bending masterpiece!");

        for details in &all {
            for (i, a) in details.actors.iter().enumerate() {
                assert!(details.actors[i + 1..].iter().all(|b| b.id != a.id));
            }
            for (i, r) in details.reviews.iter().enumerate() {
                assert!(details.reviews[i + 1..].iter().all(|s| s.id != r.id));
            }
        }
    }

    #[tokio::test]
    async fn castless_movie_hydrates_with_an_empty_actor_list() {
        let repo = repo().await;
        repo.seed_if_empty().await.expect("seed");

        let all = repo.get_all_with_details().await.expect("get all");
        let schindlers =
            all.iter().find(|d| d.movie.title == "Schindler's List").expect("Schindler's List");
        assert!(schindlers.actors.is_empty());
        assert_eq!(schindlers.reviews.len(), 1);
    }

    #[tokio::test]
    async fn found_but_childless_movie_returns_empty_lists() {
        let repo = repo().await;
        repo.insert_directors(vec![seed_director(1, "Christopher Nolan", "1970-07-30")])
            .await
            .expect("directors");
        repo.insert_movies(vec![seed_movie(1, "Following", 1998, 1)]).await.expect("movies");

        let details = repo.get_with_details(1).await.expect("lookup").expect("found");
        assert_eq!(details.movie.title, "Following");
        assert_eq!(details.director.name, "Christopher Nolan");
        assert!(details.actors.is_empty());
        assert!(details.reviews.is_empty());
    }

    #[tokio::test]
    async fn get_with_details_returns_none_for_an_unknown_id() {
        let repo = repo().await;
        repo.seed_if_empty().await.expect("seed");

        assert!(repo.get_with_details(999).await.expect("lookup").is_none());
    }

    #[tokio::test]
    async fn two_join_rows_collapse_into_one_actor_and_two_reviews() {
        let repo = repo().await;

        repo.insert_directors(vec![seed_director(1, "Nolan", "1970-07-30")])
            .await
            .expect("directors");
        repo.insert_movies(vec![seed_movie(10, "Inception", 2010, 1)]).await.expect("movies");
        repo.insert_actors(vec![seed_actor(100, "DiCaprio", 1974)]).await.expect("actors");
        repo.insert_cast(vec![seed_cast(10, 100)]).await.expect("cast");
        repo.insert_reviews(vec![
            seed_review(1000, 10, 5, "Great"),
            seed_review(1001, 10, 4, "Good"),
        ])
        .await
        .expect("reviews");

        let details = repo.get_with_details(10).await.expect("lookup").expect("found");
        assert_eq!(details.movie.title, "Inception");
        assert_eq!(details.director.name, "Nolan");
        assert_eq!(details.actors.len(), 1);
        assert_eq!(details.actors[0].name, "DiCaprio");
        assert_eq!(details.reviews.len(), 2);
        assert_eq!(details.reviews[0].comment, "Great");
        assert_eq!(details.reviews[1].comment, "Good");
    }

    #[tokio::test]
    async fn failed_batch_leaves_no_rows_behind() {
        let repo = repo().await;
        repo.insert_directors(vec![seed_director(1, "Nolan", "1970-07-30")])
            .await
            .expect("directors");
        repo.insert_movies(vec![seed_movie(1, "Inception", 2010, 1)]).await.expect("movies");

        let result = repo
            .insert_reviews(vec![
                seed_review(1, 1, 5, "Great"),
                seed_review(2, 999, 5, "Dangling movie id"),
            ])
            .await;

        assert!(result.is_err());
        assert_eq!(review::Entity::find().count(repo.db()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn movie_with_an_unknown_director_is_rejected() {
        let repo = repo().await;

        let result = repo.insert_movies(vec![seed_movie(1, "Orphan", 2020, 42)]).await;

        assert!(result.is_err());
        assert_eq!(movie::Entity::find().count(repo.db()).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn added_review_shows_up_in_the_details() {
        let repo = repo().await;
        repo.seed_if_empty().await.expect("seed");

        let stored = repo.add_review(5, 4, "Unforgettable".to_string()).await.expect("insert");
        assert_eq!(stored.movie_id, 5);
        assert_eq!(stored.rating, 4);

        let details = repo.get_with_details(5).await.expect("lookup").expect("found");
        assert_eq!(details.reviews.len(), 2);
        assert!(details.reviews.iter().any(|r| r.id == stored.id));
    }
}
