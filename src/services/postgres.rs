use crate::models::{BreedRecord, ParseCategoryError};
use crate::services::catalog::{Catalog, CatalogError};
use serde::{Deserialize, Serialize};
use sqlx::postgres::{PgConnection, PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Shelter score stored for seeded breeds that do not carry one
pub const DEFAULT_SHELTER_SCORE: u8 = 5;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Catalog error: {0}")]
    CatalogError(#[from] CatalogError),

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Seed mismatch: expected {expected} breeds, found {actual}")]
    SeedMismatch { expected: usize, actual: i64 },
}

impl From<ParseCategoryError> for PostgresError {
    fn from(err: ParseCategoryError) -> Self {
        PostgresError::InvalidRow(err.to_string())
    }
}

/// A favorited breed with the time it was favorited
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteBreed {
    #[serde(flatten)]
    pub breed: BreedRecord,
    pub favorited_at: chrono::DateTime<chrono::Utc>,
}

/// Catalog and favorites counts
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub breed_count: i64,
    pub favorite_count: i64,
}

const BREED_COLUMNS: &str = r#"
    b.id, b.name, b.size, b.energy_level, b.trainability, b.grooming_needs,
    b.good_with_kids, b.good_with_pets, b.senior_friendly, b.special_needs_possible,
    b.role, b.shelter_availability_score, b.description, b.image_filename
"#;

/// PostgreSQL client for the breed catalog and favorites
///
/// The catalog is written once by seeding and read on demand; the
/// matcher only ever sees an immutable snapshot built from it.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a client without connecting or running migrations
    ///
    /// Connections are opened on first use.
    pub fn lazy(database_url: &str) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(1))
            .connect_lazy(database_url)?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Seed the breeds table from a catalog if it is empty
    ///
    /// Returns the number of breeds inserted (0 when already seeded).
    pub async fn seed_if_empty(&self, catalog: &Catalog) -> Result<u64, PostgresError> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM breeds")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tracing::debug!("Breeds table already holds {} breeds, skipping seed", existing);
            return Ok(0);
        }

        let inserted = insert_breeds(&mut *tx, catalog).await?;
        tx.commit().await?;

        tracing::info!("Seeded {} breeds", inserted);
        Ok(inserted)
    }

    /// Replace the whole catalog with `catalog`, dropping every favorite
    ///
    /// Runs in one transaction and checks the stored count afterwards.
    pub async fn force_reseed(&self, catalog: &Catalog) -> Result<u64, PostgresError> {
        tracing::info!("Force reseeding breed catalog with {} breeds", catalog.len());

        let mut tx = self.pool.begin().await?;
        sqlx::query("TRUNCATE favorites, breeds").execute(&mut *tx).await?;
        let inserted = insert_breeds(&mut *tx, catalog).await?;
        tx.commit().await?;

        let stored = self.breed_count().await?;
        if usize::try_from(stored).ok() != Some(catalog.len()) {
            return Err(PostgresError::SeedMismatch {
                expected: catalog.len(),
                actual: stored,
            });
        }

        tracing::info!("Reseeded {} breeds", inserted);
        Ok(inserted)
    }

    /// Delete every favorite and breed, returning the number of breeds removed
    pub async fn clear_catalog(&self) -> Result<u64, PostgresError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM favorites").execute(&mut *tx).await?;
        let removed = sqlx::query("DELETE FROM breeds")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;

        tracing::info!("Cleared {} breeds from the catalog", removed);
        Ok(removed)
    }

    /// Delete every favorite, returning how many were removed
    pub async fn reset_favorites(&self) -> Result<u64, PostgresError> {
        let result = sqlx::query("DELETE FROM favorites").execute(&self.pool).await?;

        tracing::info!("Reset {} favorites", result.rows_affected());
        Ok(result.rows_affected())
    }

    async fn breed_count(&self) -> Result<i64, PostgresError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM breeds")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Load every breed, ordered by name
    pub async fn load_breeds(&self) -> Result<Vec<BreedRecord>, PostgresError> {
        let query = format!("SELECT {} FROM breeds b ORDER BY b.name", BREED_COLUMNS);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let breeds = rows
            .iter()
            .map(breed_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Loaded {} breeds", breeds.len());
        Ok(breeds)
    }

    /// Load a validated catalog snapshot
    pub async fn load_catalog(&self) -> Result<Catalog, PostgresError> {
        let breeds = self.load_breeds().await?;
        Ok(Catalog::from_records(breeds)?)
    }

    pub async fn get_breed(&self, id: i64) -> Result<Option<BreedRecord>, PostgresError> {
        let query = format!("SELECT {} FROM breeds b WHERE b.id = $1", BREED_COLUMNS);

        let row = sqlx::query(&query).bind(id).fetch_optional(&self.pool).await?;
        row.as_ref().map(breed_from_row).transpose()
    }

    /// Favorite a breed
    ///
    /// Favoriting an already favorited breed is a no-op.
    pub async fn add_favorite(&self, breed_id: i64) -> Result<(), PostgresError> {
        if self.get_breed(breed_id).await?.is_none() {
            return Err(PostgresError::NotFound(format!("breed {}", breed_id)));
        }

        sqlx::query(
            r#"
            INSERT INTO favorites (breed_id, created_at)
            VALUES ($1, NOW())
            ON CONFLICT (breed_id) DO NOTHING
            "#,
        )
        .bind(breed_id)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Added breed {} to favorites", breed_id);
        Ok(())
    }

    /// Remove a breed from favorites, returning whether it was favorited
    pub async fn remove_favorite(&self, breed_id: i64) -> Result<bool, PostgresError> {
        let result = sqlx::query("DELETE FROM favorites WHERE breed_id = $1")
            .bind(breed_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn is_favorite(&self, breed_id: i64) -> Result<bool, PostgresError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM favorites WHERE breed_id = $1")
            .bind(breed_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count > 0)
    }

    /// Favorited breed ids, newest first
    pub async fn favorite_ids(&self) -> Result<Vec<i64>, PostgresError> {
        let ids = sqlx::query_scalar("SELECT breed_id FROM favorites ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }

    /// Favorited breeds with the time they were favorited, newest first
    pub async fn favorites(&self) -> Result<Vec<FavoriteBreed>, PostgresError> {
        let query = format!(
            r#"
            SELECT {}, f.created_at AS favorited_at
            FROM favorites f
            JOIN breeds b ON b.id = f.breed_id
            ORDER BY f.created_at DESC
            "#,
            BREED_COLUMNS
        );

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| -> Result<FavoriteBreed, PostgresError> {
                Ok(FavoriteBreed {
                    breed: breed_from_row(row)?,
                    favorited_at: row.try_get("favorited_at")?,
                })
            })
            .collect()
    }

    pub async fn stats(&self) -> Result<CatalogStats, PostgresError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM breeds) AS breed_count,
                (SELECT COUNT(*) FROM favorites) AS favorite_count
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(CatalogStats {
            breed_count: row.try_get("breed_count")?,
            favorite_count: row.try_get("favorite_count")?,
        })
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Shelter score written to the breeds table; a missing or zero score stores the default
fn stored_shelter_score(score: Option<u8>) -> u8 {
    score.filter(|&s| s > 0).unwrap_or(DEFAULT_SHELTER_SCORE)
}

async fn insert_breeds(conn: &mut PgConnection, catalog: &Catalog) -> Result<u64, PostgresError> {
    let query = r#"
        INSERT INTO breeds (
            id, name, size, energy_level, trainability, grooming_needs,
            good_with_kids, good_with_pets, senior_friendly, special_needs_possible,
            role, shelter_availability_score, description, image_filename
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
    "#;

    let mut inserted = 0;
    for breed in catalog.breeds() {
        sqlx::query(query)
            .bind(breed.id)
            .bind(&breed.name)
            .bind(breed.size.as_str())
            .bind(breed.energy_level.as_str())
            .bind(breed.trainability.as_str())
            .bind(breed.grooming_needs.as_str())
            .bind(breed.good_with_kids)
            .bind(breed.good_with_pets)
            .bind(breed.senior_friendly)
            .bind(breed.special_needs_possible)
            .bind(breed.role.as_str())
            .bind(i16::from(stored_shelter_score(breed.shelter_availability_score)))
            .bind(&breed.description)
            .bind(&breed.image_filename)
            .execute(&mut *conn)
            .await?;
        inserted += 1;
    }

    Ok(inserted)
}

fn breed_from_row(row: &PgRow) -> Result<BreedRecord, PostgresError> {
    let shelter: i16 = row.try_get("shelter_availability_score")?;
    let shelter = u8::try_from(shelter)
        .map_err(|_| PostgresError::InvalidRow(format!("shelter score {}", shelter)))?;

    Ok(BreedRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        size: row.try_get::<&str, _>("size")?.parse()?,
        energy_level: row.try_get::<&str, _>("energy_level")?.parse()?,
        trainability: row.try_get::<&str, _>("trainability")?.parse()?,
        grooming_needs: row.try_get::<&str, _>("grooming_needs")?.parse()?,
        good_with_kids: row.try_get("good_with_kids")?,
        good_with_pets: row.try_get("good_with_pets")?,
        senior_friendly: row.try_get("senior_friendly")?,
        special_needs_possible: row.try_get("special_needs_possible")?,
        role: row.try_get::<&str, _>("role")?.parse()?,
        shelter_availability_score: Some(shelter),
        description: row.try_get("description")?,
        image_filename: row.try_get("image_filename")?,
    })
}
