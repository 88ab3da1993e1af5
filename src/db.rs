use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub fn create_pool(database_url: &str) -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    // An in-memory SQLite database exists per connection; cap the pool at one
    // connection so every request sees the same database.
    let builder = if database_url.contains(":memory:") {
        r2d2::Pool::builder().max_size(1)
    } else {
        r2d2::Pool::builder()
    };

    let pool = builder
        .build(manager)
        .expect("Failed to create database pool");

    // Run pending migrations on startup
    let mut conn = pool
        .get()
        .expect("Failed to get DB connection for migrations");
    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run database migrations");

    pool
}

/// Get a pooled connection inside a handler, early-returning a 500 JSON error
/// response when the pool cannot hand one out.
#[macro_export]
macro_rules! get_conn {
    ($pool:expr) => {
        match $pool.get() {
            Ok(conn) => conn,
            Err(e) => {
                tracing::error!("Failed to get database connection: {}", e);
                return (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json($crate::api::ErrorResponse {
                        error: "Database connection unavailable".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewPantryItem, PantryItem};
    use crate::schema::pantry_items;

    #[test]
    fn test_in_memory_pool_runs_migrations() {
        let pool = create_pool(":memory:");
        let mut conn = pool.get().unwrap();

        let inserted: PantryItem = diesel::insert_into(pantry_items::table)
            .values(&NewPantryItem {
                name: "rice",
                expiry_date: None,
            })
            .returning(PantryItem::as_returning())
            .get_result(&mut conn)
            .unwrap();

        assert_eq!(inserted.name, "rice");
        assert!(inserted.id >= 1);

        let all: Vec<PantryItem> = pantry_items::table
            .select(PantryItem::as_select())
            .load(&mut conn)
            .unwrap();
        assert_eq!(all.len(), 1);
    }
}
