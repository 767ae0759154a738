use dinesafely_core::infrastructure::db::postgres::{Postgres, PostgresConfig};
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use test_context::AsyncTestContext;
use uuid::Uuid;

/// Migrated database from `DATABASE_URL`, seeded with one user, restaurant
/// and review. `db` is `None` when no database is configured.
pub struct PostgresContext {
    pub db: Option<DatabaseConnection>,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub review_id: Uuid,
    seeded_users: Vec<Uuid>,
}

async fn insert_user(db: &DatabaseConnection) -> Uuid {
    let user_id = Uuid::new_v4();
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        "INSERT INTO users (id, username, email, password_hash) VALUES ($1, $2, $3, 'x')",
        [
            user_id.into(),
            format!("user-{user_id}").into(),
            format!("{user_id}@example.test").into(),
        ],
    ))
    .await
    .expect("seed user");
    user_id
}

impl PostgresContext {
    /// Inserts another user, removed again on teardown.
    pub async fn seed_user(&mut self) -> Uuid {
        let db = self.db.as_ref().expect("database configured");
        let user_id = insert_user(db).await;
        self.seeded_users.push(user_id);
        user_id
    }
}

impl AsyncTestContext for PostgresContext {
    async fn setup() -> Self {
        let ids = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL is not set, skipping database test");
            return Self {
                db: None,
                user_id: ids.0,
                restaurant_id: ids.1,
                review_id: ids.2,
                seeded_users: Vec::new(),
            };
        };

        let db = Postgres::new(PostgresConfig {
            database_url,
            max_connections: 30,
        })
        .await
        .expect("connect and migrate")
        .get_db();

        let user_id = insert_user(&db).await;
        let (_, restaurant_id, review_id) = ids;

        db.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "INSERT INTO restaurants (id, business_id, name, address, postcode) VALUES ($1, $2, 'Joe''s Pizza', '7 Carmine St', '10014')",
            [restaurant_id.into(), format!("biz-{restaurant_id}").into()],
        ))
        .await
        .expect("seed restaurant");

        db.execute(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            "INSERT INTO reviews (id, restaurant_id, user_id, rating, rating_safety, rating_entry, rating_door, rating_table, rating_bathroom, rating_path) VALUES ($1, $2, $3, 5, 5, 5, 5, 5, 5, 5)",
            [review_id.into(), restaurant_id.into(), user_id.into()],
        ))
        .await
        .expect("seed review");

        Self {
            db: Some(db),
            user_id,
            restaurant_id,
            review_id,
            seeded_users: vec![user_id],
        }
    }

    async fn teardown(self) {
        if let Some(db) = self.db {
            db.execute(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                "DELETE FROM restaurants WHERE id = $1",
                [self.restaurant_id.into()],
            ))
            .await
            .expect("clean up restaurant");
            for user_id in self.seeded_users {
                db.execute(Statement::from_sql_and_values(
                    DatabaseBackend::Postgres,
                    "DELETE FROM users WHERE id = $1",
                    [user_id.into()],
                ))
                .await
                .expect("clean up user");
            }
        }
    }
}
