use sqlx::{sqlite::SqliteRow, FromRow, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::database::query_builder::QueryBuilder;
use crate::filter::{Filter, SortDirection};

/// Read side of a single table. Writes stay in the owning service because
/// each entity has its own column list.
pub struct Repository<T> {
    table_name: &'static str,
    pool: SqlitePool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    pub fn new(table_name: &'static str, pool: SqlitePool) -> Self {
        Self {
            table_name,
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Fresh filter on this table, ordered by insertion
    pub fn filter(&self) -> Result<Filter, DatabaseError> {
        Ok(Filter::new(self.table_name)?.order("id", SortDirection::Asc))
    }

    pub async fn select_all(&self) -> Result<Vec<T>, DatabaseError> {
        self.select_any(self.filter()?).await
    }

    pub async fn select_any(&self, filter: Filter) -> Result<Vec<T>, DatabaseError> {
        QueryBuilder::<T>::new(filter).select_all(&self.pool).await
    }

    pub async fn select_one(&self, filter: Filter) -> Result<Option<T>, DatabaseError> {
        QueryBuilder::<T>::new(filter.limit(1)?).select_optional(&self.pool).await
    }

    pub async fn select_id(&self, id: i64) -> Result<Option<T>, DatabaseError> {
        self.select_one(self.filter()?.where_eq("id", id)).await
    }

    pub async fn select_404(&self, id: i64) -> Result<T, DatabaseError> {
        self.select_id(id)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("{} record {} not found", self.table_name, id)))
    }

    pub async fn count(&self, filter: Filter) -> Result<i64, DatabaseError> {
        QueryBuilder::<T>::new(filter).count(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::database::models::Credential;
    use crate::database::DatabaseManager;

    async fn repository() -> Repository<Credential> {
        let config = AppConfig::for_testing("uploads");
        let manager = DatabaseManager::connect(&config.database).await.unwrap();
        for (username, role) in [("zed", "ADMIN"), ("amy", "EMPLOYEE"), ("kim", "EMPLOYEE")] {
            sqlx::query("INSERT INTO credentials (username, password, role) VALUES (?, 'pw', ?)")
                .bind(username)
                .bind(role)
                .execute(manager.pool())
                .await
                .unwrap();
        }
        Repository::new(Credential::TABLE, manager.pool().clone())
    }

    #[tokio::test]
    async fn select_all_orders_by_insertion() {
        let repository = repository().await;
        let usernames: Vec<String> = repository
            .select_all()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.username)
            .collect();
        assert_eq!(usernames, vec!["zed", "amy", "kim"]);
    }

    #[tokio::test]
    async fn filters_and_counts() {
        let repository = repository().await;
        let employees = repository.filter().unwrap().where_eq("role", "EMPLOYEE");
        assert_eq!(repository.count(employees.clone()).await.unwrap(), 2);
        assert_eq!(repository.select_one(employees).await.unwrap().map(|c| c.username), Some("amy".to_string()));
    }

    #[tokio::test]
    async fn select_404_names_table_and_id() {
        let repository = repository().await;
        assert_eq!(repository.select_404(2).await.unwrap().username, "amy");
        match repository.select_404(99).await {
            Err(DatabaseError::NotFound(msg)) => assert_eq!(msg, "credentials record 99 not found"),
            other => panic!("expected NotFound, got {:?}", other.map(|c| c.username)),
        }
    }
}
