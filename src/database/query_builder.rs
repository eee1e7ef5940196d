use sqlx::query::{Query, QueryAs};
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Row, Sqlite, SqlitePool};

use crate::database::manager::DatabaseError;
use crate::filter::{Filter, FilterValue};

pub struct QueryBuilder<T> {
    filter: Filter,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> QueryBuilder<T>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn select_all(self, pool: &SqlitePool) -> Result<Vec<T>, DatabaseError> {
        let sql_result = self.filter.to_sql()?;
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_all(pool).await?)
    }

    pub async fn select_optional(self, pool: &SqlitePool) -> Result<Option<T>, DatabaseError> {
        let sql_result = self.filter.to_sql()?;
        let mut q = sqlx::query_as::<_, T>(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query_as(q, p);
        }
        Ok(q.fetch_optional(pool).await?)
    }

    pub async fn count(self, pool: &SqlitePool) -> Result<i64, DatabaseError> {
        let sql_result = self.filter.to_count_sql()?;
        let mut q = sqlx::query(&sql_result.query);
        for p in sql_result.params.iter() {
            q = bind_param_query(q, p);
        }
        let row = q.fetch_one(pool).await?;
        let count: i64 = row.try_get("count")?;
        Ok(count)
    }
}

fn bind_param_query<'q>(
    q: Query<'q, Sqlite, SqliteArguments<'q>>,
    v: &'q FilterValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match v {
        FilterValue::Null => q.bind(None::<String>),
        FilterValue::Bool(b) => q.bind(*b),
        FilterValue::Int(i) => q.bind(*i),
        FilterValue::Text(s) => q.bind(s.as_str()),
        FilterValue::DateTime(dt) => q.bind(*dt),
    }
}

fn bind_param_query_as<'q, O>(
    q: QueryAs<'q, Sqlite, O, SqliteArguments<'q>>,
    v: &'q FilterValue,
) -> QueryAs<'q, Sqlite, O, SqliteArguments<'q>>
where
    O: for<'r> FromRow<'r, SqliteRow>,
{
    match v {
        FilterValue::Null => q.bind(None::<String>),
        FilterValue::Bool(b) => q.bind(*b),
        FilterValue::Int(i) => q.bind(*i),
        FilterValue::Text(s) => q.bind(s.as_str()),
        FilterValue::DateTime(dt) => q.bind(*dt),
    }
}
