use super::error::FilterError;
use super::filter_where::FilterWhere;
use super::types::{FilterOp, FilterOrderInfo, FilterValue, FilterWhereInfo, SortDirection, SqlResult};

/// Parameterised SELECT over a single table: equality and inclusive range
/// predicates joined with AND, optional ordering and limit.
#[derive(Debug, Clone)]
pub struct Filter {
    table_name: String,
    where_data: Vec<FilterWhereInfo>,
    order_data: Vec<FilterOrderInfo>,
    limit: Option<i32>,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Result<Self, FilterError> {
        let table_name = table_name.into();
        if !is_identifier(&table_name) {
            return Err(FilterError::InvalidTableName(format!("Invalid table name format: {}", table_name)));
        }
        Ok(Self {
            table_name,
            where_data: vec![],
            order_data: vec![],
            limit: None,
        })
    }

    pub fn where_eq(mut self, column: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.where_data.push(FilterWhereInfo {
            column: column.into(),
            operator: FilterOp::Eq,
            data: vec![value.into()],
        });
        self
    }

    /// Inclusive on both ends, matching SQL BETWEEN.
    pub fn where_between(
        mut self,
        column: impl Into<String>,
        low: impl Into<FilterValue>,
        high: impl Into<FilterValue>,
    ) -> Self {
        self.where_data.push(FilterWhereInfo {
            column: column.into(),
            operator: FilterOp::Between,
            data: vec![low.into(), high.into()],
        });
        self
    }

    pub fn order(mut self, column: impl Into<String>, sort: SortDirection) -> Self {
        self.order_data.push(FilterOrderInfo { column: column.into(), sort });
        self
    }

    pub fn limit(mut self, limit: i32) -> Result<Self, FilterError> {
        if limit < 0 {
            return Err(FilterError::InvalidLimit("Limit must be non-negative".to_string()));
        }
        self.limit = Some(limit);
        Ok(self)
    }

    pub fn to_sql(&self) -> Result<SqlResult, FilterError> {
        self.validate_columns()?;
        let (where_clause, params) = FilterWhere::generate(&self.where_data)?;

        let query = [
            "SELECT *".to_string(),
            format!("FROM \"{}\"", self.table_name),
            if where_clause.is_empty() { String::new() } else { format!("WHERE {}", where_clause) },
            self.build_order_clause(),
            self.limit.map(|l| format!("LIMIT {}", l)).unwrap_or_default(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Ok(SqlResult { query, params })
    }

    pub fn to_count_sql(&self) -> Result<SqlResult, FilterError> {
        self.validate_columns()?;
        let (where_clause, params) = FilterWhere::generate(&self.where_data)?;
        let query = if where_clause.is_empty() {
            format!("SELECT COUNT(*) as count FROM \"{}\"", self.table_name)
        } else {
            format!("SELECT COUNT(*) as count FROM \"{}\" WHERE {}", self.table_name, where_clause)
        };
        Ok(SqlResult { query, params })
    }

    fn validate_columns(&self) -> Result<(), FilterError> {
        let columns = self
            .where_data
            .iter()
            .map(|w| &w.column)
            .chain(self.order_data.iter().map(|o| &o.column));
        for column in columns {
            if !is_identifier(column) {
                return Err(FilterError::InvalidColumn(format!("Invalid column name format: {}", column)));
            }
        }
        Ok(())
    }

    fn build_order_clause(&self) -> String {
        if self.order_data.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = self
            .order_data
            .iter()
            .map(|i| format!("\"{}\" {}", i.column, i.sort.to_sql()))
            .collect();
        format!("ORDER BY {}", parts.join(", "))
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
