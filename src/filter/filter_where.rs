use super::error::FilterError;
use super::types::{FilterOp, FilterValue, FilterWhereInfo};

pub struct FilterWhere {
    param_values: Vec<FilterValue>,
}

impl FilterWhere {
    /// Render conditions joined with AND. An empty list renders as an empty
    /// clause so the caller can omit WHERE entirely.
    pub fn generate(conditions: &[FilterWhereInfo]) -> Result<(String, Vec<FilterValue>), FilterError> {
        let mut filter_where = Self { param_values: vec![] };
        let mut sql_conditions = Vec::with_capacity(conditions.len());
        for condition in conditions {
            sql_conditions.push(filter_where.build_sql_condition(condition)?);
        }
        Ok((sql_conditions.join(" AND "), filter_where.param_values))
    }

    fn build_sql_condition(&mut self, condition: &FilterWhereInfo) -> Result<String, FilterError> {
        let quoted_column = format!("\"{}\"", condition.column);
        match condition.operator {
            FilterOp::Eq => match condition.data.as_slice() {
                [FilterValue::Null] => Ok(format!("{} IS NULL", quoted_column)),
                [value] => Ok(format!("{} = {}", quoted_column, self.param(value.clone()))),
                _ => Err(FilterError::InvalidOperatorData(format!(
                    "equality on {} requires exactly 1 value",
                    condition.column
                ))),
            },
            FilterOp::Between => match condition.data.as_slice() {
                [low, high] => Ok(format!(
                    "{} BETWEEN {} AND {}",
                    quoted_column,
                    self.param(low.clone()),
                    self.param(high.clone())
                )),
                _ => Err(FilterError::InvalidOperatorData(
                    "between requires exactly 2 values".to_string(),
                )),
            },
        }
    }

    fn param(&mut self, value: FilterValue) -> &'static str {
        self.param_values.push(value);
        "?"
    }
}
