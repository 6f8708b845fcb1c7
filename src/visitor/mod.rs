//! Visitors for reading an abstract SQL syntax tree, generating the query to
//! send to the database.
//!
//! The visitor module should not know how to construct an AST, just how to read
//! one. Everything related to the tree generation is in the
//! [ast](../ast/index.html) module.
//!
//! For prelude, all important imports are in `flex_sql::visitor::*`.

#[cfg(feature = "mysql")]
mod mysql;
#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "sqlite")]
mod sqlite;

#[cfg(feature = "mysql")]
pub use self::mysql::Mysql;
#[cfg(feature = "postgres")]
pub use self::postgres::Postgres;
#[cfg(feature = "sqlite")]
pub use self::sqlite::Sqlite;

use crate::ast::*;
use std::fmt;

/// A function travelling through the query AST, building the final query
/// string and gathering parameters sent to the database together with the
/// query.
pub trait Visitor<'a> {
    /// Opening and closing character to surround identifiers with.
    const C_BACKTICK: &'static str;
    /// The wildcard character used in `LIKE` patterns.
    const C_WILDCARD: &'static str;

    /// Convert the given query to an SQL string and a vector of parameters.
    /// The parameters are in the right order for the used database.
    fn build<Q>(query: Q) -> crate::Result<(String, Vec<ParameterizedValue<'a>>)>
    where
        Q: Into<Query<'a>>,
        Self: Sized;

    /// Write to the query.
    fn write<D: fmt::Display>(&mut self, s: D) -> crate::Result<()>;

    /// A point to modify an incoming query to make it compatible with the
    /// underlying database.
    fn compatibility_modifications(&self, query: Query<'a>) -> Query<'a> {
        query
    }

    /// When called, the visitor decided to not render the parameter into the query,
    /// replacing it with the `parameter_substitution`, calling `add_parameter`
    /// with the replaced value.
    fn add_parameter(&mut self, value: ParameterizedValue<'a>);

    /// The `LIMIT` and `OFFSET` statement in the query
    fn visit_limit_and_offset(
        &mut self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> crate::Result<()>;

    /// A visit to a value we parameterize
    fn parameter_substitution(&mut self) -> crate::Result<()>;

    /// A database insert, with dialect-specific conflict handling and
    /// `RETURNING` support.
    fn visit_insert(&mut self, insert: Insert<'a>) -> crate::Result<()>;

    /// A portable string aggregation over the grouped rows.
    fn visit_aggregate_to_string(&mut self, value: DatabaseValue<'a>) -> crate::Result<()>;

    /// A visit to a value used in an expression
    fn visit_parameterized(&mut self, value: ParameterizedValue<'a>) -> crate::Result<()> {
        self.add_parameter(value);
        self.parameter_substitution()
    }

    /// The entry point of a query
    fn visit_query(&mut self, query: Query<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        match self.compatibility_modifications(query) {
            Query::Select(select) => self.visit_select(select),
            Query::Insert(insert) => self.visit_insert(*insert),
            Query::Update(update) => self.visit_update(*update),
            Query::Delete(delete) => self.visit_delete(*delete),
            Query::Raw(raw) => self.write(raw),
        }
    }

    /// Surrounds the whatever `f` writes with `begin` and `end`.
    fn surround_with<F>(&mut self, begin: &str, end: &str, f: F) -> crate::Result<()>
    where
        F: FnOnce(&mut Self) -> crate::Result<()>,
        Self: Sized,
    {
        self.write(begin)?;
        f(self)?;
        self.write(end)
    }

    /// Identifier parts delimited with the backtick character and separated
    /// with dots. A delimiter inside an identifier is escaped by doubling
    /// it.
    fn delimited_identifiers(&mut self, parts: &[&str]) -> crate::Result<()> {
        let len = parts.len();

        for (i, part) in parts.iter().enumerate() {
            self.write(Self::C_BACKTICK)?;

            if part.contains(Self::C_BACKTICK) {
                self.write(part.replace(Self::C_BACKTICK, &Self::C_BACKTICK.repeat(2)))?;
            } else {
                self.write(part)?;
            }

            self.write(Self::C_BACKTICK)?;

            if i < (len - 1) {
                self.write(".")?;
            }
        }

        Ok(())
    }

    /// A walk through a `SELECT` statement
    fn visit_select(&mut self, select: Select<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        let Select {
            table,
            extra_tables,
            columns,
            conditions,
            ordering,
            grouping,
            having,
            joins,
            limit,
            offset,
            distinct,
        } = select;

        self.write("SELECT ")?;

        if distinct {
            self.write("DISTINCT ")?;
        }

        match table {
            Some(table) => {
                if columns.is_empty() {
                    match table.alias {
                        Some(ref alias) => self.delimited_identifiers(&[alias.as_ref()])?,
                        None => match table.database {
                            Some(ref database) => self.delimited_identifiers(&[
                                database.as_ref(),
                                table.name.as_ref(),
                            ])?,
                            None => self.delimited_identifiers(&[table.name.as_ref()])?,
                        },
                    }

                    self.write(".*")?;
                } else {
                    self.visit_columns(columns)?;
                }

                self.write(" FROM ")?;
                self.visit_table(table, true)?;

                for extra_table in extra_tables {
                    self.write(", ")?;
                    self.visit_table(extra_table, true)?;
                }

                for join in joins {
                    self.visit_join(join)?;
                }

                if let Some(conditions) = conditions {
                    self.write(" WHERE ")?;
                    self.visit_conditions(conditions)?;
                }

                if !grouping.is_empty() {
                    self.write(" GROUP BY ")?;
                    self.visit_grouping(grouping)?;
                }

                if let Some(having) = having {
                    self.write(" HAVING ")?;
                    self.visit_conditions(having)?;
                }

                if !ordering.is_empty() {
                    self.write(" ORDER BY ")?;
                    self.visit_ordering(ordering)?;
                }

                self.visit_limit_and_offset(limit, offset)?;
            }
            None => {
                if columns.is_empty() {
                    self.write("*")?;
                } else {
                    self.visit_columns(columns)?;
                }
            }
        }

        Ok(())
    }

    /// A walk through an `UPDATE` statement
    fn visit_update(&mut self, update: Update<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        let Update {
            table,
            columns,
            values,
            conditions,
        } = update;

        self.write("UPDATE ")?;
        self.visit_table(table, true)?;
        self.write(" SET ")?;

        let pairs = columns.into_iter().zip(values.into_iter());
        let len = pairs.len();

        for (i, (key, value)) in pairs.enumerate() {
            self.visit_column(Column::new(key.name))?;
            self.write(" = ")?;
            self.visit_database_value(value)?;

            if i < (len - 1) {
                self.write(", ")?;
            }
        }

        if let Some(conditions) = conditions {
            self.write(" WHERE ")?;
            self.visit_conditions(conditions)?;
        }

        Ok(())
    }

    /// A walk through a `DELETE` statement
    fn visit_delete(&mut self, delete: Delete<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        self.write("DELETE FROM ")?;
        self.visit_table(delete.table, true)?;

        if let Some(conditions) = delete.conditions {
            self.write(" WHERE ")?;
            self.visit_conditions(conditions)?;
        }

        Ok(())
    }

    /// A walk through an `ORDER BY` statement
    fn visit_ordering(&mut self, ordering: Ordering<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        let len = ordering.0.len();

        for (i, (value, ordering)) in ordering.0.into_iter().enumerate() {
            let direction = ordering.map(|dir| match dir {
                Order::Asc => " ASC",
                Order::Desc => " DESC",
            });

            self.visit_database_value(value)?;
            self.write(direction.unwrap_or(""))?;

            if i < (len - 1) {
                self.write(", ")?;
            }
        }

        Ok(())
    }

    /// A walk through a `GROUP BY` statement
    fn visit_grouping(&mut self, grouping: Grouping<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        let len = grouping.0.len();

        for (i, value) in grouping.0.into_iter().enumerate() {
            self.visit_database_value(value)?;

            if i < (len - 1) {
                self.write(", ")?;
            }
        }

        Ok(())
    }

    /// A helper for delimited identifiers, surrounded by the table
    /// information when necessary, ending with an alias.
    fn visit_column(&mut self, column: Column<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        match column.table {
            Some(table) => {
                self.visit_table(table, false)?;
                self.write(".")?;
                self.delimited_identifiers(&[column.name.as_ref()])?;
            }
            _ => self.delimited_identifiers(&[column.name.as_ref()])?,
        };

        if let Some(alias) = column.alias {
            self.write(" AS ")?;
            self.delimited_identifiers(&[alias.as_ref()])?;
        }

        Ok(())
    }

    /// A database table identifier
    fn visit_table(&mut self, table: Table<'a>, include_alias: bool) -> crate::Result<()> {
        match table.database {
            Some(database) => {
                self.delimited_identifiers(&[database.as_ref(), table.name.as_ref()])?
            }
            None => self.delimited_identifiers(&[table.name.as_ref()])?,
        };

        if include_alias {
            if let Some(alias) = table.alias {
                self.write(" AS ")?;
                self.delimited_identifiers(&[alias.as_ref()])?;
            }
        }

        Ok(())
    }

    /// A database value, the basic building block of all expressions
    fn visit_database_value(&mut self, value: DatabaseValue<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        match value {
            DatabaseValue::Parameterized(val) => self.visit_parameterized(val),
            DatabaseValue::Column(column) => self.visit_column(*column),
            DatabaseValue::Row(row) => self.visit_row(row),
            DatabaseValue::Select(select) => {
                self.surround_with("(", ")", |ref mut s| s.visit_select(select))
            }
            DatabaseValue::Function(function) => self.visit_function(function),
            DatabaseValue::Asterisk(Some(table)) => {
                self.visit_table(table, false)?;
                self.write(".*")
            }
            DatabaseValue::Asterisk(None) => self.write("*"),
        }
    }

    /// A list of values surrounded by parentheses, e.g. `(1,2,3)`
    fn visit_row(&mut self, row: Row<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        let len = row.values.len();

        self.write("(")?;
        for (i, value) in row.values.into_iter().enumerate() {
            self.visit_database_value(value)?;

            if i < (len - 1) {
                self.write(",")?;
            }
        }
        self.write(")")
    }

    /// The selected columns, separated by commas
    fn visit_columns(&mut self, columns: Vec<DatabaseValue<'a>>) -> crate::Result<()>
    where
        Self: Sized,
    {
        let len = columns.len();

        for (i, column) in columns.into_iter().enumerate() {
            self.visit_database_value(column)?;

            if i < (len - 1) {
                self.write(", ")?;
            }
        }

        Ok(())
    }

    /// The arguments of a function call, separated by commas
    fn visit_function_args(&mut self, exprs: Vec<DatabaseValue<'a>>) -> crate::Result<()>
    where
        Self: Sized,
    {
        let len = exprs.len();

        for (i, expr) in exprs.into_iter().enumerate() {
            self.visit_database_value(expr)?;

            if i < (len - 1) {
                self.write(",")?;
            }
        }

        Ok(())
    }

    /// A walk through a condition tree
    fn visit_conditions(&mut self, tree: ConditionTree<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        match tree {
            ConditionTree::And(expressions) => self.surround_with("(", ")", |ref mut s| {
                let len = expressions.len();

                for (i, expression) in expressions.into_iter().enumerate() {
                    s.visit_expression(expression)?;

                    if i < (len - 1) {
                        s.write(" AND ")?;
                    }
                }

                Ok(())
            }),
            ConditionTree::Or(expressions) => self.surround_with("(", ")", |ref mut s| {
                let len = expressions.len();

                for (i, expression) in expressions.into_iter().enumerate() {
                    s.visit_expression(expression)?;

                    if i < (len - 1) {
                        s.write(" OR ")?;
                    }
                }

                Ok(())
            }),
            ConditionTree::Not(expression) => self.surround_with("(", ")", |ref mut s| {
                s.write("NOT ")?;
                s.visit_expression(*expression)
            }),
            ConditionTree::Single(expression) => self.visit_expression(*expression),
            ConditionTree::NoCondition => self.write("1=1"),
            ConditionTree::NegativeCondition => self.write("1=0"),
        }
    }

    /// An expression inside a condition tree
    fn visit_expression(&mut self, expression: Expression<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        match expression {
            Expression::Value(value) => self.visit_database_value(value),
            Expression::ConditionTree(tree) => self.visit_conditions(tree),
            Expression::Compare(compare) => self.visit_compare(compare),
        }
    }

    /// A comparison expression
    fn visit_compare(&mut self, compare: Compare<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        match compare {
            Compare::Equals(left, right) => {
                self.visit_database_value(*left)?;
                self.write(" = ")?;
                self.visit_database_value(*right)
            }
            Compare::NotEquals(left, right) => {
                self.visit_database_value(*left)?;
                self.write(" <> ")?;
                self.visit_database_value(*right)
            }
            Compare::LessThan(left, right) => {
                self.visit_database_value(*left)?;
                self.write(" < ")?;
                self.visit_database_value(*right)
            }
            Compare::LessThanOrEquals(left, right) => {
                self.visit_database_value(*left)?;
                self.write(" <= ")?;
                self.visit_database_value(*right)
            }
            Compare::GreaterThan(left, right) => {
                self.visit_database_value(*left)?;
                self.write(" > ")?;
                self.visit_database_value(*right)
            }
            Compare::GreaterThanOrEquals(left, right) => {
                self.visit_database_value(*left)?;
                self.write(" >= ")?;
                self.visit_database_value(*right)
            }
            // An `IN` over an empty list can never match, a `NOT IN` always
            // does.
            Compare::In(left, right) => match (*left, *right) {
                (_, DatabaseValue::Row(ref row)) if row.is_empty() => self.write("1=0"),
                (left, right) => {
                    self.visit_database_value(left)?;
                    self.write(" IN ")?;
                    self.visit_database_value(right)
                }
            },
            Compare::NotIn(left, right) => match (*left, *right) {
                (_, DatabaseValue::Row(ref row)) if row.is_empty() => self.write("1=1"),
                (left, right) => {
                    self.visit_database_value(left)?;
                    self.write(" NOT IN ")?;
                    self.visit_database_value(right)
                }
            },
            Compare::Like(left, pattern) => {
                self.visit_database_value(*left)?;
                self.write(" LIKE ")?;
                self.add_parameter(ParameterizedValue::Text(
                    format!("{}{}{}", Self::C_WILDCARD, pattern, Self::C_WILDCARD).into(),
                ));
                self.parameter_substitution()
            }
            Compare::NotLike(left, pattern) => {
                self.visit_database_value(*left)?;
                self.write(" NOT LIKE ")?;
                self.add_parameter(ParameterizedValue::Text(
                    format!("{}{}{}", Self::C_WILDCARD, pattern, Self::C_WILDCARD).into(),
                ));
                self.parameter_substitution()
            }
            Compare::BeginsWith(left, pattern) => {
                self.visit_database_value(*left)?;
                self.write(" LIKE ")?;
                self.add_parameter(ParameterizedValue::Text(
                    format!("{}{}", pattern, Self::C_WILDCARD).into(),
                ));
                self.parameter_substitution()
            }
            Compare::NotBeginsWith(left, pattern) => {
                self.visit_database_value(*left)?;
                self.write(" NOT LIKE ")?;
                self.add_parameter(ParameterizedValue::Text(
                    format!("{}{}", pattern, Self::C_WILDCARD).into(),
                ));
                self.parameter_substitution()
            }
            Compare::EndsInto(left, pattern) => {
                self.visit_database_value(*left)?;
                self.write(" LIKE ")?;
                self.add_parameter(ParameterizedValue::Text(
                    format!("{}{}", Self::C_WILDCARD, pattern).into(),
                ));
                self.parameter_substitution()
            }
            Compare::NotEndsInto(left, pattern) => {
                self.visit_database_value(*left)?;
                self.write(" NOT LIKE ")?;
                self.add_parameter(ParameterizedValue::Text(
                    format!("{}{}", Self::C_WILDCARD, pattern).into(),
                ));
                self.parameter_substitution()
            }
            Compare::Null(column) => {
                self.visit_database_value(*column)?;
                self.write(" IS NULL")
            }
            Compare::NotNull(column) => {
                self.visit_database_value(*column)?;
                self.write(" IS NOT NULL")
            }
            Compare::Between(value, left, right) => {
                self.visit_database_value(*value)?;
                self.write(" BETWEEN ")?;
                self.visit_database_value(*left)?;
                self.write(" AND ")?;
                self.visit_database_value(*right)
            }
            Compare::NotBetween(value, left, right) => {
                self.visit_database_value(*value)?;
                self.write(" NOT BETWEEN ")?;
                self.visit_database_value(*left)?;
                self.write(" AND ")?;
                self.visit_database_value(*right)
            }
        }
    }

    /// A visit to a `JOIN` clause, including the prefixing space
    fn visit_join(&mut self, join: Join<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        match join {
            Join::Inner(data) => {
                self.write(" INNER JOIN ")?;
                self.visit_join_data(data)
            }
            Join::LeftOuter(data) => {
                self.write(" LEFT OUTER JOIN ")?;
                self.visit_join_data(data)
            }
        }
    }

    fn visit_join_data(&mut self, data: JoinData<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        self.visit_table(data.table, true)?;
        self.write(" ON ")?;
        self.visit_conditions(data.conditions)
    }

    /// A database function call
    fn visit_function(&mut self, fun: Function<'a>) -> crate::Result<()>
    where
        Self: Sized,
    {
        match fun.typ_ {
            FunctionType::RowNumber(fun_rownum) => {
                self.write("ROW_NUMBER() OVER")?;
                self.surround_with("(", ")", |ref mut s| {
                    let has_partitioning = !fun_rownum.partitioning.is_empty();

                    if has_partitioning {
                        s.write("PARTITION BY ")?;

                        let len = fun_rownum.partitioning.len();
                        for (i, partition) in fun_rownum.partitioning.into_iter().enumerate() {
                            s.visit_column(partition)?;

                            if i < (len - 1) {
                                s.write(", ")?;
                            }
                        }
                    }

                    if !fun_rownum.ordering.is_empty() {
                        if has_partitioning {
                            s.write(" ")?;
                        }

                        s.write("ORDER BY ")?;
                        s.visit_ordering(fun_rownum.ordering)?;
                    }

                    Ok(())
                })?;
            }
            FunctionType::Count(fun_count) => {
                self.write("COUNT")?;
                self.surround_with("(", ")", |ref mut s| {
                    s.visit_function_args(fun_count.exprs)
                })?;
            }
            FunctionType::AggregateToString(agg) => {
                self.visit_aggregate_to_string(*agg.value)?;
            }
            FunctionType::Average(fun_avg) => {
                self.write("AVG")?;
                self.surround_with("(", ")", |ref mut s| s.visit_column(fun_avg.column))?;
            }
            FunctionType::Sum(fun_sum) => {
                self.write("SUM")?;
                self.surround_with("(", ")", |ref mut s| {
                    s.visit_database_value(*fun_sum.expr)
                })?;
            }
            FunctionType::Lower(fun_lower) => {
                self.write("LOWER")?;
                self.surround_with("(", ")", |ref mut s| {
                    s.visit_database_value(*fun_lower.expression)
                })?;
            }
            FunctionType::Upper(fun_upper) => {
                self.write("UPPER")?;
                self.surround_with("(", ")", |ref mut s| {
                    s.visit_database_value(*fun_upper.expression)
                })?;
            }
            FunctionType::Minimum(fun_min) => {
                self.write("MIN")?;
                self.surround_with("(", ")", |ref mut s| s.visit_column(fun_min.column))?;
            }
            FunctionType::Maximum(fun_max) => {
                self.write("MAX")?;
                self.surround_with("(", ")", |ref mut s| s.visit_column(fun_max.column))?;
            }
            FunctionType::Coalesce(fun_coalesce) => {
                self.write("COALESCE")?;
                self.surround_with("(", ")", |ref mut s| {
                    s.visit_function_args(fun_coalesce.exprs)
                })?;
            }
        };

        if let Some(alias) = fun.alias {
            self.write(" AS ")?;
            self.delimited_identifiers(&[alias.as_ref()])?;
        }

        Ok(())
    }
}
