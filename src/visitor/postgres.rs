use crate::{ast::*, visitor::Visitor};
use std::fmt::{self, Write};

/// A visitor for generating queries for a PostgreSQL database. Parameters
/// are numbered, starting from `$1`.
pub struct Postgres<'a> {
    query: String,
    parameters: Vec<ParameterizedValue<'a>>,
}

impl<'a> Visitor<'a> for Postgres<'a> {
    const C_BACKTICK: &'static str = "\"";
    const C_WILDCARD: &'static str = "%";

    fn build<Q>(query: Q) -> crate::Result<(String, Vec<ParameterizedValue<'a>>)>
    where
        Q: Into<Query<'a>>,
    {
        let mut postgres = Postgres {
            query: String::with_capacity(4096),
            parameters: Vec::with_capacity(128),
        };

        postgres.visit_query(query.into())?;

        Ok((postgres.query, postgres.parameters))
    }

    fn write<D: fmt::Display>(&mut self, s: D) -> crate::Result<()> {
        write!(&mut self.query, "{s}")?;
        Ok(())
    }

    fn add_parameter(&mut self, value: ParameterizedValue<'a>) {
        self.parameters.push(value);
    }

    fn parameter_substitution(&mut self) -> crate::Result<()> {
        self.write("$")?;
        self.write(self.parameters.len())
    }

    fn visit_limit_and_offset(
        &mut self,
        limit: Option<usize>,
        offset: Option<usize>,
    ) -> crate::Result<()> {
        match (limit, offset) {
            (Some(limit), Some(offset)) => {
                self.write(" LIMIT ")?;
                self.visit_parameterized(ParameterizedValue::from(limit))?;

                self.write(" OFFSET ")?;
                self.visit_parameterized(ParameterizedValue::from(offset))
            }
            (None, Some(offset)) => {
                self.write(" OFFSET ")?;
                self.visit_parameterized(ParameterizedValue::from(offset))
            }
            (Some(limit), None) => {
                self.write(" LIMIT ")?;
                self.visit_parameterized(ParameterizedValue::from(limit))
            }
            (None, None) => Ok(()),
        }
    }

    fn visit_insert(&mut self, insert: Insert<'a>) -> crate::Result<()> {
        self.write("INSERT INTO ")?;
        self.visit_table(insert.table, true)?;

        if insert.values.is_empty() {
            self.write(" DEFAULT VALUES")?;
        } else {
            let columns = insert.columns.len();

            self.write(" (")?;
            for (i, c) in insert.columns.into_iter().enumerate() {
                self.visit_column(Column::new(c.name))?;

                if i < (columns - 1) {
                    self.write(",")?;
                }
            }
            self.write(")")?;

            self.write(" VALUES ")?;
            let values = insert.values.len();

            for (i, row) in insert.values.into_iter().enumerate() {
                self.visit_row(row)?;

                if i < (values - 1) {
                    self.write(", ")?;
                }
            }
        }

        if let Some(OnConflict::DoNothing) = insert.on_conflict {
            self.write(" ON CONFLICT DO NOTHING")?;
        }

        if let Some(returning) = insert.returning {
            if !returning.is_empty() {
                let len = returning.len();

                self.write(" RETURNING ")?;
                for (i, column) in returning.into_iter().enumerate() {
                    self.visit_column(Column::new(column.name))?;

                    if i < (len - 1) {
                        self.write(", ")?;
                    }
                }
            }
        }

        Ok(())
    }

    fn visit_aggregate_to_string(&mut self, value: DatabaseValue<'a>) -> crate::Result<()> {
        // Assuming the grouped values are strings, a `text[]` aggregate
        // flattened into a comma-separated string.
        self.write("ARRAY_TO_STRING")?;
        self.surround_with("(", ")", |ref mut s| {
            s.write("ARRAY_AGG")?;
            s.surround_with("(", ")", |ref mut s| s.visit_database_value(value))?;
            s.write(",','")
        })
    }
}
