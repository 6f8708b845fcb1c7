use crate::{ast::*, visitor::Visitor};
use std::fmt::{self, Write};

/// A visitor for generating queries for a MySQL database.
pub struct Mysql<'a> {
    query: String,
    parameters: Vec<ParameterizedValue<'a>>,
}

impl<'a> Visitor<'a> for Mysql<'a> {
    const C_BACKTICK: &'static str = "`";
    const C_WILDCARD: &'static str = "%";

    fn build<Q>(query: Q) -> crate::Result<(String, Vec<ParameterizedValue<'a>>)>
    where
        Q: Into<Query<'a>>,
    {
        let mut mysql = Mysql {
            query: String::with_capacity(4096),
            parameters: Vec::with_capacity(128),
        };

        mysql.visit_query(query.into())?;

        Ok((mysql.query, mysql.parameters))
    }

    fn write<D: fmt::Display>(&mut self, s: D) -> crate::Result<()> {
        write!(&mut self.query, "{s}")?;
        Ok(())
    }

    fn add_parameter(&mut self, value: ParameterizedValue<'a>) {
        self.parameters.push(value);
    }

    fn parameter_substitution(&mut self) -> crate::Result<()> {
        self.write("?")
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
                // MySQL does not allow an `OFFSET` without a `LIMIT`.
                self.write(" LIMIT ")?;
                self.visit_parameterized(ParameterizedValue::from(i64::MAX))?;

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
        self.write("INSERT")?;

        if let Some(OnConflict::DoNothing) = insert.on_conflict {
            self.write(" IGNORE")?;
        }

        self.write(" INTO ")?;
        self.visit_table(insert.table, true)?;

        if insert.values.is_empty() {
            self.write(" () VALUES ()")?;
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

        // MySQL has no `RETURNING`; the last inserted id is available in the
        // result set of the executed insert instead.
        Ok(())
    }

    fn visit_aggregate_to_string(&mut self, value: DatabaseValue<'a>) -> crate::Result<()> {
        self.write("GROUP_CONCAT")?;
        self.surround_with("(", ")", |ref mut s| s.visit_database_value(value))
    }
}
