//! An abstract syntax tree for SQL queries.
//!
//! The ast module handles everything related to building plain SQL queries.
//! The tree is generic over the target database; rendering it into SQL text
//! happens in the [visitor](../visitor/index.html) module.

mod aliasable;
mod column;
mod compare;
mod conditions;
mod conjunctive;
mod delete;
mod expression;
mod function;
mod grouping;
mod insert;
mod join;
mod ordering;
mod query;
mod row;
mod select;
mod table;
mod update;
mod values;

pub use aliasable::Aliasable;
pub use column::Column;
pub use compare::{Comparable, Compare};
pub use conditions::ConditionTree;
pub use conjunctive::Conjunctive;
pub use delete::Delete;
pub use expression::Expression;
pub use function::*;
pub use grouping::{Grouping, IntoGroupByDefinition};
pub use insert::{Insert, MultiRowInsert, OnConflict, SingleRowInsert};
pub use join::{Join, JoinData, Joinable};
pub use ordering::{IntoOrderDefinition, Order, OrderDefinition, Orderable, Ordering};
pub use query::Query;
pub use row::Row;
pub use select::Select;
pub use table::Table;
pub use update::Update;
pub use values::{asterisk, DatabaseValue, ParameterizedValue, Params};
