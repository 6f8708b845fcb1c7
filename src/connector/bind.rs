use crate::ast::ParameterizedValue;
use sqlx::Database;

/// Binds a `ParameterizedValue` into a sqlx query, optionally guided by the
/// parameter type the prepared statement expects.
pub(crate) trait Bind<'a, DB>
where
    DB: Database,
{
    fn bind_value(
        self,
        value: ParameterizedValue<'a>,
        type_info: Option<&DB::TypeInfo>,
    ) -> crate::Result<Self>
    where
        Self: Sized;
}
