use crate::ast::{ParameterizedValue, Params};
use std::{future::Future, time::Instant};

/// Times the query and emits a tracing event with the SQL, the parameters
/// and the outcome.
pub(crate) async fn query<'a, F, T, U>(
    tag: &'static str,
    query: &str,
    params: Vec<ParameterizedValue<'a>>,
    f: F,
) -> crate::Result<T>
where
    F: FnOnce(Vec<ParameterizedValue<'a>>) -> U,
    U: Future<Output = crate::Result<T>>,
{
    let start = Instant::now();
    let formatted_params = Params(&params).to_string();

    let res = f(params).await;

    let result = match res {
        Ok(_) => "success",
        Err(_) => "error",
    };

    tracing::debug!(
        target: "flex_sql.query",
        query,
        params = %formatted_params,
        duration_ms = start.elapsed().as_millis() as u64,
        result,
        tag,
    );

    res
}
