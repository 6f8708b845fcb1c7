use std::borrow::Cow;

/// An item that can be aliased with `AS`.
pub trait Aliasable<'a> {
    type Target;

    /// Alias table or column for usage elsewhere in the query.
    fn alias<T>(self, alias: T) -> Self::Target
    where
        T: Into<Cow<'a, str>>;
}
