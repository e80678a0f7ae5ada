use async_graphql::*;

use crate::errors::{CoreError, CoreErrorKind};

/// Convert a core error into a GraphQL error with `code` and lookup fields
/// in the extensions. Logged here, at the API boundary.
pub fn core_error_to_graphql_error(error: CoreError) -> Error {
    match error.kind() {
        CoreErrorKind::NotFound | CoreErrorKind::AlreadyExists => {
            tracing::warn!("GraphQL error: {}", error);
        }
        CoreErrorKind::StorageUnavailable => {
            match std::error::Error::source(&error) {
                Some(source) => tracing::error!("GraphQL error: {} ({})", error, source),
                None => tracing::error!("GraphQL error: {}", error),
            }
        }
    }

    let code = error.kind().code();
    let fields = error.fields().cloned();

    Error::new(error.message()).extend_with(|_, e| {
        e.set("code", code);
        if let Some(fields) = fields {
            for (key, value) in fields {
                e.set(key, value);
            }
        }
    })
}

/// Extension trait so resolvers can write `.gql()?`.
pub trait GqlResultExt<T> {
    fn gql(self) -> Result<T>;
}

impl<T> GqlResultExt<T> for std::result::Result<T, CoreError> {
    fn gql(self) -> Result<T> {
        self.map_err(core_error_to_graphql_error)
    }
}
