use std::future::Future;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

/// Store results that can come back empty.
pub trait StoreResult {
    fn is_empty_result(&self) -> bool;
}

impl<T> StoreResult for Vec<T> {
    fn is_empty_result(&self) -> bool {
        self.is_empty()
    }
}

impl<T> StoreResult for Option<T> {
    fn is_empty_result(&self) -> bool {
        self.is_none()
    }
}

/// Awaits `query` and returns its result unless it is empty or failed, in
/// which case the value produced by `fallback` is returned instead.
///
/// Errors are logged and never reach the caller.
pub async fn prefer_store<T, Q, F>(operation: &str, logger: &dyn Logger, query: Q, fallback: F) -> T
where
    T: StoreResult,
    Q: Future<Output = Result<T, RepositoryError>>,
    F: FnOnce() -> T,
{
    match query.await {
        Ok(result) if !result.is_empty_result() => result,
        Ok(_) => {
            logger.info(&format!(
                "{operation}: store returned nothing, trying sample catalog"
            ));
            fallback()
        }
        Err(err) => {
            logger.error(&format!(
                "{operation}: store unavailable ({err}), trying sample catalog"
            ));
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[tokio::test]
    async fn should_return_store_result_when_not_empty() {
        let logger = MockLog::new();

        let result = prefer_store(
            "test",
            &logger,
            async { Ok::<_, RepositoryError>(vec![1, 2]) },
            || vec![9],
        )
        .await;

        assert_eq!(result, vec![1, 2]);
    }

    #[tokio::test]
    async fn should_use_fallback_when_store_is_empty() {
        let mut logger = MockLog::new();
        logger.expect_info().times(1).returning(|_| ());

        let result = prefer_store(
            "test",
            &logger,
            async { Ok::<Vec<i32>, RepositoryError>(vec![]) },
            || vec![9],
        )
        .await;

        assert_eq!(result, vec![9]);
    }

    #[tokio::test]
    async fn should_log_error_and_use_fallback_when_store_fails() {
        let mut logger = MockLog::new();
        logger
            .expect_error()
            .withf(|message| message.contains("repository.database_error"))
            .times(1)
            .returning(|_| ());

        let result = prefer_store(
            "test",
            &logger,
            async { Err::<Option<&str>, _>(RepositoryError::DatabaseError) },
            || Some("fallback"),
        )
        .await;

        assert_eq!(result, Some("fallback"));
    }

    #[tokio::test]
    async fn should_treat_none_as_empty() {
        let mut logger = MockLog::new();
        logger
            .expect_info()
            .withf(|message| message.contains("trying sample catalog"))
            .times(1)
            .returning(|_| ());

        let result = prefer_store(
            "test",
            &logger,
            async { Ok::<Option<&str>, RepositoryError>(None) },
            || None,
        )
        .await;

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn should_not_call_fallback_when_store_has_rows() {
        let logger = MockLog::new();

        let result = prefer_store(
            "test",
            &logger,
            async { Ok::<_, RepositoryError>(Some(1)) },
            || panic!("fallback must not run"),
        )
        .await;

        assert_eq!(result, Some(1));
    }
}
