//! Internal helpers shared by the task and standings services.

use crate::domain::Error;
use crate::domain::ports::{
    AchievementRepositoryError, IdentityProviderError, TaskRepositoryError,
};

pub(crate) fn map_task_repository_error(error: TaskRepositoryError) -> Error {
    match error {
        TaskRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("task repository unavailable: {message}"))
        }
        TaskRepositoryError::Query { message } => {
            Error::internal(format!("task repository error: {message}"))
        }
    }
}

pub(crate) fn map_achievement_repository_error(error: AchievementRepositoryError) -> Error {
    match error {
        AchievementRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("achievement repository unavailable: {message}"))
        }
        AchievementRepositoryError::Query { message } => {
            Error::internal(format!("achievement repository error: {message}"))
        }
    }
}

pub(crate) fn map_identity_provider_error(error: IdentityProviderError) -> Error {
    match error {
        IdentityProviderError::Connection { message } => {
            Error::service_unavailable(format!("identity provider unavailable: {message}"))
        }
        IdentityProviderError::Query { message } => {
            Error::internal(format!("identity provider error: {message}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ErrorCode;

    #[rstest]
    #[case(TaskRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(TaskRepositoryError::query("bad row"), ErrorCode::InternalError)]
    fn task_errors_map_to_codes(#[case] error: TaskRepositoryError, #[case] code: ErrorCode) {
        assert_eq!(map_task_repository_error(error).code(), code);
    }

    #[rstest]
    #[case(AchievementRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(AchievementRepositoryError::query("bad row"), ErrorCode::InternalError)]
    fn achievement_errors_map_to_codes(
        #[case] error: AchievementRepositoryError,
        #[case] code: ErrorCode,
    ) {
        assert_eq!(map_achievement_repository_error(error).code(), code);
    }

    #[rstest]
    fn identity_connection_error_keeps_message() {
        let mapped = map_identity_provider_error(IdentityProviderError::connection("ldap timeout"));
        assert_eq!(mapped.code(), ErrorCode::ServiceUnavailable);
        assert!(mapped.message().contains("ldap timeout"));
    }
}
