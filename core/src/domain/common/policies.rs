use uuid::Uuid;

use crate::domain::{authentication::value_objects::Identity, common::entities::app_errors::CoreError};

/// Turns a policy decision into a `Forbidden` error when it denies access.
pub fn ensure_policy(result: Result<bool, CoreError>, message: &str) -> Result<(), CoreError> {
    match result {
        Ok(true) => Ok(()),
        Ok(false) => Err(CoreError::Forbidden(message.to_string())),
        Err(e) => Err(e),
    }
}

pub fn can_moderate(identity: &Identity) -> Result<bool, CoreError> {
    Ok(identity.is_staff())
}

pub fn can_modify_owned(identity: &Identity, owner_id: Uuid) -> Result<bool, CoreError> {
    Ok(identity.id() == owner_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(is_staff: bool) -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            username: "ana".to_string(),
            is_staff,
        }
    }

    #[test]
    fn test_ensure_policy_denied_is_forbidden() {
        let result = ensure_policy(Ok(false), "staff only");
        assert_eq!(result, Err(CoreError::Forbidden("staff only".to_string())));
    }

    #[test]
    fn test_ensure_policy_propagates_errors() {
        let result = ensure_policy(Err(CoreError::NotFound), "staff only");
        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[test]
    fn test_only_staff_can_moderate() {
        assert_eq!(can_moderate(&identity(true)), Ok(true));
        assert_eq!(can_moderate(&identity(false)), Ok(false));
    }

    #[test]
    fn test_owner_check() {
        let caller = identity(false);
        assert_eq!(can_modify_owned(&caller, caller.user_id), Ok(true));
        assert_eq!(can_modify_owned(&caller, Uuid::new_v4()), Ok(false));
    }
}
