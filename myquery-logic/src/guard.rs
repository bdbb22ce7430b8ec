//! The null-argument guard used as the precondition of every operation.

use crate::error::{self, Error};

/// Validate that a nullable value is present.
///
/// On success the present value is handed back, so the caller can continue
/// with it directly:
///
/// ```
/// use myquery_logic::CheckArgument;
///
/// let name = Some("Max");
/// assert_eq!(name.check_argument("name"), Ok("Max"));
///
/// let missing: Option<&str> = None;
/// let error = missing.check_argument("name").unwrap_err();
/// assert_eq!(error.to_string(), "Value cannot be null. (Parameter 'name')");
/// ```
pub trait CheckArgument {
    type Value;

    fn check_argument(self, name: &str) -> error::Result<Self::Value>;
}

impl<T> CheckArgument for Option<T> {
    type Value = T;

    #[inline]
    fn check_argument(self, name: &str) -> error::Result<T> {
        match self {
            Some(value) => Ok(value),
            None => {
                tracing::debug!(parameter = name, "null argument rejected");
                Err(Error::null_argument(name))
            }
        }
    }
}

/// Free function form of [`CheckArgument::check_argument`].
#[inline]
pub fn check_argument<T>(value: Option<T>, name: &str) -> error::Result<T> {
    value.check_argument(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_reference_is_rejected() {
        let name: Option<String> = None;
        assert!(matches!(
            name.check_argument("name"),
            Err(Error::NullArgument { .. })
        ));
    }

    #[test]
    fn test_string_reference_is_accepted() {
        let name = Some("Max".to_string());
        assert_eq!(name.check_argument("name"), Ok("Max".to_string()));
    }

    #[test]
    fn test_message_contains_test_name() {
        let test_name: Option<&dyn std::any::Any> = None;
        let err = test_name.check_argument("testName").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value cannot be null. (Parameter 'testName')"
        );
        assert_eq!(err.parameter(), "testName");
    }

    #[test]
    fn test_message_contains_last_name() {
        let err = check_argument(None::<u32>, "lastName").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Value cannot be null. (Parameter 'lastName')"
        );
    }

    #[test]
    fn test_name_is_never_validated() {
        assert_eq!(check_argument(Some(1), ""), Ok(1));
        insta::assert_snapshot!(
            check_argument(None::<u8>, "").unwrap_err(),
            @"Value cannot be null. (Parameter '')"
        );
    }
}
