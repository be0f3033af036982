//! Fields that validate on write.

use super::FieldError;
use std::fmt;
use std::sync::Arc;

type Validator<T> = Arc<dyn Fn(&T) -> Result<(), String> + Send + Sync>;

/// A named slot whose writes pass through a validator.
///
/// Setting and reading are deliberately separate operations:
/// [`set`](ValidatedField::set) changes state and reports success or failure,
/// [`get`](ValidatedField::get) answers without side effects. A rejected
/// write keeps whatever value was there before.
///
/// # Examples
///
/// ```rust
/// use reprise_core::field::{ValidatedField, validators};
///
/// let mut email = ValidatedField::new("email", validators::email());
///
/// assert!(email.set("han@".to_string()).is_err());
/// assert_eq!(email.get(), None);
///
/// email.set("han@g.co".to_string()).unwrap();
/// assert_eq!(email.get().map(String::as_str), Some("han@g.co"));
/// ```
#[derive(Clone)]
pub struct ValidatedField<T> {
    name: &'static str,
    validate: Validator<T>,
    value: Option<T>,
}

impl<T> ValidatedField<T> {
    /// Create an empty field named `name` guarded by `validate`.
    ///
    /// The validator returns `Err(reason)` to reject a candidate value.
    pub fn new<V>(name: &'static str, validate: V) -> Self
    where
        V: Fn(&T) -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            name,
            validate: Arc::new(validate),
            value: None,
        }
    }

    /// The field's name, used in validation errors.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current value, if one has been accepted.
    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Validate `value` and store it on success.
    ///
    /// On rejection the previous value is untouched and the error carries
    /// the validator's reason.
    pub fn set(&mut self, value: T) -> Result<(), FieldError> {
        (self.validate)(&value).map_err(|reason| FieldError::Invalid {
            field: self.name.to_string(),
            reason,
        })?;
        self.value = Some(value);
        Ok(())
    }

    /// Remove and return the current value.
    pub fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T: fmt::Debug> fmt::Debug for ValidatedField<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

/// Ready-made validators for common field shapes.
pub mod validators {
    use regex::Regex;
    use std::sync::OnceLock;

    static EMAIL: OnceLock<Regex> = OnceLock::new();

    /// Accepts strings shaped like an email address.
    pub fn email() -> impl Fn(&String) -> Result<(), String> + Send + Sync + 'static {
        |candidate: &String| {
            let pattern = EMAIL.get_or_init(|| {
                Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static pattern compiles")
            });
            if pattern.is_match(candidate) {
                Ok(())
            } else {
                Err(format!("{candidate:?} is not a valid email address"))
            }
        }
    }

    /// Rejects empty and whitespace-only strings.
    pub fn non_empty() -> impl Fn(&String) -> Result<(), String> + Send + Sync + 'static {
        |candidate: &String| {
            if candidate.trim().is_empty() {
                Err("value must not be empty".to_string())
            } else {
                Ok(())
            }
        }
    }
}
