/// Outcome of validating a value against its structural invariants.
///
/// Warnings describe conditions that do not break evaluation (for example a
/// gap between two pieces), errors describe conditions that do.
///
/// # Examples
///
/// ```rust
/// use fcm_membership::types::ValidationResult;
///
/// let result: ValidationResult = ValidationResult::Warnings((), vec!["gap".to_string()]);
/// assert!(result.is_valid());
/// assert_eq!(result.warnings(), &["gap".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T = ()> {
    /// No issues found.
    Valid(T),
    /// Usable, with diagnostics.
    Warnings(T, Vec<String>),
    /// Not usable: `(warnings, errors)`.
    Invalid(Vec<String>, Vec<String>),
}

impl<T> ValidationResult<T> {
    /// True unless the result is `Invalid`.
    pub fn is_valid(&self) -> bool {
        !matches!(self, ValidationResult::Invalid(_, _))
    }

    /// Warnings attached to the result, if any.
    pub fn warnings(&self) -> &[String] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Warnings(_, warnings) | ValidationResult::Invalid(warnings, _) => {
                warnings
            }
        }
    }

    /// Errors attached to the result, if any.
    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Invalid(_, errors) => errors,
            _ => &[],
        }
    }
}

/// Types that can check their own invariants.
pub trait Validate {
    fn validate(&self) -> ValidationResult;
}

/// A result type that can contain warnings alongside the successful result.
///
/// Used by the breakpoint parser to report points it dropped without
/// failing the whole parse.
///
/// # Type Parameters
///
/// * `T` - The success result type
/// * `W` - The warning type (typically `String` for warning messages)
///
/// # Examples
///
/// ```rust
/// use fcm_membership::types::WithWarnings;
///
/// let result = WithWarnings::Warning("parsed".to_string(), vec!["dropped point 1;1".to_string()]);
/// assert!(result.is_warning());
/// assert_eq!(result.clone().unwrap(), "parsed");
///
/// let warnings = result.warnings();
/// assert_eq!(warnings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum WithWarnings<T, W> {
    /// Successful result without warnings
    Ok(T),
    /// Successful result with warnings
    Warning(T, Vec<W>),
}

impl<T, W> WithWarnings<T, W> {
    /// Wraps `data`, choosing the variant by whether `warnings` is empty.
    pub fn new(data: T, warnings: Vec<W>) -> Self {
        if warnings.is_empty() {
            WithWarnings::Ok(data)
        } else {
            WithWarnings::Warning(data, warnings)
        }
    }

    /// Checks if the result is successful without warnings.
    pub fn is_ok(&self) -> bool {
        matches!(self, WithWarnings::Ok(_))
    }

    /// Checks if the result has warnings.
    pub fn is_warning(&self) -> bool {
        matches!(self, WithWarnings::Warning(_, _))
    }

    /// Extracts the result value, discarding any warnings.
    pub fn unwrap(self) -> T {
        match self {
            WithWarnings::Ok(data) => data,
            WithWarnings::Warning(data, _) => data,
        }
    }

    /// Extracts the warnings, discarding the result value.
    ///
    /// Returns an empty vector if there were no warnings.
    pub fn warnings(self) -> Vec<W> {
        match self {
            WithWarnings::Ok(_) => Vec::new(),
            WithWarnings::Warning(_, warnings) => warnings,
        }
    }
}

impl<T, W> From<WithWarnings<T, W>> for (T, Vec<W>) {
    /// Converts `WithWarnings` into a tuple of (result, warnings).
    fn from(value: WithWarnings<T, W>) -> Self {
        match value {
            WithWarnings::Ok(data) => (data, Vec::new()),
            WithWarnings::Warning(data, warnings) => (data, warnings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_warnings_new_picks_variant() {
        let clean: WithWarnings<u8, String> = WithWarnings::new(1, vec![]);
        assert!(clean.is_ok());

        let noisy = WithWarnings::new(1, vec!["w".to_string()]);
        assert!(noisy.is_warning());

        let (data, warnings) = noisy.into();
        assert_eq!(data, 1);
        assert_eq!(warnings, vec!["w".to_string()]);
    }

    #[test]
    fn test_validation_result_accessors() {
        let invalid: ValidationResult =
            ValidationResult::Invalid(vec!["w".to_string()], vec!["e".to_string()]);
        assert!(!invalid.is_valid());
        assert_eq!(invalid.warnings(), &["w".to_string()]);
        assert_eq!(invalid.errors(), &["e".to_string()]);

        let valid: ValidationResult = ValidationResult::Valid(());
        assert!(valid.is_valid());
        assert!(valid.warnings().is_empty());
        assert!(valid.errors().is_empty());
    }
}
