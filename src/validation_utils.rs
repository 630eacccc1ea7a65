use std::fmt;

use crate::types::ValidationResult;

pub fn _chain<T>(
    result: ValidationResult<T>,
    warnings: &mut Vec<String>,
    errors: &mut Vec<String>,
) {
    match result {
        ValidationResult::Valid(_) => {}
        ValidationResult::Warnings(_, warns) => {
            warnings.extend(warns);
        }
        ValidationResult::Invalid(warns, errs) => {
            warnings.extend(warns);
            errors.extend(errs);
        }
    }
}

pub fn _return(warnings: Vec<String>, errors: Vec<String>) -> ValidationResult {
    match (warnings.is_empty(), errors.is_empty()) {
        (true, true) => ValidationResult::Valid(()),
        (false, true) => ValidationResult::Warnings((), warnings),
        _ => ValidationResult::Invalid(warnings, errors),
    }
}

pub fn validate_ascending<V: PartialOrd + fmt::Display>(values: &[V]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    for i in 1..values.len() {
        if values[i] < values[i - 1] {
            errors.push(format!(
                "values are not in ascending order: {} > {} at index {}",
                values[i - 1],
                values[i],
                i
            ));
        }
    }

    _return(warnings, errors)
}

pub fn validate_finite(values: &[f64]) -> ValidationResult {
    let warnings = Vec::new();
    let mut errors = Vec::new();

    for (i, &value) in values.iter().enumerate() {
        if !value.is_finite() {
            errors.push(format!(
                "value at index {} is not a finite number: {}",
                i, value
            ));
        }
    }

    _return(warnings, errors)
}
