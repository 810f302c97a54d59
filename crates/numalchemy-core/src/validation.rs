use crate::constraints::{ConstraintSet, NumericConstraints};
use crate::error::{Error, Result};

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location and hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    pub hint: Option<String>,
}

impl ValidationIssue {
    /// Create a new validation issue.
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint,
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Collapse the report into an error when it carries any error issue.
    pub fn into_result(self) -> Result<Vec<ValidationIssue>> {
        if self.errors.is_empty() {
            return Ok(self.warnings);
        }
        let messages = self
            .errors
            .iter()
            .map(|issue| format!("{}: {}", issue.path, issue.message))
            .collect::<Vec<_>>()
            .join("; ");
        Err(Error::InvalidConstraints(messages))
    }
}

/// Validate the caller contract of a constraint set without generating.
///
/// This checks:
/// - exclusive and inclusive bounds supplied for the same side
/// - negative digit limits
/// - digit limits on non-decimal kinds
/// - non-finite float bounds
pub fn validate_constraints(constraints: &NumericConstraints) -> ValidationReport {
    let mut report = ValidationReport::default();

    match constraints {
        NumericConstraints::Integer(set) => {
            validate_bounds(set, &mut report);
            validate_digit_limits_unused(set, &mut report);
        }
        NumericConstraints::Float(set) => {
            validate_bounds(set, &mut report);
            validate_digit_limits_unused(set, &mut report);
            validate_finite(set, &mut report);
        }
        NumericConstraints::Decimal(set) => {
            validate_bounds(set, &mut report);
            validate_digit_limits(set, &mut report);
        }
    }

    report
}

fn validate_bounds<T>(set: &ConstraintSet<T>, report: &mut ValidationReport) {
    if set.lt.is_some() && set.le.is_some() {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "conflicting_upper_bound",
            "/lt",
            "both lt and le are set; le takes precedence",
            Some("drop one of the upper bounds".to_string()),
        ));
    }
    if set.gt.is_some() && set.ge.is_some() {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "conflicting_lower_bound",
            "/gt",
            "both gt and ge are set; ge takes precedence",
            Some("drop one of the lower bounds".to_string()),
        ));
    }
}

fn validate_digit_limits<T>(set: &ConstraintSet<T>, report: &mut ValidationReport) {
    if let Some(max_digits) = set.max_digits
        && max_digits < 0
    {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "invalid_max_digits",
            "/max_digits",
            format!("max_digits must not be negative (got {max_digits})"),
            None,
        ));
    }
    if let Some(decimal_places) = set.decimal_places
        && decimal_places < 0
    {
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "invalid_decimal_places",
            "/decimal_places",
            format!("decimal_places must not be negative (got {decimal_places})"),
            None,
        ));
    }
}

fn validate_digit_limits_unused<T>(set: &ConstraintSet<T>, report: &mut ValidationReport) {
    if set.max_digits.is_some() || set.decimal_places.is_some() {
        report.push_warning(ValidationIssue::new(
            IssueSeverity::Warning,
            "ignored_digit_limits",
            "/max_digits",
            "max_digits and decimal_places only apply to decimals",
            None,
        ));
    }
}

fn validate_finite(set: &ConstraintSet<f64>, report: &mut ValidationReport) {
    let fields = [
        ("lt", set.lt),
        ("le", set.le),
        ("gt", set.gt),
        ("ge", set.ge),
        ("multiple_of", set.multiple_of),
    ];
    for (name, value) in fields {
        if let Some(value) = value
            && !value.is_finite()
        {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "non_finite_bound",
                format!("/{name}"),
                format!("{name} must be a finite number (got {value})"),
                None,
            ));
        }
    }
}
