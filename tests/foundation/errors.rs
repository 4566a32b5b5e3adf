//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error kinds.

use itemloom_foundation::{Error, ErrorContext, ErrorKind};

// =============================================================================
// Construction and kinds
// =============================================================================

#[test]
fn evaluation_errors_carry_their_message() {
    let err = Error::evaluation("division by zero");
    assert!(matches!(err.kind, ErrorKind::Evaluation(_)));
    assert!(err.to_string().contains("division by zero"));
}

#[test]
fn undefined_variable_names_the_variable() {
    let err = Error::undefined_variable("viewer");
    assert!(err.to_string().contains("viewer"));
}

#[test]
fn property_context_layers_over_expression_context() {
    let err = Error::undefined_variable("viewer_rank")
        .with_context(ErrorContext::new().with_expression("viewer_rank"))
        .for_property("display-name");

    let context = err.context.expect("context should be attached");
    assert_eq!(context.property.as_deref(), Some("display-name"));
    assert_eq!(context.expression.as_deref(), Some("viewer_rank"));
}

// =============================================================================
// Context
// =============================================================================

#[test]
fn context_attaches_property_and_expression() {
    let err = Error::evaluation("boom").with_context(
        ErrorContext::new()
            .with_property("lore")
            .with_expression("viewer_rank"),
    );

    let context = err.context.expect("context should be attached");
    assert_eq!(context.property.as_deref(), Some("lore"));
    assert_eq!(context.expression.as_deref(), Some("viewer_rank"));
}

#[test]
fn context_renders_what_it_has() {
    let rendered = ErrorContext::new().with_property("amount").to_string();
    assert!(rendered.contains("amount"));
}
