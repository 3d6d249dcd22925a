//! Type inference for assigned values.
//!
//! Purely textual: the value is never parsed. A dotted numeral such as
//! `1.2.3` still counts as floating point because only digit-hood after
//! stripping dots is checked. Only ASCII digits count, so `²` or `١٢` are
//! not numerals here.

use crate::ir::TargetType;

/// Infer the declared type for the right-hand side of an assignment.
pub fn infer(value: &str) -> TargetType {
    if is_numeric(value) {
        if value.contains('.') {
            TargetType::FloatingPoint
        } else {
            TargetType::Integer
        }
    } else if value.starts_with('"') || value.starts_with('\'') {
        TargetType::StringType
    } else if value.contains(['+', '-', '*', '/']) {
        TargetType::Inferred
    } else {
        TargetType::Unresolved
    }
}

/// Infer the type read by an input binding from its right-hand side.
///
/// A `float` conversion anywhere in the binding selects floating point;
/// everything else reads an integer.
pub fn infer_input(hint: &str) -> TargetType {
    if hint.contains("float") {
        TargetType::FloatingPoint
    } else {
        TargetType::Integer
    }
}

fn is_numeric(value: &str) -> bool {
    let mut digits = value.chars().filter(|&c| c != '.').peekable();
    digits.peek().is_some() && digits.all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer() {
        assert_eq!(infer("42"), TargetType::Integer);
        assert_eq!(infer("0"), TargetType::Integer);
    }

    #[test]
    fn test_floating_point() {
        assert_eq!(infer("3.14"), TargetType::FloatingPoint);
        assert_eq!(infer(".5"), TargetType::FloatingPoint);
    }

    #[test]
    fn test_dotted_numeral_is_still_numeric() {
        assert_eq!(infer("1.2.3"), TargetType::FloatingPoint);
    }

    #[test]
    fn test_bare_dots_are_not_numeric() {
        assert_eq!(infer("."), TargetType::Unresolved);
        assert_eq!(infer(""), TargetType::Unresolved);
    }

    #[test]
    fn test_non_ascii_digits_are_not_numeric() {
        assert_eq!(infer("²"), TargetType::Unresolved);
        assert_eq!(infer("１２"), TargetType::Unresolved);
        assert_eq!(infer("١٢.5"), TargetType::Unresolved);
    }

    #[test]
    fn test_strings() {
        assert_eq!(infer("\"hello\""), TargetType::StringType);
        assert_eq!(infer("'hello'"), TargetType::StringType);
        // Quote check runs before the operator check.
        assert_eq!(infer("\"a\" + b"), TargetType::StringType);
    }

    #[test]
    fn test_arithmetic_is_inferred() {
        assert_eq!(infer("a + b"), TargetType::Inferred);
        assert_eq!(infer("x*2"), TargetType::Inferred);
        assert_eq!(infer("-5"), TargetType::Inferred);
        assert_eq!(infer("total / count"), TargetType::Inferred);
    }

    #[test]
    fn test_unresolved() {
        assert_eq!(infer("other"), TargetType::Unresolved);
        assert_eq!(infer("[1, 2]"), TargetType::Unresolved);
        assert_eq!(infer("True"), TargetType::Unresolved);
    }

    #[test]
    fn test_input_hint() {
        assert_eq!(infer_input("float(input(\"x\"))"), TargetType::FloatingPoint);
        assert_eq!(infer_input("int(input(\"x\"))"), TargetType::Integer);
        assert_eq!(infer_input("input()"), TargetType::Integer);
    }
}
