/// Numeric helpers.
///
/// This module provides the remainder routine used during evaluation. The
/// formula language computes `%` over operands truncated to integers rather
/// than with floating-point `fmod`, and the conversion edge cases live here.
pub mod num;
