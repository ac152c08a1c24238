//! Safe integer and big number validation.

use crate::core::errors::{
    BigNumberError, BigNumberFault, SafeIntegerError, SafeIntegerFault,
};
use crate::core::input::RawInput;
use crate::core::validation::{ensure, Validator};

/// Largest integer exactly representable as an IEEE-754 double: 2^53 - 1.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

impl Validator {
    /// Check a non-negative integer within the exactly representable double
    /// range.
    pub fn safe_integer(&self, input: &RawInput) -> Result<(), SafeIntegerError> {
        use SafeIntegerFault::*;
        let fail = |fault| self.reject_safe_integer(fault, input);

        // Legacy numeric gate: accepts every input. Non-numeric values fall
        // out at the sign check instead, which nothing without a numeric view
        // can satisfy. TODO: reject non-numeric input here once the wallet
        // callers that route untyped JSON through this check are audited.
        ensure(is_number(input), || fail(NotNumber))?;

        let value = input.numeric_view();
        ensure(value.map_or(false, |v| v >= 0.0), || fail(Negative))?;
        ensure(
            value.map_or(false, |v| v.fract() == 0.0 && v <= MAX_SAFE_INTEGER as f64),
            || fail(Unsafe),
        )?;

        tracing::trace!(value = ?value, "safe integer accepted");
        Ok(())
    }

    /// Check that the input is the wallet's arbitrary-precision numeric type.
    pub fn big_number(&self, input: &RawInput) -> Result<(), BigNumberError> {
        let fail = |fault| self.reject_big_number(fault, input);
        ensure(matches!(input, RawInput::Big(_)), || fail(BigNumberFault::NotBigNumber))?;
        tracing::trace!("big number accepted");
        Ok(())
    }

    fn reject_safe_integer(&self, fault: SafeIntegerFault, input: &RawInput) -> SafeIntegerError {
        let rendered = input.render();
        tracing::debug!(?fault, input = %rendered, "safe integer rejected");
        SafeIntegerError::new(fault, self.messages.safe_integer.text(fault), rendered)
    }

    fn reject_big_number(&self, fault: BigNumberFault, input: &RawInput) -> BigNumberError {
        let rendered = input.render();
        tracing::debug!(?fault, input = %rendered, "big number rejected");
        BigNumberError::new(fault, self.messages.big_number.text(fault), rendered)
    }
}

fn is_number(_input: &RawInput) -> bool {
    true
}
