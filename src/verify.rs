//! CPU reference check of the device output.

use crate::error::{HarnessError, Result};

/// Compare the device output against `bias[i] + input[i]` element-wise.
///
/// Fails at the first index whose absolute deviation exceeds `tolerance`,
/// carrying the index and both values. The three slices must have equal
/// lengths.
pub fn verify(input: &[f32], bias: &[f32], output: &[f32], tolerance: f32) -> Result<()> {
    debug_assert_eq!(input.len(), bias.len());
    debug_assert_eq!(input.len(), output.len());

    for (index, ((&first, &second), &actual)) in
        input.iter().zip(bias).zip(output).enumerate()
    {
        let expected = second + first;
        if (expected - actual).abs() > tolerance {
            return Err(HarnessError::Verification {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
