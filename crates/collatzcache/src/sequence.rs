//! Collatz step counting

use crate::error::{Error, Result};

/// Number of Collatz iterations needed for `n` to reach 1
///
/// Even values are halved, odd values become `3n + 1`.
///
/// # Errors
/// * `Error::InvalidInput` - `n` is 0
/// * `Error::Overflow` - an intermediate value does not fit in u64
pub fn steps(n: u64) -> Result<u64> {
    if n == 0 {
        return Err(Error::InvalidInput(n));
    }

    let mut value = n;
    let mut count = 0u64;

    while value != 1 {
        value = if value % 2 == 0 {
            value / 2
        } else {
            value
                .checked_mul(3)
                .and_then(|v| v.checked_add(1))
                .ok_or(Error::Overflow(n))?
        };
        count += 1;
    }

    Ok(count)
}
