//! Domain Services
//!
//! Pure bit-scan helpers over tower values.

use crate::error::{HanoiError, HanoiResult};

/// Population count of a tower value
pub fn count_set_bits(x: u64) -> u32 {
    x.count_ones()
}

/// Index of the lowest set bit, i.e. the top (smallest) disc on a tower
///
/// Zero has no set bit and is rejected rather than mapped to a sentinel.
pub fn least_significant_set_bit_index(x: u64) -> HanoiResult<u32> {
    if x == 0 {
        return Err(HanoiError::NoSetBits);
    }
    Ok(x.trailing_zeros())
}
