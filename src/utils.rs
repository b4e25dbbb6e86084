/// Isolates the lowest set bit of `index` (`index & -index`).
#[inline]
pub const fn lowbit(index: usize) -> usize {
    index & index.wrapping_neg()
}

/// The next 1-based index whose aggregate covers `index`.
#[inline]
pub const fn parent(index: usize) -> usize {
    index + lowbit(index)
}

/// Largest power of two that is `<= n`, or 0 for `n == 0`.
#[inline]
pub const fn highest_power_of_two_le(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}
