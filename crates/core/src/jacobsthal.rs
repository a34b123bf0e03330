/// Returns the `k`-th Jacobsthal number, `(2^k - (-1)^k) / 3`.
///
/// The sequence runs 0, 1, 1, 3, 5, 11, 21, 43, ... and satisfies
/// `J(k) = J(k - 1) + 2 * J(k - 2)`.
///
/// # Panics
///
/// Panics if `k > usize::BITS`, where the result no longer fits in `usize`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn jacobsthal(k: u32) -> usize {
    assert!(k <= usize::BITS, "jacobsthal index out of range");
    let power = 1u128 << k;
    let value = if k % 2 == 0 {
        (power - 1) / 3
    } else {
        (power + 1) / 3
    };
    value as usize
}
