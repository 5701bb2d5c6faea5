pub(crate) trait SplitAtHalf: Sized {
    /// Split into `(lower, upper)` halves with `lower + upper == self` and the
    /// remainder going to `upper`.
    fn split_at_half(self) -> (Self, Self);
}

impl SplitAtHalf for usize {
    #[inline]
    fn split_at_half(self) -> (usize, usize) {
        let lower = self / 2;
        (lower, self - lower)
    }
}

/// Exact `floor(log2(n))`, with `0` for `n <= 1`.
#[inline]
pub(crate) fn floor_log2(n: usize) -> u32 {
    n.checked_ilog2().unwrap_or(0)
}
