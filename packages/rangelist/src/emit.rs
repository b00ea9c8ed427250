use itertools::Itertools;

use crate::IndexRange;

/// Emits a [range list][crate] string from a sequence of ranges, preserving their order.
///
/// Single-index ranges are emitted in short form, so `emit(parse(x)?)` reproduces any
/// valid input `x` except that `n-n` becomes `n`.
///
/// See [package-level documentation][crate] for details.
pub fn emit<'a, I>(ranges: I) -> String
where
    I: IntoIterator<Item = &'a IndexRange>,
{
    ranges.into_iter().join(",")
}
