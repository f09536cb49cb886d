use std::collections::HashMap;

use log::trace;

pub mod result;
pub mod scenarios;

pub use result::TwoSumError;

/// Finds the first pair of positions whose values add up to `target`.
///
/// The slice is scanned once, left to right. Each value is remembered at the
/// earliest index it was seen, and the first position whose complement has
/// already been seen ends the scan. The returned pair is always `(i, j)` with
/// `i < j`; `None` means no two elements sum to `target`.
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

    for (right, &value) in nums.iter().enumerate() {
        // an overflowing complement can't be held by any i32, so nothing to look up
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&left) = seen.get(&complement) {
                trace!("matched {} at {} with {} at {}", complement, left, value, right);
                return Some((left, right));
            }
        }
        seen.entry(value).or_insert(right);
    }

    trace!("no pair sums to {} in {} values", target, nums.len());
    None
}

/// List shaped variant: `[i, j]` for a match, an empty vec otherwise.
///
/// Indices are reported as `i32`, so a match past index `i32::MAX` also comes
/// back empty and can't be told apart from no match. Use [`two_sum`] for
/// slices that long.
pub fn two_sum_indices(nums: Vec<i32>, target: i32) -> Vec<i32> {
    match two_sum(&nums, target) {
        Some((left, right)) => match (i32::try_from(left), i32::try_from(right)) {
            (Ok(left), Ok(right)) => vec![left, right],
            _ => vec![],
        },
        None => vec![],
    }
}
