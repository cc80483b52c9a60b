//! Counting contiguous subarrays with an exact sum, two-pointer style.
//!
//! The window `[left, right]` expands rightward and contracts from the left
//! whenever its running sum exceeds the target. Because every element is
//! positive, the running sum is strictly monotone under both moves, so each
//! right endpoint has at most one matching window and no window is missed.
//! O(n) time, O(1) extra space.

/// Counts contiguous subarrays of `values` whose elements sum to `target`.
///
/// Contract: all values and the target are positive. Non-positive entries
/// break the monotonicity the two-pointer sweep relies on.
pub fn count_subarrays_with_sum(values: &[i64], target: i64) -> usize {
    debug_assert!(target > 0);
    debug_assert!(values.iter().all(|&v| v > 0));

    let mut left = 0;
    let mut sum = 0i64;
    let mut count = 0;

    for right in 0..values.len() {
        sum += values[right];
        while sum > target && left <= right {
            sum -= values[left];
            left += 1;
        }
        if sum == target {
            count += 1;
        }
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// O(n²) reference: try every subarray.
    fn naive_count(values: &[i64], target: i64) -> usize {
        let mut count = 0;
        for start in 0..values.len() {
            let mut sum = 0;
            for &v in &values[start..] {
                sum += v;
                if sum == target {
                    count += 1;
                }
                if sum >= target {
                    break;
                }
            }
        }
        count
    }

    proptest! {
        #[test]
        fn matches_naive(
            values in proptest::collection::vec(1i64..=20, 0..=200),
            target in 1i64..=60,
        ) {
            prop_assert_eq!(
                count_subarrays_with_sum(&values, target),
                naive_count(&values, target)
            );
        }

        /// A window can match at most once per right endpoint, so the count
        /// never exceeds the array length.
        #[test]
        fn count_bounded_by_len(
            values in proptest::collection::vec(1i64..=20, 0..=200),
            target in 1i64..=60,
        ) {
            prop_assert!(count_subarrays_with_sum(&values, target) <= values.len());
        }
    }

    #[test]
    fn worked_example() {
        let values = [1, 2, 3, 4, 2, 5, 3, 1, 1, 2];
        assert_eq!(count_subarrays_with_sum(&values, 5), 3);
    }

    #[test]
    fn empty_array() {
        assert_eq!(count_subarrays_with_sum(&[], 5), 0);
    }

    #[test]
    fn whole_array_matches() {
        assert_eq!(count_subarrays_with_sum(&[2, 3], 5), 1);
    }

    #[test]
    fn target_smaller_than_every_element() {
        assert_eq!(count_subarrays_with_sum(&[5, 6, 7], 3), 0);
    }

    #[test]
    fn repeated_singletons() {
        assert_eq!(count_subarrays_with_sum(&[4, 4, 4], 4), 3);
    }
}
