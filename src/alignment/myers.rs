//! Myers' diff algorithm, generalized from item equality to an index-aware
//! correspondence predicate.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it. The divide-and-conquer skeleton follows the implementation
//! in the [`similar` crate](https://github.com/mitsuhiko/similar) by Brandon
//! Williams; instead of producing an edit script it records the matched
//! `(actual, expected)` index pairs, and every comparison goes through the
//! caller's predicate so that "merely similar" items can match too.

use std::ops::{Index, IndexMut, Range};

/// Runs the diff and returns the matched index pairs, strictly increasing on
/// both sides. Items absent from the result are unmatched.
pub(crate) fn matched_pairs<T, F>(actual: &[T], expected: &[T], corresponds: &F) -> Vec<(usize, usize)>
where
    F: Fn(&T, &T, usize, usize) -> bool,
{
    let max_d = (actual.len() + expected.len()).div_ceil(2) + 1;
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Vec::new();

    conquer(
        actual,
        0..actual.len(),
        expected,
        0..expected.len(),
        &mut vf,
        &mut vb,
        corresponds,
        &mut result,
    );

    debug_assert!(
        result
            .windows(2)
            .all(|pair| pair[0].0 < pair[1].0 && pair[0].1 < pair[1].1),
        "Matches must be strictly increasing on both sides"
    );

    result
}

fn common_prefix_len<T, F>(
    actual: &[T],
    actual_range: Range<usize>,
    expected: &[T],
    expected_range: Range<usize>,
    corresponds: &F,
) -> usize
where
    F: Fn(&T, &T, usize, usize) -> bool,
{
    actual_range
        .zip(expected_range)
        .take_while(|&(i, j)| corresponds(&actual[i], &expected[j], i, j))
        .count()
}

fn common_suffix_len<T, F>(
    actual: &[T],
    actual_range: Range<usize>,
    expected: &[T],
    expected_range: Range<usize>,
    corresponds: &F,
) -> usize
where
    F: Fn(&T, &T, usize, usize) -> bool,
{
    actual_range
        .rev()
        .zip(expected_range.rev())
        .take_while(|&(i, j)| corresponds(&actual[i], &expected[j], i, j))
        .count()
}

// A D-path is a path which starts at (0,0) that has exactly D non-diagonal
// edges. All D-paths consist of a (D - 1)-path followed by a non-diagonal edge
// and then a possibly empty sequence of diagonal edges called a snake.

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`. In other words, `V` is an array of
/// integers where `V[k]` contains the row index of the endpoint of the furthest
/// reaching path in diagonal `k`.
///
/// We can't use a traditional Vec to represent `V` since we use `k` as an index
/// and it can take on negative values. So instead `V` is represented as a
/// light-weight wrapper around a Vec plus an `offset` which is the maximum
/// value `k` can take on in order to map negative `k`'s back to a value >= 0.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        // max_d should fit in isize for the algorithm to work correctly
        let offset = isize::try_from(max_d).unwrap_or(isize::MAX);
        Self {
            offset,
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize { self.v.len() }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        &self.v[idx.min(self.v.len().saturating_sub(1))]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        let len = self.v.len();
        &mut self.v[idx.min(len.saturating_sub(1))]
    }
}

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

/// A `Snake` is a sequence of diagonal edges in the edit graph. Normally
/// a snake has a start end end point (and it is possible for a snake to have
/// a length of zero, meaning the start and end points are the same) however
/// we do not need the end point which is why it's not implemented here.
///
/// The divide part of a divide-and-conquer strategy. A D-path has D+1 snakes
/// some of which may be empty. The divide step requires finding the ceil(D/2) +
/// 1 or middle snake of an optimal D-path. The idea for doing so is to
/// simultaneously run the basic algorithm in both the forward and reverse
/// directions until furthest reaching forward and reverse paths starting at
/// opposing corners 'overlap'.
#[allow(clippy::too_many_arguments)]
fn find_middle_snake<T, F>(
    actual: &[T],
    actual_range: Range<usize>,
    expected: &[T],
    expected_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    corresponds: &F,
) -> Option<(usize, usize)>
where
    F: Fn(&T, &T, usize, usize) -> bool,
{
    let n = actual_range.len();
    let m = expected_range.len();

    // By Lemma 1 in the paper, the optimal edit script length is odd or even as
    // `delta` is odd or even.
    let delta = isize::try_from(n).unwrap_or(isize::MAX) - isize::try_from(m).unwrap_or(isize::MAX);
    let odd = delta & 1 == 1;

    // The initial point at (0, -1)
    vf[1] = 0;
    // The initial point at (N, M+1)
    vb[1] = 0;

    let d_max = (n + m).div_ceil(2) + 1;
    assert!(vf.len() >= d_max);
    assert!(vb.len() >= d_max);

    let d_max_isize = isize::try_from(d_max).unwrap_or(isize::MAX);
    for d in 0..d_max_isize {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            // The coordinate of the start of a snake
            let (x0, y0) = (x, y);
            // While the items correspond, keep moving through the graph with
            // no cost
            if x < n && y < m {
                let advance = common_prefix_len(
                    actual,
                    actual_range.start + x..actual_range.end,
                    expected,
                    expected_range.start + y..expected_range.end,
                    corresponds,
                );
                x += advance;
            }

            // This is the new best x value
            vf[k] = x;

            // Only check for connections from the forward search when N - M is
            // odd and when there is a reciprocal k line coming from the other
            // direction.
            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                // Return the snake
                return Some((x0 + actual_range.start, y0 + expected_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            if x < n && y < m {
                let advance = common_suffix_len(
                    actual,
                    actual_range.start..actual_range.start + n - x,
                    expected,
                    expected_range.start..expected_range.start + m - y,
                    corresponds,
                );
                x += advance;
                y += advance;
            }

            // This is the new best x value
            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                // Return the snake
                return Some((n - x + actual_range.start, m - y + expected_range.start));
            }
        }
    }

    None
}

#[allow(clippy::too_many_arguments)]
fn conquer<T, F>(
    actual: &[T],
    mut actual_range: Range<usize>,
    expected: &[T],
    mut expected_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    corresponds: &F,
    result: &mut Vec<(usize, usize)>,
) where
    F: Fn(&T, &T, usize, usize) -> bool,
{
    // Check for common prefix
    let prefix_len = common_prefix_len(
        actual,
        actual_range.clone(),
        expected,
        expected_range.clone(),
        corresponds,
    );
    result.extend((0..prefix_len).map(|k| (actual_range.start + k, expected_range.start + k)));
    actual_range.start += prefix_len;
    expected_range.start += prefix_len;

    // Check for common suffix
    let suffix_len = common_suffix_len(
        actual,
        actual_range.clone(),
        expected,
        expected_range.clone(),
        corresponds,
    );
    let suffix_start = (
        actual_range.end - suffix_len,
        expected_range.end - suffix_len,
    );
    actual_range.end -= suffix_len;
    expected_range.end -= suffix_len;

    if !actual_range.is_empty() && !expected_range.is_empty() {
        if let Some((x_start, y_start)) = find_middle_snake(
            actual,
            actual_range.clone(),
            expected,
            expected_range.clone(),
            vf,
            vb,
            corresponds,
        ) {
            let (actual_a, actual_b) = split_at(actual_range, x_start);
            let (expected_a, expected_b) = split_at(expected_range, y_start);
            conquer(
                actual, actual_a, expected, expected_a, vf, vb, corresponds, result,
            );
            conquer(
                actual, actual_b, expected, expected_b, vf, vb, corresponds, result,
            );
        }
        // No middle snake: nothing corresponds in this window, so the whole
        // window is removals plus insertions and there is nothing to record.
    }

    result.extend((0..suffix_len).map(|k| (suffix_start.0 + k, suffix_start.1 + k)));
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn identity(a: &i32, b: &i32, _: usize, _: usize) -> bool { a == b }

    #[test]
    fn test_empty_inputs() {
        let pairs = matched_pairs::<i32, _>(&[], &[], &identity);
        assert_eq!(pairs, vec![]);
    }

    #[test]
    fn test_identical_inputs_match_fully() {
        let items = [1, 2, 3];
        let pairs = matched_pairs(&items, &items, &identity);
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_one_side_empty_matches_nothing() {
        assert_eq!(matched_pairs(&[1, 2], &[], &identity), vec![]);
        assert_eq!(matched_pairs(&[], &[1, 2], &identity), vec![]);
    }

    #[test]
    fn test_prefix_and_suffix() {
        let pairs = matched_pairs(&[1, 2, 3, 4], &[1, 9, 4], &identity);
        assert_eq!(pairs, vec![(0, 0), (3, 2)]);
    }

    #[test]
    fn test_interleaved_changes() {
        let pairs = matched_pairs(&[1, 2, 3, 4], &[1, 9, 3, 8], &identity);
        assert_eq!(pairs, vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn test_completely_distinct_inputs() {
        let pairs = matched_pairs(&[1, 2], &[3, 4], &identity);
        assert_eq!(pairs, vec![]);
    }

    #[test]
    fn test_predicate_receives_absolute_indices() {
        // Match any values, but only on the main diagonal; the recorded
        // indices must be absolute, not window-relative.
        let diagonal = |_: &i32, _: &i32, i: usize, j: usize| i == j;
        let pairs = matched_pairs(&[10, 20, 30], &[40, 50, 60], &diagonal);
        assert_eq!(pairs, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_predicate_beyond_equality() {
        // Items correspond when congruent modulo 10
        let congruent = |a: &i32, b: &i32, _: usize, _: usize| a % 10 == b % 10;
        let pairs = matched_pairs(&[1, 2, 3], &[11, 23], &congruent);
        assert_eq!(pairs, vec![(0, 0), (2, 1)]);
    }
}
