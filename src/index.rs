//! Bit-level indexing utilities for qubit registers.
//!
//! Bit `q` of a flat state vector index holds the computational-basis value
//! of qubit `q`. Two orderings are used on top of that:
//!
//! - Gate matrices are row-major over their targets: for target list
//!   `[t_0, t_1, ..., t_{k-1}]` the matrix index is
//!   `bit(t_0)*2^(k-1) + bit(t_1)*2^(k-2) + ... + bit(t_{k-1})`.
//! - Readout outcomes are little-endian over the measured list: bit `i` of an
//!   outcome is the value of `locs[i]`.

/// Insert a zero bit at every position in `sorted_locs`.
///
/// `sorted_locs` must be strictly ascending. Bits of `value` are shifted
/// left past each inserted position, so the result enumerates, as `value`
/// runs over `0..2^(n-k)`, every `n`-bit index whose target bits are clear.
///
/// # Example
/// ```
/// use plenum_rs::index::insert_zero_bits;
/// // 0b11 with a hole at bit 1 -> 0b101
/// assert_eq!(insert_zero_bits(0b11, &[1]), 0b101);
/// assert_eq!(insert_zero_bits(0b1, &[0, 1]), 0b100);
/// ```
pub fn insert_zero_bits(mut value: usize, sorted_locs: &[usize]) -> usize {
    for &loc in sorted_locs {
        let low = value & ((1usize << loc) - 1);
        value = ((value >> loc) << (loc + 1)) | low;
    }
    value
}

/// Offsets of the `2^k` group members relative to the group base.
///
/// Entry `m` is the index offset where the targets carry the bits of `m`
/// in row-major order (`locs[0]` is the most significant bit of `m`).
///
/// # Example
/// ```
/// use plenum_rs::index::group_offsets;
/// // targets [2, 0]: m = 0b10 sets qubit 2, m = 0b01 sets qubit 0
/// assert_eq!(group_offsets(&[2, 0]), vec![0, 1, 4, 5]);
/// ```
pub fn group_offsets(locs: &[usize]) -> Vec<usize> {
    let k = locs.len();
    (0..1usize << k)
        .map(|m| {
            locs.iter()
                .enumerate()
                .filter(|&(j, _)| (m >> (k - 1 - j)) & 1 == 1)
                .fold(0usize, |acc, (_, &loc)| acc | (1usize << loc))
        })
        .collect()
}

/// Iterate over the base index of every group.
///
/// A group is the set of `2^k` indices that differ only in the bits at
/// `locs`; its base is the member with all those bits clear. Yields
/// `2^(nbits - k)` bases in ascending order.
///
/// # Example
/// ```
/// use plenum_rs::index::iter_group_bases;
/// let bases: Vec<_> = iter_group_bases(3, &[1]).collect();
/// assert_eq!(bases, vec![0, 1, 4, 5]);
/// ```
pub fn iter_group_bases(nbits: usize, locs: &[usize]) -> impl Iterator<Item = usize> {
    let mut sorted = locs.to_vec();
    sorted.sort_unstable();
    let count = 1usize << (nbits - locs.len());
    (0..count).map(move |g| insert_zero_bits(g, &sorted))
}

/// Collect the bits at `locs` into a little-endian outcome.
///
/// # Example
/// ```
/// use plenum_rs::index::gather_bits;
/// // qubit 3 set, qubit 5 clear -> outcome bit 0 set
/// assert_eq!(gather_bits(0b001000, &[3, 5]), 0b01);
/// ```
pub fn gather_bits(index: usize, locs: &[usize]) -> usize {
    locs.iter()
        .enumerate()
        .fold(0usize, |acc, (i, &loc)| acc | (((index >> loc) & 1) << i))
}

/// Whether `locs` is an ascending run `[b, b+1, ..., b+k-1]`.
pub fn is_contiguous(locs: &[usize]) -> bool {
    locs.windows(2).all(|w| w[1] == w[0] + 1)
}

/// Highest qubit index in `locs`.
pub fn highest_loc(locs: &[usize]) -> usize {
    locs.iter().copied().max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_zero_bits_no_locs() {
        assert_eq!(insert_zero_bits(0b1011, &[]), 0b1011);
    }

    #[test]
    fn test_insert_zero_bits_multiple() {
        // holes at 0 and 2: value bits land on 1, 3, 4, ...
        assert_eq!(insert_zero_bits(0b1, &[0, 2]), 0b10);
        assert_eq!(insert_zero_bits(0b10, &[0, 2]), 0b1000);
        assert_eq!(insert_zero_bits(0b111, &[0, 2]), 0b11010);
    }

    #[test]
    fn test_group_bases_cover_register_once() {
        let locs = [4, 1];
        let offsets = group_offsets(&locs);
        let mut seen = vec![false; 1 << 6];
        for base in iter_group_bases(6, &locs) {
            for &off in &offsets {
                assert!(!seen[base | off], "index {} visited twice", base | off);
                seen[base | off] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_group_offsets_row_major() {
        assert_eq!(group_offsets(&[0, 1]), vec![0, 2, 1, 3]);
        assert_eq!(group_offsets(&[1, 0]), vec![0, 1, 2, 3]);
        assert_eq!(group_offsets(&[0, 1, 7]), vec![0, 128, 2, 130, 1, 129, 3, 131]);
    }

    #[test]
    fn test_gather_bits_contiguous_block() {
        let locs: Vec<usize> = (8..16).collect();
        assert_eq!(gather_bits(0xAB_CD, &locs), 0xAB);
    }

    #[test]
    fn test_is_contiguous() {
        assert!(is_contiguous(&[3, 4, 5]));
        assert!(is_contiguous(&[7]));
        assert!(!is_contiguous(&[3, 5]));
        assert!(!is_contiguous(&[5, 4]));
    }
}
