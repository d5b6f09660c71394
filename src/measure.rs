//! Readout of probability distributions.
//!
//! - [`probs`] - full distribution, or the marginal over a list of qubits
//!
//! Marginal outcomes are little-endian over the requested qubits: bit `i`
//! of an outcome is the value of `locs[i]`.

use rayon::prelude::*;

use crate::index::{gather_bits, is_contiguous};
use crate::state::State;

/// Amplitudes folded per rayon task in marginal reductions.
const MARGINAL_CHUNK: usize = 1 << 14;

/// Compute probability distribution over computational basis.
///
/// If `locs` is `None`, returns probabilities for all qubits.
/// If `locs` is `Some(&[...])`, returns marginal probabilities for the
/// specified qubits, summed over every setting of the others.
///
/// # Example
/// ```
/// use plenum_rs::{State, Gate, measure::probs};
/// use plenum_rs::instruct::apply_gate;
///
/// let mut state = State::zero_state(3);
/// apply_gate(&mut state, &Gate::X, &[2]);
/// let p = probs(&state, Some(&[2, 0]));
/// // qubit 2 is outcome bit 0
/// assert!((p[0b01] - 1.0).abs() < 1e-12);
/// ```
pub fn probs(state: &State, locs: Option<&[usize]>) -> Vec<f64> {
    match locs {
        None => state.amplitudes().par_iter().map(|c| c.norm_sqr()).collect(),
        Some(locs) => marginal_probs(state, locs),
    }
}

/// Compute marginal probabilities for a subset of qubits.
fn marginal_probs(state: &State, locs: &[usize]) -> Vec<f64> {
    let size = 1usize << locs.len();
    let amps = state.amplitudes();

    // A contiguous ascending block reads its outcome with one shift and mask.
    let contiguous = !locs.is_empty() && is_contiguous(locs);
    let shift = locs.first().copied().unwrap_or(0);
    let mask = size - 1;
    let outcome = |idx: usize| {
        if contiguous {
            (idx >> shift) & mask
        } else {
            gather_bits(idx, locs)
        }
    };

    amps.par_chunks(MARGINAL_CHUNK)
        .enumerate()
        .fold(
            || vec![0.0; size],
            |mut acc, (c, chunk)| {
                let start = c * MARGINAL_CHUNK;
                for (j, amp) in chunk.iter().enumerate() {
                    acc[outcome(start + j)] += amp.norm_sqr();
                }
                acc
            },
        )
        .reduce(
            || vec![0.0; size],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b) {
                    *x += y;
                }
                a
            },
        )
}
