//! State vector engine: in-place application of k-qubit unitaries.
//!
//! A gate on targets `locs` never materializes the full `2^N x 2^N`
//! operator. The register is partitioned into `2^(N-k)` groups of `2^k`
//! amplitudes that differ only in the target bits, and each group is
//! multiplied by the `2^k x 2^k` gate matrix in place.
//!
//! Every group lies inside one aligned block of `2^(h+1)` amplitudes, where
//! `h` is the highest target qubit, so blocks are swept in parallel with
//! rayon when there are several of them.

use ndarray::Array2;
use num_complex::Complex64;
use rayon::prelude::*;

use crate::gate::Gate;
use crate::index::{group_offsets, highest_loc, iter_group_bases};
use crate::state::State;

/// Registers smaller than this are swept on the calling thread.
const PAR_MIN_DIM: usize = 1 << 14;

/// Amplitudes per rayon task in diagonal sweeps.
const DIAG_CHUNK: usize = 1 << 12;

/// Apply a 2x2 unitary gate to a pair of amplitudes at indices i and j.
///
/// The gate matrix is [[a, b], [c, d]] and transforms:
/// - new_i = a * state[i] + b * state[j]
/// - new_j = c * state[i] + d * state[j]
///
/// # Example
/// ```
/// use plenum_rs::gate::Gate;
/// use plenum_rs::instruct::u1rows;
/// use num_complex::Complex64;
///
/// let mut state = vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
/// u1rows(&mut state, 0, 1, &Gate::X.matrix());
/// assert!((state[1].norm() - 1.0).abs() < 1e-10);
/// ```
pub fn u1rows(state: &mut [Complex64], i: usize, j: usize, gate: &Array2<Complex64>) {
    debug_assert_eq!(gate.dim(), (2, 2));

    let old_i = state[i];
    let old_j = state[j];

    state[i] = gate[[0, 0]] * old_i + gate[[0, 1]] * old_j;
    state[j] = gate[[1, 0]] * old_i + gate[[1, 1]] * old_j;
}

/// Largest group gathered on the stack; bigger custom gates fall back to a heap buffer.
const STACK_GROUP: usize = 8;

/// Apply a d x d unitary gate to d amplitudes at given indices.
///
/// `indices[m]` is the amplitude playing basis state `m` of the gate.
///
/// # Example
/// ```
/// use plenum_rs::gate::Gate;
/// use plenum_rs::instruct::udrows;
/// use num_complex::Complex64;
///
/// let zero = Complex64::new(0.0, 0.0);
/// let mut state = vec![zero, zero, Complex64::new(1.0, 0.0), zero];
/// // CNOT with control as the high bit: |10> -> |11>
/// udrows(&mut state, &[0, 1, 2, 3], &Gate::CNOT.matrix());
/// assert!((state[3].norm() - 1.0).abs() < 1e-10);
/// ```
pub fn udrows(state: &mut [Complex64], indices: &[usize], gate: &Array2<Complex64>) {
    debug_assert_eq!(gate.nrows(), indices.len());
    let d = indices.len();
    if d <= STACK_GROUP {
        let mut old = [Complex64::new(0.0, 0.0); STACK_GROUP];
        for (slot, &idx) in old.iter_mut().zip(indices) {
            *slot = state[idx];
        }
        mix_group(state, indices, gate, &old[..d]);
    } else {
        let old: Vec<Complex64> = indices.iter().map(|&idx| state[idx]).collect();
        mix_group(state, indices, gate, &old);
    }
}

/// Overwrite `state[indices]` with `gate * old`.
#[inline]
fn mix_group(
    state: &mut [Complex64],
    indices: &[usize],
    gate: &Array2<Complex64>,
    old: &[Complex64],
) {
    for (row, &idx) in indices.iter().enumerate() {
        let mut acc = Complex64::new(0.0, 0.0);
        for (col, &amp) in old.iter().enumerate() {
            acc += gate[[row, col]] * amp;
        }
        state[idx] = acc;
    }
}

/// Sweep every group inside `block`, a register of `nbits` qubits.
fn sweep_block(
    block: &mut [Complex64],
    nbits: usize,
    gate: &Array2<Complex64>,
    locs: &[usize],
    offsets: &[usize],
) {
    if locs.len() == 1 {
        let step = offsets[1];
        for base in iter_group_bases(nbits, locs) {
            u1rows(block, base, base + step, gate);
        }
        return;
    }

    let mut indices = vec![0usize; offsets.len()];
    for base in iter_group_bases(nbits, locs) {
        for (slot, &off) in indices.iter_mut().zip(offsets) {
            *slot = base + off;
        }
        udrows(block, &indices, gate);
    }
}

/// Apply a `2^k x 2^k` matrix to the qubits in `locs`.
///
/// Row-major convention: `locs[0]` is the most significant bit of the
/// matrix index. Targets must be distinct and inside the register.
///
/// # Example
/// ```
/// use plenum_rs::gate::Gate;
/// use plenum_rs::instruct::instruct;
/// use plenum_rs::state::State;
///
/// // CNOT control=0, target=1 on |q1 q0> = |01>
/// let mut state = State::basis_state(2, 0b01);
/// instruct(&mut state, &Gate::CNOT.matrix(), &[0, 1]);
/// assert!((state.data[0b11].norm() - 1.0).abs() < 1e-10);
/// ```
pub fn instruct(state: &mut State, gate: &Array2<Complex64>, locs: &[usize]) {
    debug_assert_eq!(gate.nrows(), 1 << locs.len());
    debug_assert!(locs.iter().all(|&l| l < state.num_qubits));
    debug_assert!(
        locs.iter()
            .enumerate()
            .all(|(i, l)| !locs[i + 1..].contains(l)),
        "target qubits must be distinct"
    );

    let offsets = group_offsets(locs);
    let block_bits = highest_loc(locs) + 1;
    let block_len = 1usize << block_bits;
    let total = state.total_dim();
    let amps = state.amplitudes_mut();

    if total >= PAR_MIN_DIM && total > block_len {
        amps.par_chunks_mut(block_len)
            .for_each(|block| sweep_block(block, block_bits, gate, locs, &offsets));
    } else {
        let nbits = total.trailing_zeros() as usize;
        sweep_block(amps, nbits, gate, locs, &offsets);
    }
}

/// Apply a diagonal gate given its `2^k` diagonal entries.
///
/// Each amplitude is multiplied by `phases[m]`, where `m` is the row-major
/// value of its target bits.
pub fn instruct_diagonal(state: &mut State, phases: &[Complex64], locs: &[usize]) {
    debug_assert_eq!(phases.len(), 1 << locs.len());

    let k = locs.len();
    let amps = state.amplitudes_mut();
    amps.par_chunks_mut(DIAG_CHUNK)
        .enumerate()
        .for_each(|(c, chunk)| {
            let start = c * DIAG_CHUNK;
            for (j, amp) in chunk.iter_mut().enumerate() {
                let idx = start + j;
                let m = locs
                    .iter()
                    .enumerate()
                    .fold(0usize, |acc, (t, &loc)| acc | (((idx >> loc) & 1) << (k - 1 - t)));
                *amp *= phases[m];
            }
        });
}

/// Apply `gate` to `locs`, picking the cheapest sweep for its structure.
///
/// Identity is skipped, diagonal gates become a phase sweep, everything
/// else goes through [`instruct`].
pub fn apply_gate(state: &mut State, gate: &Gate, locs: &[usize]) {
    debug_assert_eq!(gate.num_qubits(), locs.len(), "gate {} arity mismatch", gate);
    if gate.is_identity() {
        return;
    }
    match gate.diagonal() {
        Some(phases) => instruct_diagonal(state, &phases, locs),
        None => instruct(state, &gate.matrix(), locs),
    }
}
