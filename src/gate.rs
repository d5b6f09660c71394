use ndarray::Array2;
use num_complex::Complex64;
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};

/// Unitary operator on 1, 2 or 3 qubits.
///
/// Multi-qubit matrices are row-major over the target list: the first
/// target is the most significant bit of the matrix index. Controlled gates
/// list their controls first.
#[derive(Debug, Clone, PartialEq)]
pub enum Gate {
    I,
    X,
    Y,
    Z,
    H,
    S,
    T,
    /// √X gate: SqrtX² = X
    SqrtX,
    Rx(f64),
    Ry(f64),
    Rz(f64),
    /// Phase gate: diag(1, e^(iθ)).
    Phase(f64),
    /// General rotation Rz(ω)·Ry(θ)·Rz(φ), parameters in (φ, θ, ω) order.
    Rot(f64, f64, f64),
    CNOT,
    CY,
    CZ,
    SWAP,
    ISWAP,
    /// exp(-iθ/2 · X⊗X)
    IsingXX(f64),
    /// exp(-iθ/2 · Y⊗Y)
    IsingYY(f64),
    /// exp(-iθ/2 · Z⊗Z)
    IsingZZ(f64),
    /// exp(iθ/4 · (X⊗X + Y⊗Y))
    IsingXY(f64),
    /// Doubly-controlled X: controls first, target last.
    Toffoli,
    /// Controlled SWAP: control first, swapped pair last.
    CSWAP,
    Custom {
        matrix: Array2<Complex64>,
        label: String,
    },
}

impl std::fmt::Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gate::I => write!(f, "I"),
            Gate::X => write!(f, "X"),
            Gate::Y => write!(f, "Y"),
            Gate::Z => write!(f, "Z"),
            Gate::H => write!(f, "H"),
            Gate::S => write!(f, "S"),
            Gate::T => write!(f, "T"),
            Gate::SqrtX => write!(f, "SqrtX"),
            Gate::Rx(theta) => write!(f, "Rx({:.4})", theta),
            Gate::Ry(theta) => write!(f, "Ry({:.4})", theta),
            Gate::Rz(theta) => write!(f, "Rz({:.4})", theta),
            Gate::Phase(theta) => write!(f, "Phase({:.4})", theta),
            Gate::Rot(phi, theta, omega) => {
                write!(f, "Rot({:.4}, {:.4}, {:.4})", phi, theta, omega)
            }
            Gate::CNOT => write!(f, "CNOT"),
            Gate::CY => write!(f, "CY"),
            Gate::CZ => write!(f, "CZ"),
            Gate::SWAP => write!(f, "SWAP"),
            Gate::ISWAP => write!(f, "ISWAP"),
            Gate::IsingXX(theta) => write!(f, "IsingXX({:.4})", theta),
            Gate::IsingYY(theta) => write!(f, "IsingYY({:.4})", theta),
            Gate::IsingZZ(theta) => write!(f, "IsingZZ({:.4})", theta),
            Gate::IsingXY(theta) => write!(f, "IsingXY({:.4})", theta),
            Gate::Toffoli => write!(f, "Toffoli"),
            Gate::CSWAP => write!(f, "CSWAP"),
            Gate::Custom { label, .. } => write!(f, "{}", label),
        }
    }
}

impl Gate {
    /// Number of qubits the gate acts on.
    pub fn num_qubits(&self) -> usize {
        match self {
            Gate::CNOT
            | Gate::CY
            | Gate::CZ
            | Gate::SWAP
            | Gate::ISWAP
            | Gate::IsingXX(_)
            | Gate::IsingYY(_)
            | Gate::IsingZZ(_)
            | Gate::IsingXY(_) => 2,
            Gate::Toffoli | Gate::CSWAP => 3,
            Gate::Custom { matrix, .. } => matrix.nrows().trailing_zeros() as usize,
            _ => 1,
        }
    }

    pub fn is_identity(&self) -> bool {
        matches!(self, Gate::I)
    }

    /// Returns the diagonal when the matrix is diagonal.
    ///
    /// Diagonal gates are applied as a phase sweep instead of a full
    /// group-wise matrix product.
    pub fn diagonal(&self) -> Option<Vec<Complex64>> {
        let one = Complex64::new(1.0, 0.0);
        match self {
            Gate::I => Some(vec![one, one]),
            Gate::Z => Some(vec![one, -one]),
            Gate::S => Some(vec![one, Complex64::new(0.0, 1.0)]),
            Gate::T => Some(vec![one, Complex64::from_polar(1.0, FRAC_PI_4)]),
            Gate::Phase(theta) => Some(vec![one, Complex64::from_polar(1.0, *theta)]),
            Gate::Rz(theta) => Some(vec![
                Complex64::from_polar(1.0, -theta / 2.0),
                Complex64::from_polar(1.0, theta / 2.0),
            ]),
            Gate::CZ => Some(vec![one, one, one, -one]),
            Gate::IsingZZ(theta) => {
                let neg = Complex64::from_polar(1.0, -theta / 2.0);
                let pos = Complex64::from_polar(1.0, theta / 2.0);
                Some(vec![neg, pos, pos, neg])
            }
            _ => None,
        }
    }

    /// Returns the `2^k x 2^k` matrix of the gate.
    pub fn matrix(&self) -> Array2<Complex64> {
        let zero = Complex64::new(0.0, 0.0);
        let one = Complex64::new(1.0, 0.0);
        let i = Complex64::new(0.0, 1.0);
        let neg_i = Complex64::new(0.0, -1.0);

        if let Some(diag) = self.diagonal() {
            return Array2::from_diag(&ndarray::Array1::from(diag));
        }

        match self {
            Gate::X => mat2(zero, one, one, zero),
            Gate::Y => mat2(zero, neg_i, i, zero),
            Gate::H => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                mat2(s, s, s, -s)
            }
            Gate::SqrtX => {
                // (1/2) * [[1+i, 1-i], [1-i, 1+i]]
                let a = Complex64::new(0.5, 0.5);
                let b = Complex64::new(0.5, -0.5);
                mat2(a, b, b, a)
            }
            Gate::Rx(theta) => {
                let cos = Complex64::new((theta / 2.0).cos(), 0.0);
                let neg_i_sin = Complex64::new(0.0, -(theta / 2.0).sin());
                mat2(cos, neg_i_sin, neg_i_sin, cos)
            }
            Gate::Ry(theta) => {
                let cos = Complex64::new((theta / 2.0).cos(), 0.0);
                let sin = Complex64::new((theta / 2.0).sin(), 0.0);
                mat2(cos, -sin, sin, cos)
            }
            Gate::Rot(phi, theta, omega) => {
                let (c, s) = ((theta / 2.0).cos(), (theta / 2.0).sin());
                mat2(
                    Complex64::from_polar(c, -(phi + omega) / 2.0),
                    -Complex64::from_polar(s, (phi - omega) / 2.0),
                    Complex64::from_polar(s, -(phi - omega) / 2.0),
                    Complex64::from_polar(c, (phi + omega) / 2.0),
                )
            }
            Gate::CNOT => controlled(1, &Gate::X.matrix()),
            Gate::CY => controlled(1, &Gate::Y.matrix()),
            Gate::Toffoli => controlled(2, &Gate::X.matrix()),
            Gate::CSWAP => controlled(1, &Gate::SWAP.matrix()),
            Gate::SWAP => {
                // |01> <-> |10>
                let mut m = Array2::zeros((4, 4));
                m[[0, 0]] = one;
                m[[1, 2]] = one;
                m[[2, 1]] = one;
                m[[3, 3]] = one;
                m
            }
            Gate::ISWAP => {
                let mut m = Array2::zeros((4, 4));
                m[[0, 0]] = one;
                m[[1, 2]] = i;
                m[[2, 1]] = i;
                m[[3, 3]] = one;
                m
            }
            Gate::IsingXX(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new(0.0, -(theta / 2.0).sin());
                let mut m = Array2::zeros((4, 4));
                for k in 0..4 {
                    m[[k, k]] = c;
                    m[[k, 3 - k]] = s;
                }
                m
            }
            Gate::IsingYY(theta) => {
                // Y⊗Y flips sign on the |00>,|11> coupling
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new(0.0, (theta / 2.0).sin());
                let mut m = Array2::zeros((4, 4));
                for k in 0..4 {
                    m[[k, k]] = c;
                }
                m[[0, 3]] = s;
                m[[3, 0]] = s;
                m[[1, 2]] = -s;
                m[[2, 1]] = -s;
                m
            }
            Gate::IsingXY(theta) => {
                let c = Complex64::new((theta / 2.0).cos(), 0.0);
                let s = Complex64::new(0.0, (theta / 2.0).sin());
                let mut m = Array2::zeros((4, 4));
                m[[0, 0]] = one;
                m[[1, 1]] = c;
                m[[1, 2]] = s;
                m[[2, 1]] = s;
                m[[2, 2]] = c;
                m[[3, 3]] = one;
                m
            }
            Gate::Custom { matrix, .. } => matrix.clone(),
            // diagonal gates returned above
            _ => unreachable!("diagonal gate {} has no dense constructor", self),
        }
    }

    /// Return the adjoint (conjugate transpose) of this gate.
    ///
    /// For unitary gates, the adjoint is also the inverse: U† U = I.
    pub fn dagger(&self) -> Self {
        match self {
            Gate::I
            | Gate::X
            | Gate::Y
            | Gate::Z
            | Gate::H
            | Gate::CNOT
            | Gate::CY
            | Gate::CZ
            | Gate::SWAP
            | Gate::Toffoli
            | Gate::CSWAP => self.clone(),

            Gate::S => Gate::Phase(-std::f64::consts::FRAC_PI_2),
            Gate::T => Gate::Phase(-FRAC_PI_4),

            Gate::Rx(theta) => Gate::Rx(-theta),
            Gate::Ry(theta) => Gate::Ry(-theta),
            Gate::Rz(theta) => Gate::Rz(-theta),
            Gate::Phase(theta) => Gate::Phase(-theta),
            Gate::Rot(phi, theta, omega) => Gate::Rot(-omega, -theta, -phi),
            Gate::IsingXX(theta) => Gate::IsingXX(-theta),
            Gate::IsingYY(theta) => Gate::IsingYY(-theta),
            Gate::IsingZZ(theta) => Gate::IsingZZ(-theta),
            Gate::IsingXY(theta) => Gate::IsingXY(-theta),

            Gate::SqrtX | Gate::ISWAP => Gate::Custom {
                matrix: conjugate_transpose(&self.matrix()),
                label: format!("{}†", self),
            },
            Gate::Custom { matrix, label } => Gate::Custom {
                matrix: conjugate_transpose(matrix),
                label: format!("{}†", label),
            },
        }
    }
}

fn mat2(a: Complex64, b: Complex64, c: Complex64, d: Complex64) -> Array2<Complex64> {
    let mut m = Array2::zeros((2, 2));
    m[[0, 0]] = a;
    m[[0, 1]] = b;
    m[[1, 0]] = c;
    m[[1, 1]] = d;
    m
}

/// Embed `target` behind `num_controls` control qubits.
///
/// The result acts on `controls ++ targets`; `target` is applied only when
/// every control is |1>, identity otherwise.
pub fn controlled(num_controls: usize, target: &Array2<Complex64>) -> Array2<Complex64> {
    let target_dim = target.nrows();
    let dim = target_dim << num_controls;
    let trigger = dim - target_dim;
    let mut mat = Array2::zeros((dim, dim));
    for row in 0..trigger {
        mat[[row, row]] = Complex64::new(1.0, 0.0);
    }
    for t_row in 0..target_dim {
        for t_col in 0..target_dim {
            mat[[trigger + t_row, trigger + t_col]] = target[[t_row, t_col]];
        }
    }
    mat
}

/// Compute the conjugate transpose (adjoint) of a matrix.
pub fn conjugate_transpose(m: &Array2<Complex64>) -> Array2<Complex64> {
    m.t().mapv(|c| c.conj())
}
