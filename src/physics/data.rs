//! Parameter and result data types
//!
//! This module provides a flexible container for law inputs and outputs
//! that can be scalars, vectors, matrices or n-dimensional arrays,
//! depending on the shape of the parameter sweep.

use nalgebra::{DMatrix, DVector};
use ndarray::{Array, ArrayD, IxDyn};
use std::fmt;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::LawError;
use crate::sweep::parallel_threshold;

/// Law data container supporting scalar to n-dimensional arrays
///
/// # Storage Types
///
/// - **Scalar**: Single parameter value (0D)
/// - **Vector**: 1D sweep (e.g. Mach from 1 to 30)
/// - **Matrix**: 2D sweep (e.g. Mach × Beta grid)
/// - **Array**: 3D+ sweeps (general n-D grids)
///
/// Mapping a law over a `LawData` keeps its shape, so an array of Mach
/// values yields an array of `scrit` values of the same shape.
///
/// # Examples
///
/// ```rust
/// use sflaws::physics::LawData;
///
/// let machs = LawData::linspace(1.0, 30.0, 50);
/// assert_eq!(machs.shape(), vec![50]);
///
/// let squared = machs.map(|m| m * m);
/// assert_eq!(squared.shape(), machs.shape());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum LawData {
    /// Scalar value (0D)
    Scalar(f64),

    /// Vector (1D)
    Vector(DVector<f64>),

    /// Matrix (2D)
    Matrix(DMatrix<f64>),

    /// Array (n-D)
    Array(ArrayD<f64>),
}

impl LawData {
    // ======================================= Constructors ========================================

    /// Create from scalar
    pub fn from_scalar(value: f64) -> Self {
        Self::Scalar(value)
    }

    /// Create from vector
    pub fn from_vec(vector: Vec<f64>) -> Self {
        Self::Vector(DVector::from_vec(vector))
    }

    /// Create from DVector
    pub fn from_vector(vector: DVector<f64>) -> Self {
        Self::Vector(vector)
    }

    /// Create from DMatrix
    pub fn from_matrix(matrix: DMatrix<f64>) -> Self {
        Self::Matrix(matrix)
    }

    /// Create from array
    pub fn from_array(array: ArrayD<f64>) -> Self {
        Self::Array(array)
    }

    /// Create uniform n-D array from shape
    pub fn uniform_array(shape: &[usize], value: f64) -> Self {
        Self::Array(Array::from_elem(IxDyn(shape), value))
    }

    /// Evenly spaced values over `[start, stop]`, endpoints included
    ///
    /// A single point yields `start`; zero points an empty vector.
    pub fn linspace(start: f64, stop: f64, n: usize) -> Self {
        let values = match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => {
                let step = (stop - start) / (n - 1) as f64;
                (0..n).map(|i| start + step * i as f64).collect()
            }
        };
        Self::from_vec(values)
    }

    /// Values evenly spaced in log10 over `[10^start, 10^stop]`
    pub fn logspace(start: f64, stop: f64, n: usize) -> Self {
        Self::linspace(start, stop, n).map(|exponent| 10f64.powf(exponent))
    }

    // ========================================== Queries ==========================================

    /// Check data is scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::Scalar(_))
    }

    /// Get data dimension
    ///
    /// Returns: 0 (scalar), 1 (vector), 2 (matrix), n (array)
    pub fn ndim(&self) -> usize {
        match self {
            LawData::Scalar(_) => 0,
            LawData::Vector(_) => 1,
            LawData::Matrix(_) => 2,
            LawData::Array(a) => a.ndim(),
        }
    }

    /// Get shape as a vector
    pub fn shape(&self) -> Vec<usize> {
        match self {
            LawData::Scalar(_) => vec![],
            LawData::Vector(v) => vec![v.len()],
            LawData::Matrix(m) => vec![m.nrows(), m.ncols()],
            LawData::Array(a) => a.shape().to_vec(),
        }
    }

    /// Get number of elements
    pub fn len(&self) -> usize {
        match self {
            LawData::Scalar(_) => 1,
            LawData::Vector(v) => v.len(),
            LawData::Matrix(m) => m.len(),
            LawData::Array(a) => a.len(),
        }
    }

    /// Check emptiness
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over elements in storage order
    ///
    /// Matrices are column-major (nalgebra), arrays row-major (ndarray).
    pub fn iter(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            LawData::Scalar(value) => Box::new(std::iter::once(*value)),
            LawData::Vector(v) => Box::new(v.iter().copied()),
            LawData::Matrix(m) => Box::new(m.iter().copied()),
            LawData::Array(a) => Box::new(a.iter().copied()),
        }
    }

    /// Copy elements into a `Vec` in storage order
    pub fn to_vec(&self) -> Vec<f64> {
        self.iter().collect()
    }

    // ======================================== Accessors ==========================================

    /// Get scalar value
    ///
    /// # Panics
    /// Panics if the data is not a scalar
    pub fn as_scalar(&self) -> f64 {
        match self {
            LawData::Scalar(value) => *value,
            _ => panic!("LawData is not a scalar: {}", self),
        }
    }

    /// Get scalar value if the data is a scalar
    pub fn try_as_scalar(&self) -> Option<f64> {
        match self {
            LawData::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// Get vector reference
    ///
    /// # Panics
    /// Panics if the data is not a vector
    pub fn as_vector(&self) -> &DVector<f64> {
        match self {
            LawData::Vector(value) => value,
            _ => panic!("LawData is not a vector: {}", self),
        }
    }

    /// Get vector reference if the data is a vector
    pub fn try_as_vector(&self) -> Option<&DVector<f64>> {
        match self {
            LawData::Vector(value) => Some(value),
            _ => None,
        }
    }

    /// Get matrix reference
    ///
    /// # Panics
    /// Panics if the data is not a matrix
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        match self {
            LawData::Matrix(value) => value,
            _ => panic!("LawData is not a matrix: {}", self),
        }
    }

    /// Get matrix reference if the data is a matrix
    pub fn try_as_matrix(&self) -> Option<&DMatrix<f64>> {
        match self {
            LawData::Matrix(value) => Some(value),
            _ => None,
        }
    }

    /// Get array reference
    ///
    /// # Panics
    /// Panics if the data is not an n-D array
    pub fn as_array(&self) -> &ArrayD<f64> {
        match self {
            LawData::Array(value) => value,
            _ => panic!("LawData is not an array: {}", self),
        }
    }

    /// Get array reference if the data is an n-D array
    pub fn try_as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            LawData::Array(value) => Some(value),
            _ => None,
        }
    }

    // ====================================== Map functions ========================================

    /// Apply `f` to every element, keeping the shape
    pub fn map<F>(&self, f: F) -> LawData
    where
        F: Fn(f64) -> f64 + Sync + Send,
    {
        match self {
            LawData::Scalar(value) => LawData::Scalar(f(*value)),
            LawData::Vector(v) => {
                LawData::Vector(DVector::from_vec(map_slice(v.as_slice(), &f)))
            }
            LawData::Matrix(m) => LawData::Matrix(DMatrix::from_vec(
                m.nrows(),
                m.ncols(),
                map_slice(m.as_slice(), &f),
            )),
            LawData::Array(a) => LawData::Array(a.mapv(f)),
        }
    }

    /// Apply a fallible `f` to every element, keeping the shape
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<F>(&self, f: F) -> Result<LawData, LawError>
    where
        F: Fn(f64) -> Result<f64, LawError> + Sync + Send,
    {
        match self {
            LawData::Scalar(value) => Ok(LawData::Scalar(f(*value)?)),
            LawData::Vector(v) => Ok(LawData::Vector(DVector::from_vec(try_map_slice(
                v.as_slice(),
                &f,
            )?))),
            LawData::Matrix(m) => Ok(LawData::Matrix(DMatrix::from_vec(
                m.nrows(),
                m.ncols(),
                try_map_slice(m.as_slice(), &f)?,
            ))),
            LawData::Array(a) => {
                let values = a.iter().map(|x| f(*x)).collect::<Result<Vec<_>, _>>()?;
                let array = ArrayD::from_shape_vec(a.raw_dim(), values)
                    .map_err(|_| LawError::ShapeMismatch {
                        expected: a.shape().to_vec(),
                        actual: vec![a.len()],
                    })?;
                Ok(LawData::Array(array))
            }
        }
    }

    /// Combine two containers elementwise
    ///
    /// A scalar broadcasts against any shape. Two non-scalar containers
    /// must have the same variant and shape.
    ///
    /// # Errors
    /// [`LawError::ShapeMismatch`] when shapes cannot be broadcast.
    pub fn zip_map<F>(&self, other: &LawData, f: F) -> Result<LawData, LawError>
    where
        F: Fn(f64, f64) -> f64 + Sync + Send,
    {
        use LawData::*;

        let mismatch = || LawError::ShapeMismatch {
            expected: self.shape(),
            actual: other.shape(),
        };

        match (self, other) {
            (Scalar(x), Scalar(y)) => Ok(Scalar(f(*x, *y))),
            (Scalar(x), data) => Ok(data.map(|y| f(*x, y))),
            (data, Scalar(y)) => Ok(data.map(|x| f(x, *y))),

            (Vector(x), Vector(y)) if x.len() == y.len() => {
                Ok(Vector(x.zip_map(y, |a, b| f(a, b))))
            }
            (Matrix(x), Matrix(y)) if x.shape() == y.shape() => {
                Ok(Matrix(x.zip_map(y, |a, b| f(a, b))))
            }
            (Array(x), Array(y)) if x.shape() == y.shape() => {
                let mut result = x.clone();
                result.zip_mut_with(y, |a, b| *a = f(*a, *b));
                Ok(Array(result))
            }

            _ => Err(mismatch()),
        }
    }
}

/// Map a slice, in parallel above the runtime threshold when enabled
fn map_slice<F>(values: &[f64], f: &F) -> Vec<f64>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    if values.len() > parallel_threshold() {
        #[cfg(feature = "parallel")]
        return values.par_iter().map(|x| f(*x)).collect();
    }
    values.iter().map(|x| f(*x)).collect()
}

/// Fallible counterpart of [`map_slice`]
fn try_map_slice<F>(values: &[f64], f: &F) -> Result<Vec<f64>, LawError>
where
    F: Fn(f64) -> Result<f64, LawError> + Sync + Send,
{
    if values.len() > parallel_threshold() {
        #[cfg(feature = "parallel")]
        return values.par_iter().map(|x| f(*x)).collect();
    }
    values.iter().map(|x| f(*x)).collect()
}

impl From<f64> for LawData {
    fn from(value: f64) -> Self {
        LawData::Scalar(value)
    }
}

impl From<Vec<f64>> for LawData {
    fn from(values: Vec<f64>) -> Self {
        LawData::from_vec(values)
    }
}

impl From<&[f64]> for LawData {
    fn from(values: &[f64]) -> Self {
        LawData::from_vec(values.to_vec())
    }
}

// ======================== Display ============================

impl fmt::Display for LawData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LawData::Scalar(value) => write!(f, "Scalar ({})", value),
            LawData::Vector(value) => write!(f, "Vector [{}]", value.len()),
            LawData::Matrix(value) => write!(f, "Matrix [{} * {}]", value.nrows(), value.ncols()),
            LawData::Array(value) => {
                let str_shape = value
                    .shape()
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(" * ");
                write!(f, "Array [{}]", str_shape)
            }
        }
    }
}

// ==================== Tests ====================
