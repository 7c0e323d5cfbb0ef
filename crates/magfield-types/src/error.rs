use thiserror::Error;

#[derive(Error, Debug)]
pub enum MagfieldError {
    #[error("operands could not be broadcast together with shapes {lhs:?} {rhs:?}")]
    ShapeMismatch { lhs: Vec<usize>, rhs: Vec<usize> },

    #[error("Shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
}

pub type MagfieldResult<T> = Result<T, MagfieldError>;
