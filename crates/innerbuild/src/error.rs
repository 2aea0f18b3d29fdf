use innerbuild_model::node::NodeError;
use thiserror::Error as ThisError;

///
/// Error
///
/// Boundary error for a generation run. The model is validated once
/// before any stage runs; the stages themselves are infallible over a
/// validated tree, so a failure here means no stage has executed.
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("malformed class model: {0}")]
    MalformedModel(#[from] NodeError),
}
