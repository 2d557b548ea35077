//! Transform pipeline infrastructure
//!
//! The parser is organized as a sequence of composable stages. Any type
//! implementing [`Runnable<I, O>`] can transform input of type `I` to
//! output of type `O`, and stages chain with [`Transform::then`] as long as
//! their types line up:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(SchemaNormalization::new())  // String → String
//!     .then(Parsing::new())              // String → Node
//!     .then(CompositeExpansion::new());  // Node → Node
//! ```
//!
//! The compiler enforces that output types match input types at each stage.
//! Common pipelines are pre-built as static references in [`standard`];
//! individual stages live in [`stages`].

pub mod stages;
pub mod standard;

use std::fmt;

/// Error that can occur during transformation
#[derive(Debug, Clone, PartialEq)]
pub enum TransformError {
    /// Generic error with message
    Error(String),
    /// Stage failed with specific error
    StageFailed { stage: String, message: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::Error(msg) => write!(f, "{}", msg),
            TransformError::StageFailed { stage, message } => {
                write!(f, "Stage '{}' failed: {}", stage, message)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::Error(s)
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::Error(s.to_string())
    }
}

/// Trait for anything that can transform an input to an output
///
/// Implemented by the individual stages; the [`Transform`] struct composes
/// multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, TransformError>;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` represents a transformation from type `I` to type `O`,
/// built by chaining stages with [`Transform::then`].
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, TransformError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, TransformError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage, returning a new transform with extended output type
    ///
    /// Chains this transform's output into the next stage's input. The
    /// compiler ensures the stage's input type matches this transform's
    /// output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, TransformError> {
        (self.run_fn)(input)
    }
}

// Transforms can themselves be used as stages
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, TransformError> {
        Transform::run(self, input)
    }
}
