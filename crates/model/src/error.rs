//! Error types for model construction

/// Errors that can occur when building a model from a raw object
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The raw object was structurally incompatible with the model,
    /// e.g. `userData` holding a number instead of an object.
    #[error("incompatible object shape at `{path}`: {source}")]
    Shape {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
}
