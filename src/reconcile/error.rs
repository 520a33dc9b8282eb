use thiserror::Error;

/// Error type for rejected reconciliation calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// The options position received a legacy-style bare value instead of
    /// the options struct. Surfaced before any work begins.
    #[error(
        "received a bare {received} in the options position; the API has changed and \
         non-numerical property handling is now configured on the options struct: \
         `ReconcileOptions {{ include_non_numerical_properties: \
         PropertyInclusion::Keys(vec![\"foo\".into()]), ..ReconcileOptions::default() }}`"
    )]
    InvalidOptions { received: &'static str },
}
