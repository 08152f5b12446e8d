/// Error types shared across catalog crates.
///
/// Filtering itself never fails. These errors cover the input boundary, where a
/// raw control value has to be mapped onto a facet domain before it reaches the
/// filter. Application crates wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("unknown {facet} '{value}'. Available: {}", .allowed.join(", "))]
    UnknownFacetValue {
        facet: String,
        value: String,
        allowed: Vec<String>,
    },
}
