//! File format catalog trait.

/// Lookup of what the portal can do with an uploaded file extension.
///
/// Drives the branch between exact mesh parsing and placeholder geometry
/// in the intake step. Extensions are compared lowercase without the dot.
pub trait FormatCatalog: Send + Sync {
    /// Whether files with this extension are accepted at all.
    fn accepts(&self, extension: &str) -> bool;

    /// Whether exact geometry parsing is available for this extension.
    ///
    /// Accepted extensions without exact parsing take the placeholder
    /// geometry path.
    fn exact_geometry(&self, extension: &str) -> bool;
}
