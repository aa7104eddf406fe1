//! Handler for the service root.

/// Plain-text banner with the service name and version.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler() -> String {
    format!(
        "{} {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}
