use http::StatusCode;

/// Failures a caller may want to tell apart.
///
/// Client methods return [`anyhow::Error`], use [`anyhow::Error::downcast_ref`] to match these.
#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// The server answered with a status other than `200 OK` that is not an HTTP error.
    #[display("unexpected response status: {status}")]
    UnexpectedStatus { status: StatusCode },

    /// The response carries no prices for the requested period.
    #[display("no energy prices found for this period")]
    NoData,
}
