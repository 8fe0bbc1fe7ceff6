#[derive(Debug)]
pub enum ApplicationError {
    /// No session token is stored, or the remote service rejected it.
    Unauthorized,
    /// The identity service refused the credentials.
    AuthFailed(String),
    /// Transport failure or unexpected status from a remote service.
    Upstream(String),
    /// A remote payload was missing fields or could not be decoded.
    DataShape(String),
    BadRequest(String),
    InternalError(String),
}
