/// # Greeting Response
///
/// Fixed payload returned by the API root, used as a liveness probe.
///
/// ## Example JSON
/// ```json
/// { "message": "Hello World" }
/// ```
pub mod greeting;

/// # Status Check Records
///
/// The persisted [`StatusCheck`] entity, its creation input
/// [`StatusCheckCreate`] and the MongoDB document shape it is stored as.
///
/// ## Example JSON
/// ```json
/// {
///   "id": "4b7c1f0e-2a53-4c8e-9d1e-6f0a3b2c1d4e",
///   "client_name": "alice",
///   "timestamp": "2024-03-10T15:30:45.123Z"
/// }
/// ```
///
/// [`StatusCheck`]: crate::models::status_check::StatusCheck
/// [`StatusCheckCreate`]: crate::models::status_check::StatusCheckCreate
pub mod status_check;
