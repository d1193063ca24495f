//! HTTP handlers for Karnataka Disaster Watch

pub mod earthquake;
pub mod flood;
pub mod health;
pub mod weather;
pub mod weather_ai;

pub use earthquake::*;
pub use flood::*;
pub use health::*;
pub use weather::*;
pub use weather_ai::*;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::{validate_place_name, Sourced};

/// Response header naming where the payload came from (`live` or `synthetic`)
pub const DATA_SOURCE_HEADER: &str = "x-data-source";

/// Serialize a payload and tag it with its provenance
pub fn sourced_json<T: Serialize>(data: Sourced<T>) -> Response {
    let provenance = data.provenance();
    (
        [(DATA_SOURCE_HEADER, provenance.as_str())],
        Json(data.into_inner()),
    )
        .into_response()
}

/// Resolve an optional place-name query parameter.
///
/// Missing, blank, or malformed values resolve to `default`, the same as an
/// unknown name.
pub fn place_param(value: Option<String>, default: &str) -> String {
    match value.as_deref().map(str::trim) {
        None | Some("") => default.to_string(),
        Some(name) => match validate_place_name(name) {
            Ok(()) => name.to_string(),
            Err(reason) => {
                tracing::debug!(%reason, fallback = %default, "Ignoring place name");
                default.to_string()
            }
        },
    }
}
