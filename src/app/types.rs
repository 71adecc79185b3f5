// src/app/types.rs
use super::data::Movie;
use super::remote::TransportError;

// ---- cross-thread messages ----
pub enum RemoteMsg {
    Loaded(Result<Vec<Movie>, TransportError>),
    Created(Result<Movie, TransportError>),
    Deleted {
        id: i64,
        result: Result<bool, TransportError>,
    },
    Details {
        id: i64,
        result: Result<Movie, TransportError>,
    },
}

impl RemoteMsg {
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Loaded(_) => "load",
            Self::Created(_) => "create",
            Self::Deleted { .. } => "delete",
            Self::Details { .. } => "details",
        }
    }
}

// ---- UI actions collected while painting, applied afterwards ----
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardAction {
    Delete(i64),
    Details(i64),
}
