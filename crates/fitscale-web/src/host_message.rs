#![forbid(unsafe_code)]

//! JSON host messages.
//!
//! A JS shim can serialize window and element events into small JSON objects
//! and hand them across the boundary as strings:
//!
//! ```json
//! {"kind":"mount","width":1920,"height":1080}
//! {"kind":"resize","width":960,"height":1080}
//! {"kind":"element","width":960,"height":540}
//! {"kind":"advance","dt_ms":16}
//! {"kind":"unmount"}
//! ```
//!
//! [`WebScaleSession::dispatch`] maps each message onto the matching session
//! call.

use core::time::Duration;

use fitscale_core::ObservedSize;
use fitscale_runtime::{RecomputeOutcome, ResizeOutcome};
use fitscale_style::StyleTarget;
use serde::Deserialize;

use crate::WebScaleSession;

/// Errors from parsing a host message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostMessageError {
    /// Malformed JSON or unknown `kind`.
    Json(String),
    /// A size or duration that cannot be used.
    InvalidValue(&'static str),
}

impl core::fmt::Display for HostMessageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
            Self::InvalidValue(field) => write!(f, "invalid value for {field}"),
        }
    }
}

impl std::error::Error for HostMessageError {}

/// One host event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostMessage {
    /// Element attached with this layout size.
    Mount { width: f64, height: f64 },
    /// Window inner size changed.
    Resize { width: f64, height: f64 },
    /// Element layout size changed.
    Element { width: f64, height: f64 },
    /// Host time advanced.
    Advance { dt_ms: u64 },
    /// Teardown.
    Unmount,
}

/// What a dispatched message did.
#[derive(Debug, Clone, PartialEq)]
pub enum HostReply {
    /// A mount or advance; `None` when nothing ran.
    Recompute(Option<RecomputeOutcome>),
    /// A resize notification.
    Resize(ResizeOutcome),
    /// Teardown; whether a pending recompute was cancelled.
    Unmounted { cancelled: bool },
}

/// Parse one JSON host message.
pub fn parse_host_message(json: &str) -> Result<HostMessage, HostMessageError> {
    let message: HostMessage =
        serde_json::from_str(json).map_err(|e| HostMessageError::Json(e.to_string()))?;
    match message {
        HostMessage::Mount { width, height }
        | HostMessage::Resize { width, height }
        | HostMessage::Element { width, height } => {
            if !width.is_finite() || width < 0.0 {
                return Err(HostMessageError::InvalidValue("width"));
            }
            if !height.is_finite() || height < 0.0 {
                return Err(HostMessageError::InvalidValue("height"));
            }
        }
        HostMessage::Advance { .. } | HostMessage::Unmount => {}
    }
    Ok(message)
}

impl<T: StyleTarget> WebScaleSession<T> {
    /// Apply one host message.
    pub fn dispatch(&mut self, message: HostMessage) -> HostReply {
        match message {
            HostMessage::Mount { width, height } => {
                HostReply::Recompute(self.mount(ObservedSize::new(width, height)))
            }
            HostMessage::Resize { width, height } => HostReply::Resize(self.resize(width, height)),
            HostMessage::Element { width, height } => {
                HostReply::Resize(self.resize_element(ObservedSize::new(width, height)))
            }
            HostMessage::Advance { dt_ms } => {
                HostReply::Recompute(self.advance(Duration::from_millis(dt_ms)))
            }
            HostMessage::Unmount => HostReply::Unmounted {
                cancelled: self.unmount(),
            },
        }
    }

    /// Parse and apply one JSON host message.
    pub fn dispatch_json(&mut self, json: &str) -> Result<HostReply, HostMessageError> {
        parse_host_message(json).map(|message| self.dispatch(message))
    }
}
