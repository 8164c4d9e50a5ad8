// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::navigation::models::StartupState;

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The startup sequence moved to a new phase.
    StartupStateChanged { state: StartupState },

    /// A message should be shown to the user.
    ToastRequested { toast: Toast },

    /// Tracking records were created, changed or deleted on the server. Derived statistics
    /// should be reloaded.
    AnalyticsInvalidated,

    /// The list of cached tracking records changed.
    TrackingRecordsChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}
