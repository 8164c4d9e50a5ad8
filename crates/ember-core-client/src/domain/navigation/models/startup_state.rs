// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// The phases of the startup sequence.
///
/// ```text
/// Idle -> Bootstrapping -> AwaitingNavTarget -> Committed
///              |
///              +-> NetworkError -> (retry) -> Bootstrapping
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StartupState {
    #[default]
    Idle,
    Bootstrapping,
    /// A route was determined and waits for the navigation container.
    AwaitingNavTarget,
    /// The initial route was handed to the navigation container. Terminal.
    Committed,
    /// Bootstrapping failed because the device is offline or the backend could not be
    /// reached. `message` can be shown to the user.
    NetworkError { message: String },
}

impl StartupState {
    /// True until the initial route was committed or startup failed.
    pub fn is_initializing(&self) -> bool {
        matches!(
            self,
            StartupState::Idle | StartupState::Bootstrapping | StartupState::AwaitingNavTarget
        )
    }
}
