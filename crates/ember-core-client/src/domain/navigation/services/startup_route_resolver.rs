// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::auth::models::BootstrapAuthResult;
use crate::domain::navigation::models::{AuthMode, PendingRoute, Route};
use crate::domain::user_status::models::{UserStatusAction, UserStatusId};

/// Determines the initial route after bootstrapping.
///
/// - Without stored credentials the user lands on the signup screen.
/// - A stored but rejected session leads to the login screen.
/// - A valid session routes according to the action of the user's status. Users without a
///   status (or with status id `0`) and users whose status is unknown to `status_lookup`
///   are sent to the questionnaire.
pub fn determine_startup_route(
    result: &BootstrapAuthResult,
    status_lookup: impl Fn(&UserStatusId) -> Option<UserStatusAction>,
) -> PendingRoute {
    if !result.is_authenticated {
        return PendingRoute::auth(AuthMode::Signup);
    }

    if !result.is_session_valid {
        return PendingRoute::auth(AuthMode::Login);
    }

    let Some(user) = &result.user else {
        return PendingRoute::new(Route::Auth);
    };

    // The backend reports `0` for users that were never assigned a status.
    let Some(status_id) = user.user_status_id.filter(|id| id.value() != 0) else {
        return PendingRoute::new(Route::Questionnaire);
    };

    match status_lookup(&status_id) {
        Some(action) => PendingRoute::new(route_for_status_action(action)),
        None => PendingRoute::new(Route::Questionnaire),
    }
}

pub fn route_for_status_action(action: UserStatusAction) -> Route {
    match action {
        UserStatusAction::NavigateToQuestionnaire => Route::Questionnaire,
        UserStatusAction::NavigateToPaywall => Route::Paywall,
        UserStatusAction::NavigateToHome | UserStatusAction::PlaceholderCall => Route::Home,
    }
}
