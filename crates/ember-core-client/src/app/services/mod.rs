// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use journal_service::JournalService;
pub use session_service::SessionService;
pub use startup_service::StartupService;
pub use user_status_service::UserStatusService;

mod journal_service;
mod session_service;
mod startup_service;
mod user_status_service;
