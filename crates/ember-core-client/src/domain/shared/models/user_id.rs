// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use ember_utils::{id_int, id_string};

id_string!(
    /// The identifier the authentication provider assigned to the user.
    UserId
);

id_int!(
    /// The identifier of the user in the Ember backend.
    BackendUserId
);
