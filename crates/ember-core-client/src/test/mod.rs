// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIDProvider;
pub use mock_app_dependencies::{MockAppDependencies, MockAuthBootstrapperDependencies};


pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_auth_tokens as auth_tokens, mock_backend_user_id as backend_user_id,
        mock_reference_date as reference_date, mock_signed_in_context as signed_in_context,
        mock_user as user,
    };
}
