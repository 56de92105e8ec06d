pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::account_status::AccountStatus;
pub use models::cached_profile::CachedProfile;
pub use models::credentials::Credentials;
pub use models::principal::Principal;
pub use models::registration_form::RegistrationForm;
pub use models::session_state::SessionState;
pub use models::surface::Surface;
pub use validation::{FieldErrors, validate_credentials, validate_registration};
