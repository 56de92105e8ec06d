pub mod account_status;
pub mod cached_profile;
pub mod credentials;
pub mod principal;
pub mod registration_form;
pub mod session_state;
pub mod surface;
