use serde::{Deserialize, Serialize};

/// Customer registration form as submitted to the backend.
///
/// Empty strings mean "not provided"; the tax and identity numbers
/// (`gstin`, `aadhaar`, `pan`) are optional.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationForm {
    pub establishment_name: String,
    pub owner_name: String,
    pub designation: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub gstin: String,
    pub aadhaar: String,
    pub pan: String,
}

impl RegistrationForm {
    /// Copy with surrounding whitespace trimmed and GSTIN/PAN uppercased.
    ///
    /// Passwords are submitted exactly as typed.
    pub fn normalized(&self) -> Self {
        Self {
            establishment_name: self.establishment_name.trim().to_string(),
            owner_name: self.owner_name.trim().to_string(),
            designation: self.designation.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            street: self.street.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            pincode: self.pincode.trim().to_string(),
            gstin: self.gstin.trim().to_uppercase(),
            aadhaar: self.aadhaar.trim().to_string(),
            pan: self.pan.trim().to_uppercase(),
        }
    }
}

impl std::fmt::Debug for RegistrationForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationForm")
            .field("establishment_name", &self.establishment_name)
            .field("owner_name", &self.owner_name)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("city", &self.city)
            .field("state", &self.state)
            .field("pincode", &self.pincode)
            .finish_non_exhaustive()
    }
}
