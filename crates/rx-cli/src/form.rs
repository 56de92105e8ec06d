use crate::{CliError, CliResult};

use std::path::Path;

use rx_core::RegistrationForm;

/// Read a registration form from a camelCase JSON file. Missing fields are empty.
pub fn read_form(path: &Path) -> CliResult<RegistrationForm> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::form_read(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CliError::form_parse(path, e))
}
