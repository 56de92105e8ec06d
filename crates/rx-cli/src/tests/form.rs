use crate::CliError;
use crate::form::read_form;

use std::io::Write;

use tempfile::NamedTempFile;

#[test]
fn given_camel_case_json_when_read_then_form_populated() {
    // Given
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"establishmentName":"Sunrise Medicals","phoneNumber":"9876543210","pan":"abcde1234f"}}"#
    )
    .unwrap();

    // When
    let form = read_form(file.path()).unwrap();

    // Then
    assert_eq!(form.establishment_name, "Sunrise Medicals");
    assert_eq!(form.phone_number, "9876543210");
    assert_eq!(form.pan, "abcde1234f");
    assert!(form.city.is_empty());
}

#[test]
fn given_missing_file_when_read_then_form_read_error() {
    let result = read_form(std::path::Path::new("/definitely/not/here.json"));

    assert!(matches!(result, Err(CliError::FormRead { .. })));
}

#[test]
fn given_invalid_json_when_read_then_form_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "establishmentName=Sunrise").unwrap();

    let result = read_form(file.path());

    assert!(matches!(result, Err(CliError::FormParse { .. })));
}
