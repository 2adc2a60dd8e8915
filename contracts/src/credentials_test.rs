use super::*;

#[test]
fn accepts_well_formed_pair() {
    let creds = Credentials::new("  a@b.com ", "secret1").unwrap();
    assert_eq!(creds.email, "a@b.com");
    assert_eq!(creds.password, "secret1");
}

#[test]
fn password_of_exactly_six_chars_is_enough() {
    assert!(Credentials::new("a@b.com", "123456").is_ok());
}

#[test]
fn short_password_rejected() {
    assert_eq!(Credentials::new("a@b.com", "12345"), Err(CredentialError::PasswordTooShort));
}

#[test]
fn password_length_counts_chars_not_bytes() {
    assert_eq!(Credentials::new("a@b.com", "ñññññ"), Err(CredentialError::PasswordTooShort));
    assert!(Credentials::new("a@b.com", "ññññññ").is_ok());
}

#[test]
fn email_checked_before_password() {
    assert_eq!(Credentials::new("nope", "1"), Err(CredentialError::InvalidEmail));
}

#[test]
fn email_shapes() {
    assert!(is_valid_email("user.name+tag@mail.example.org"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@@b.com"));
    assert!(!is_valid_email("a b@c.com"));
}

#[test]
fn debug_redacts_password() {
    let creds = Credentials::new("a@b.com", "hunter22").unwrap();
    let printed = format!("{creds:?}");
    assert!(printed.contains("a@b.com"));
    assert!(!printed.contains("hunter22"));
}
