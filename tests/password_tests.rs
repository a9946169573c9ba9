use logistics_backend::util::password::{PasswordError, PasswordUtils, PasswordUtilsImpl};

#[test]
fn test_hash_password_produces_argon2_hash() {
    let hash = PasswordUtilsImpl::hash_password("correct horse battery staple").unwrap();
    assert!(hash.starts_with("$argon2"));
}

#[test]
fn test_verify_correct_password() {
    let password = "correct horse battery staple";
    let hash = PasswordUtilsImpl::hash_password(password).unwrap();
    assert!(PasswordUtilsImpl::verify_password(password, &hash).unwrap());
}

#[test]
fn test_verify_wrong_password() {
    let hash = PasswordUtilsImpl::hash_password("correct horse battery staple").unwrap();
    assert!(!PasswordUtilsImpl::verify_password("wrong password", &hash).unwrap());
}

#[test]
fn test_verify_invalid_hash_format() {
    let result = PasswordUtilsImpl::verify_password("anything", "not-a-valid-hash");
    assert!(matches!(result, Err(PasswordError::InvalidHashFormat)));
}

#[test]
fn test_same_password_hashes_differently() {
    // Random salts mean two hashes of the same password never match
    let first = PasswordUtilsImpl::hash_password("repeated password").unwrap();
    let second = PasswordUtilsImpl::hash_password("repeated password").unwrap();
    assert_ne!(first, second);
    assert!(PasswordUtilsImpl::verify_password("repeated password", &first).unwrap());
    assert!(PasswordUtilsImpl::verify_password("repeated password", &second).unwrap());
}
