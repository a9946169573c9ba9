use logistics_backend::config::JwtConfig;
use logistics_backend::util::jwt::*;

fn create_test_jwt_utils() -> JwtTokenUtilsImpl {
    JwtTokenUtilsImpl::new(JwtConfig::from_test_env())
}

struct TestUser {
    id: String,
    email: String,
    role: String,
}

impl TestUser {
    fn new_customer() -> Self {
        Self {
            id: "665f1f77bcf86cd799439011".to_string(),
            email: "customer@example.com".to_string(),
            role: "customer".to_string(),
        }
    }

    fn new_admin() -> Self {
        Self {
            id: "665f1f77bcf86cd799439099".to_string(),
            email: "admin@example.com".to_string(),
            role: "admin".to_string(),
        }
    }
}

#[test]
fn test_token_type_as_str() {
    assert_eq!(TokenType::Access.as_str(), "access");
    assert_eq!(TokenType::Refresh.as_str(), "refresh");
}

#[test]
fn test_generate_access_token_success() {
    let jwt_utils = create_test_jwt_utils();
    let user = TestUser::new_customer();

    let token = jwt_utils
        .generate_access_token(&user.id, &user.email, &user.role)
        .unwrap();
    assert!(!token.is_empty());

    let claims = jwt_utils.validate_access_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.email, user.email);
    assert_eq!(claims.role, user.role);
    assert_eq!(claims.token_type, "access");
}

#[test]
fn test_generate_refresh_token_success() {
    let jwt_utils = create_test_jwt_utils();
    let user = TestUser::new_admin();

    let token = jwt_utils
        .generate_refresh_token(&user.id, &user.email, &user.role)
        .unwrap();

    let claims = jwt_utils.validate_refresh_token(&token).unwrap();
    assert_eq!(claims.sub, user.id);
    assert_eq!(claims.role, "admin");
    assert_eq!(claims.token_type, "refresh");
}

#[test]
fn test_generate_token_pair() {
    let jwt_utils = create_test_jwt_utils();
    let user = TestUser::new_customer();

    let pair = jwt_utils
        .generate_token_pair(&user.id, &user.email, &user.role)
        .unwrap();

    assert_eq!(pair.token_type, "Bearer");
    assert_eq!(
        pair.expires_in,
        jwt_utils.jwt_config.access_token_expiration * 60
    );
    assert!(jwt_utils.validate_access_token(&pair.access_token).is_ok());
    assert!(jwt_utils.validate_refresh_token(&pair.refresh_token).is_ok());
}

#[test]
fn test_access_token_rejected_as_refresh() {
    let jwt_utils = create_test_jwt_utils();
    let user = TestUser::new_customer();

    let access = jwt_utils
        .generate_access_token(&user.id, &user.email, &user.role)
        .unwrap();

    let result = jwt_utils.validate_refresh_token(&access);
    assert!(matches!(result, Err(JwtError::InvalidTokenType { .. })));
}

#[test]
fn test_tampered_token_rejected() {
    let jwt_utils = create_test_jwt_utils();
    let user = TestUser::new_customer();

    let mut token = jwt_utils
        .generate_access_token(&user.id, &user.email, &user.role)
        .unwrap();
    token.push('x');

    assert!(jwt_utils.validate_access_token(&token).is_err());
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let jwt_utils = create_test_jwt_utils();
    let mut other_config = JwtConfig::from_test_env();
    other_config.jwt_secret = "another-secret-key-that-is-long-enough-too".to_string();
    let other_utils = JwtTokenUtilsImpl::new(other_config);

    let user = TestUser::new_customer();
    let token = other_utils
        .generate_access_token(&user.id, &user.email, &user.role)
        .unwrap();

    assert!(jwt_utils.validate_access_token(&token).is_err());
}

#[test]
fn test_extract_token_from_header() {
    let jwt_utils = create_test_jwt_utils();

    let token = jwt_utils
        .extract_token_from_header("Bearer abc.def.ghi")
        .unwrap();
    assert_eq!(token, "abc.def.ghi");

    assert!(jwt_utils.extract_token_from_header("Basic abc").is_err());
    assert!(jwt_utils.extract_token_from_header("Bearer ").is_err());
}
