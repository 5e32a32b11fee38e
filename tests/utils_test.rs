use daylist::config::Config;
use daylist::spotify::auth::authorize_url;
use daylist::utils::*;
use reqwest::Url;

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA256 digest, base64 without padding
    assert_eq!(challenge.len(), 43);

    // Should be deterministic - same input produces same output
    let challenge2 = generate_code_challenge(verifier);
    assert_eq!(challenge, challenge2);

    // Different input should produce different output
    let challenge3 = generate_code_challenge("different_verifier");
    assert_ne!(challenge, challenge3);

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_known_value() {
    // Example from RFC 7636, appendix B
    let challenge = generate_code_challenge("dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk");
    assert_eq!(challenge, "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM");
}

#[test]
fn test_generate_state() {
    let state = generate_state();
    assert_eq!(state.len(), 32);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Every login gets its own state
    assert_ne!(state, generate_state());
}

#[test]
fn test_authorize_url_parameters() {
    let config = Config::new("my-client-id");
    let url = authorize_url(&config, "some-state", "some-challenge").unwrap();
    let url = Url::parse(&url).unwrap();

    assert_eq!(url.host_str(), Some("accounts.spotify.com"));
    assert_eq!(url.path(), "/authorize");

    let param = |key: &str| {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    };

    assert_eq!(param("client_id").as_deref(), Some("my-client-id"));
    assert_eq!(param("response_type").as_deref(), Some("code"));
    assert_eq!(
        param("redirect_uri").as_deref(),
        Some("http://localhost:8080/callback")
    );
    assert_eq!(param("state").as_deref(), Some("some-state"));
    assert_eq!(param("code_challenge").as_deref(), Some("some-challenge"));
    assert_eq!(param("code_challenge_method").as_deref(), Some("S256"));
    assert_eq!(
        param("scope").as_deref(),
        Some("playlist-read-private playlist-modify-private user-read-private")
    );
}

#[test]
fn test_authorize_url_rejects_invalid_base() {
    let mut config = Config::new("my-client-id");
    config.auth_url = "not a url".to_string();

    let result = authorize_url(&config, "state", "challenge");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("invalid authorization url"));
}
