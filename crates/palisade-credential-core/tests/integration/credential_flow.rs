use palisade_credential_core::{
    calculate_password_strength, generate_password, is_weak, mask_credential,
    password_strength_text, CharsetConfig, StrengthLabel, StrengthText, DEFAULT_PASSWORD_LENGTH,
    DEFAULT_VISIBLE_CHARS, MAX_MASK_RUN,
};

/// The full "new password" pipeline with default settings.
///
/// A default-config 16-character password scores at least 46 by
/// construction: 40 length + 40 variety, minus at most 24 repetition debt
/// (the four class seeds are always distinct) and both 5-point penalties.
/// That floor clears the weak-advisory threshold, so generated defaults
/// never trip the warning.
#[test]
fn generated_defaults_never_trip_the_weak_advisory() {
    for _ in 0..50 {
        let password = generate_password(DEFAULT_PASSWORD_LENGTH, &CharsetConfig::default())
            .expect("generation should succeed");
        let score = calculate_password_strength(&password);
        assert!(score >= 46, "default password scored {score}: {password}");
        assert!(!is_weak(score));
    }
}

#[test]
fn generate_score_band_mask_pipeline() {
    let password = generate_password(DEFAULT_PASSWORD_LENGTH, &CharsetConfig::default())
        .expect("generation should succeed");
    assert_eq!(password.len(), DEFAULT_PASSWORD_LENGTH);

    let score = calculate_password_strength(&password);
    let info = password_strength_text(score);
    assert_eq!(info.text, StrengthLabel::from_score(score).as_str());
    assert!(!info.color.is_empty());

    // Display form: 2 visible at each end, capped run in the middle.
    let masked = mask_credential(&password, DEFAULT_VISIBLE_CHARS);
    assert_eq!(
        masked.chars().count(),
        DEFAULT_VISIBLE_CHARS * 2 + MAX_MASK_RUN
    );
    assert!(masked.starts_with(&password[..DEFAULT_VISIBLE_CHARS]));
    assert!(masked.ends_with(&password[password.len() - DEFAULT_VISIBLE_CHARS..]));
    assert_ne!(masked, password);
}

/// A stored username flows through masking the way the vault UI displays
/// it; scoring stays independent of how the string was produced.
#[test]
fn user_supplied_credentials_flow() {
    let username = "new_user";
    assert_eq!(mask_credential(username, DEFAULT_VISIBLE_CHARS), "ne••••er");

    let typed_password = "Password123";
    let score = calculate_password_strength(typed_password);
    assert_eq!(score, 67);
    assert_eq!(StrengthLabel::from_score(score), StrengthLabel::Strong);
}

/// Boundary contract pinned across the score/band seam: 80 is very
/// strong, 79 is strong.
#[test]
fn band_boundary_at_eighty() {
    assert_eq!(StrengthLabel::from_score(80), StrengthLabel::VeryStrong);
    assert_eq!(StrengthLabel::from_score(79), StrengthLabel::Strong);
}

/// The DTOs cross the IPC boundary as camelCase JSON; both directions
/// must round-trip.
#[test]
fn boundary_dtos_round_trip() {
    let config = CharsetConfig {
        uppercase: true,
        lowercase: false,
        digits: true,
        symbols: false,
    };
    let json = serde_json::to_string(&config).expect("serialize should succeed");
    let back: CharsetConfig = serde_json::from_str(&json).expect("deserialize should succeed");
    assert_eq!(back.uppercase, config.uppercase);
    assert_eq!(back.lowercase, config.lowercase);
    assert_eq!(back.digits, config.digits);
    assert_eq!(back.symbols, config.symbols);

    let info = password_strength_text(55);
    let json = serde_json::to_string(&info).expect("serialize should succeed");
    let back: StrengthText = serde_json::from_str(&json).expect("deserialize should succeed");
    assert_eq!(back, info);
}
