use granite_core::access::{require_role, resolve, AuthState, Role, Route, RouteDecision, UserProfile};
use granite_core::error::GraniteError;

fn profile(role: Role) -> UserProfile {
    UserProfile {
        id: format!("{role}-1"),
        email: format!("{role}@example.com"),
        role,
        display_name: None,
        company_name: None,
        phone: None,
    }
}

fn signed_in_without_profile() -> AuthState {
    AuthState {
        loading: false,
        current_user: Some("u-1".into()),
        profile: None,
    }
}

#[test]
fn test_loading_wins_over_everything() {
    let state = AuthState {
        loading: true,
        ..AuthState::signed_in(profile(Role::Admin))
    };
    for route in [Route::Login, Route::Root, Route::Admin, Route::Buyer] {
        assert_eq!(resolve(&state, route), RouteDecision::Loading);
    }
}

#[test]
fn test_signed_out_routes() {
    let state = AuthState::default();
    assert_eq!(resolve(&state, Route::Login), RouteDecision::Render);
    assert_eq!(resolve(&state, Route::Register), RouteDecision::Render);
    assert_eq!(resolve(&state, Route::Root), RouteDecision::Redirect(Route::Login));
    assert_eq!(resolve(&state, Route::Admin), RouteDecision::Redirect(Route::Login));
    assert_eq!(resolve(&state, Route::Buyer), RouteDecision::Redirect(Route::Login));
}

#[test]
fn test_root_sends_users_to_their_dashboard() {
    assert_eq!(
        resolve(&AuthState::signed_in(profile(Role::Admin)), Route::Root),
        RouteDecision::Redirect(Route::Admin)
    );
    assert_eq!(
        resolve(&AuthState::signed_in(profile(Role::Buyer)), Route::Root),
        RouteDecision::Redirect(Route::Buyer)
    );
    assert_eq!(resolve(&signed_in_without_profile(), Route::Root), RouteDecision::SettingUp);
}

#[test]
fn test_signed_in_user_skips_login() {
    let state = AuthState::signed_in(profile(Role::Buyer));
    assert_eq!(resolve(&state, Route::Login), RouteDecision::Redirect(Route::Root));
    assert_eq!(resolve(&state, Route::Register), RouteDecision::Redirect(Route::Root));
}

#[test]
fn test_role_mismatch_redirects_home() {
    let buyer = AuthState::signed_in(profile(Role::Buyer));
    assert_eq!(resolve(&buyer, Route::Buyer), RouteDecision::Render);
    assert_eq!(resolve(&buyer, Route::Admin), RouteDecision::Redirect(Route::Buyer));

    let admin = AuthState::signed_in(profile(Role::Admin));
    assert_eq!(resolve(&admin, Route::Admin), RouteDecision::Render);
    assert_eq!(resolve(&admin, Route::Buyer), RouteDecision::Redirect(Route::Admin));
}

#[test]
fn test_missing_profile_on_protected_route_goes_to_login() {
    let state = signed_in_without_profile();
    assert_eq!(resolve(&state, Route::Admin), RouteDecision::Redirect(Route::Login));
}

#[test]
fn test_require_role() {
    assert!(require_role(&profile(Role::Admin), Role::Admin).is_ok());
    let err = require_role(&profile(Role::Buyer), Role::Admin).unwrap_err();
    assert!(matches!(err, GraniteError::Unauthorized(_)));
}

#[test]
fn test_role_parse_and_display() {
    assert_eq!("Admin".parse::<Role>().unwrap(), Role::Admin);
    assert_eq!(Role::Buyer.to_string(), "buyer");
    assert!("owner".parse::<Role>().is_err());
}
