use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::BuyerProfile;
use crate::error::{GraniteError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Buyer,
}

impl Role {
    /// Dashboard a user with this role lands on.
    pub fn home(&self) -> Route {
        match self {
            Self::Admin => Route::Admin,
            Self::Buyer => Route::Buyer,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Buyer => write!(f, "buyer"),
        }
    }
}

impl FromStr for Role {
    type Err = GraniteError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "buyer" => Ok(Self::Buyer),
            other => Err(GraniteError::Unauthorized(format!("unknown role '{other}'"))),
        }
    }
}

/// Profile row of a signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl UserProfile {
    pub fn buyer_profile(&self) -> BuyerProfile {
        BuyerProfile {
            email: self.email.clone(),
            display_name: self.display_name.clone(),
            company_name: self.company_name.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// What the session provider currently knows about the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub loading: bool,
    /// Authenticated account id, if signed in.
    pub current_user: Option<String>,
    /// Profile row; may lag behind `current_user` right after sign-up.
    pub profile: Option<UserProfile>,
}

impl AuthState {
    pub fn signed_in(profile: UserProfile) -> Self {
        Self {
            loading: false,
            current_user: Some(profile.id.clone()),
            profile: Some(profile),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Root,
    Admin,
    Buyer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; show a spinner.
    Loading,
    Render,
    Redirect(Route),
    /// Signed in, but the profile row does not exist yet.
    SettingUp,
}

/// Decide what to show for `route` given the current session.
pub fn resolve(state: &AuthState, route: Route) -> RouteDecision {
    if state.loading {
        return RouteDecision::Loading;
    }
    let signed_in = state.current_user.is_some();

    match route {
        Route::Login | Route::Register => {
            if signed_in {
                RouteDecision::Redirect(Route::Root)
            } else {
                RouteDecision::Render
            }
        }
        Route::Root => match (&state.profile, signed_in) {
            (_, false) => RouteDecision::Redirect(Route::Login),
            (Some(profile), true) => RouteDecision::Redirect(profile.role.home()),
            (None, true) => RouteDecision::SettingUp,
        },
        Route::Admin => guard(state, Role::Admin),
        Route::Buyer => guard(state, Role::Buyer),
    }
}

fn guard(state: &AuthState, required: Role) -> RouteDecision {
    if state.current_user.is_none() {
        return RouteDecision::Redirect(Route::Login);
    }
    match &state.profile {
        None => RouteDecision::Redirect(Route::Login),
        Some(profile) if profile.role != required => RouteDecision::Redirect(profile.role.home()),
        Some(_) => RouteDecision::Render,
    }
}

/// Fail unless `profile` has `role`. Used before catalog writes.
pub fn require_role(profile: &UserProfile, role: Role) -> Result<()> {
    if profile.role == role {
        Ok(())
    } else {
        Err(GraniteError::Unauthorized(format!(
            "{} is a {}, {} required",
            profile.email, profile.role, role
        )))
    }
}
