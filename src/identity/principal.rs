use serde::{Deserialize, Serialize};

/// Role payload some identity backends attach to the user instead of (or in
/// addition to) a plain role string.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoleData {
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

/// Authenticated user as handed over by the authentication collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
    #[serde(default)]
    pub role_data: Option<RoleData>,
}

impl AuthUser {
    pub fn with_role(role: &str) -> Self { Self { role: Some(role.to_string()), ..Default::default() } }

    pub fn with_permissions<S: Into<String>>(mut self, perms: impl IntoIterator<Item = S>) -> Self {
        self.permissions = Some(perms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_role_data<S: Into<String>>(mut self, perms: impl IntoIterator<Item = S>) -> Self {
        self.role_data = Some(RoleData { permissions: Some(perms.into_iter().map(Into::into).collect()) });
        self
    }
}

/// Authentication state snapshot consumed by the permission layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub is_loading: bool,
}

impl AuthState {
    pub fn loading() -> Self { Self { user: None, is_authenticated: false, is_loading: true } }

    pub fn anonymous() -> Self { Self::default() }

    pub fn signed_in(user: AuthUser) -> Self { Self { user: Some(user), is_authenticated: true, is_loading: false } }

    pub fn status(&self) -> AuthStatus {
        if self.is_loading { AuthStatus::Loading }
        else if self.is_authenticated { AuthStatus::Authenticated }
        else { AuthStatus::Anonymous }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthStatus {
    Loading,
    Anonymous,
    Authenticated,
}
