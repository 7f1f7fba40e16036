use contracts::system::auth::{AdminUser, PermissionAction};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub admin: Option<AdminUser>,
}

/// Auth context provider component.
///
/// On mount, a stored token is validated once against `/admin/me`; an invalid
/// token is simply cleared and the login page stays up.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        spawn_local(async move {
            if let Some(token) = storage::get_token() {
                match api::get_current_admin(&token).await {
                    Ok(admin) => {
                        set_auth_state.set(AuthState {
                            token: Some(token),
                            admin: Some(admin),
                        });
                    }
                    Err(e) => {
                        log::warn!("stored token rejected, clearing session: {}", e);
                        storage::clear_token();
                    }
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

fn check(auth_state: &AuthState, module: &str, action: PermissionAction) -> bool {
    auth_state
        .admin
        .as_ref()
        .map(|a| a.can(module, action))
        .unwrap_or(false)
}

/// Helper: may the current admin see the given module at all?
pub fn can_view(auth_state: &AuthState, module: &str) -> bool {
    check(auth_state, module, PermissionAction::View)
}

pub fn can_add(auth_state: &AuthState, module: &str) -> bool {
    check(auth_state, module, PermissionAction::Add)
}

pub fn can_edit(auth_state: &AuthState, module: &str) -> bool {
    check(auth_state, module, PermissionAction::Edit)
}

pub fn can_delete(auth_state: &AuthState, module: &str) -> bool {
    check(auth_state, module, PermissionAction::Delete)
}

/// Helper: perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
