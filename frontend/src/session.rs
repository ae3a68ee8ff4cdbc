use log::{debug, error, warn};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{auth, profiles};
use crate::i18n::{I18nContext, Language};
use shared::{RoleAssignmentDto, SessionUser, UserIdentity, UserRole};

/// Outcome of the role lookup. Downstream code has to match on this
/// explicitly; "authenticated but unassigned" is a legal state a freshly
/// provisioned account sits in until an admin assigns a role.
#[derive(Clone, Debug, PartialEq)]
pub enum RoleResolution {
    /// Lookup has not completed for this session.
    Unresolved,
    /// Lookup completed and found no assignment.
    Unassigned,
    /// Assigned role, optionally scoped to a club.
    Assigned {
        role: UserRole,
        club_id: Option<String>,
    },
}

impl RoleResolution {
    pub fn role(&self) -> Option<UserRole> {
        match self {
            RoleResolution::Assigned { role, .. } => Some(*role),
            _ => None,
        }
    }

    pub fn club_id(&self) -> Option<&str> {
        match self {
            RoleResolution::Assigned { club_id, .. } => club_id.as_deref(),
            _ => None,
        }
    }

    /// Maps a raw assignment row to a resolution. A legacy or unknown role
    /// string downgrades to `Unassigned` instead of failing the session.
    pub fn from_assignment(assignment: Option<RoleAssignmentDto>) -> Self {
        match assignment {
            None => RoleResolution::Unassigned,
            Some(row) => match row.role.parse::<UserRole>() {
                Ok(role) => RoleResolution::Assigned {
                    role,
                    club_id: row.club_id,
                },
                Err(e) => {
                    warn!("Ignoring unrecognized role assignment: {}", e);
                    RoleResolution::Unassigned
                }
            },
        }
    }
}

/// Single source of truth for "who is logged in and as what".
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub identity: Option<UserIdentity>,
    pub roles: RoleResolution,
    pub is_authenticated: bool,
    pub loading: bool,
    pub must_reset_password: bool,
    pub error: Option<String>,
    /// Token of the newest session-establishing attempt. Completions of an
    /// older attempt are ignored (last write wins).
    epoch: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            identity: None,
            roles: RoleResolution::Unresolved,
            is_authenticated: false,
            loading: true,
            must_reset_password: false,
            error: None,
            epoch: 0,
        }
    }
}

impl SessionState {
    fn anonymous(epoch: u64) -> Self {
        Self {
            identity: None,
            roles: RoleResolution::Unresolved,
            is_authenticated: false,
            loading: false,
            must_reset_password: false,
            error: None,
            epoch,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    /// A restore or login attempt began.
    Started { epoch: u64 },
    /// Resolution finished with a usable identity.
    Established {
        epoch: u64,
        identity: UserIdentity,
        roles: RoleResolution,
        must_reset_password: bool,
    },
    /// No session, or the profile behind it is missing: terminal anonymous.
    Anonymous { epoch: u64 },
    /// Login failed with a user-visible message.
    Failed { epoch: u64, error: String },
    /// Local sign-out; applied unconditionally.
    LoggedOut { epoch: u64 },
    /// Password change succeeded; lifts the reset-password lock.
    PasswordCleared,
    /// Demo affordance for manual testing, not a security boundary.
    #[cfg(debug_assertions)]
    RoleOverride(UserRole),
}

impl Reducible for SessionState {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            SessionAction::Started { epoch } => Rc::new(Self {
                loading: true,
                error: None,
                epoch,
                ..(*self).clone()
            }),
            SessionAction::Established {
                epoch,
                identity,
                roles,
                must_reset_password,
            } => {
                if epoch != self.epoch {
                    debug!("Dropping stale session resolution (epoch {})", epoch);
                    return self;
                }
                Rc::new(Self {
                    identity: Some(identity),
                    roles,
                    is_authenticated: true,
                    loading: false,
                    must_reset_password,
                    error: None,
                    epoch,
                })
            }
            SessionAction::Anonymous { epoch } => {
                if epoch != self.epoch {
                    debug!("Dropping stale anonymous resolution (epoch {})", epoch);
                    return self;
                }
                Rc::new(Self::anonymous(epoch))
            }
            SessionAction::Failed { epoch, error } => {
                if epoch != self.epoch {
                    return self;
                }
                Rc::new(Self {
                    error: Some(error),
                    ..Self::anonymous(epoch)
                })
            }
            SessionAction::LoggedOut { epoch } => Rc::new(Self::anonymous(epoch)),
            SessionAction::PasswordCleared => Rc::new(Self {
                must_reset_password: false,
                ..(*self).clone()
            }),
            #[cfg(debug_assertions)]
            SessionAction::RoleOverride(role) => {
                let club_id = self.roles.club_id().map(str::to_string);
                Rc::new(Self {
                    roles: RoleResolution::Assigned { role, club_id },
                    ..(*self).clone()
                })
            }
        }
    }
}

/// What the profile + role lookups made of an authenticated user.
enum Resolution {
    Established {
        identity: UserIdentity,
        roles: RoleResolution,
        language: Option<String>,
    },
    /// Authenticated but no profile row: no usable identity.
    NoProfile,
}

/// Runs the dependent lookups in order: profile first (terminal when
/// missing), then the role assignment (missing is fine).
async fn resolve_user(user: &SessionUser) -> Result<Resolution, String> {
    let profile = match profiles::get_profile(&user.id).await? {
        Some(profile) => profile,
        None => return Ok(Resolution::NoProfile),
    };

    let roles = match profiles::get_role_assignment(&user.id).await {
        Ok(assignment) => RoleResolution::from_assignment(assignment),
        Err(e) => {
            // A failed role lookup is treated like a missing one.
            error!("Error loading user role: {}", e);
            RoleResolution::Unassigned
        }
    };

    Ok(Resolution::Established {
        identity: UserIdentity::from_profile(&profile),
        roles,
        language: profile.language,
    })
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionContext {
    pub state: SessionState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    pub password_updated: Callback<()>,
    #[cfg(debug_assertions)]
    pub set_role: Callback<UserRole>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer_eq(SessionState::default);
    let attempt_counter = use_mut_ref(|| 0u64);
    let i18n = use_context::<I18nContext>().expect("I18n context not found");

    let next_epoch = {
        let attempt_counter = attempt_counter.clone();
        move || {
            let mut counter = attempt_counter.borrow_mut();
            *counter += 1;
            *counter
        }
    };

    // Restore the session once at startup.
    {
        let session = session.clone();
        let i18n = i18n.clone();
        let next_epoch = next_epoch.clone();
        use_effect_with((), move |_| {
            let epoch = next_epoch();
            session.dispatch(SessionAction::Started { epoch });
            spawn_local(async move {
                match auth::get_session().await {
                    Ok(None) => session.dispatch(SessionAction::Anonymous { epoch }),
                    Ok(Some(user)) => {
                        let must_reset = user.temp_password();
                        match resolve_user(&user).await {
                            Ok(Resolution::Established {
                                identity,
                                roles,
                                language,
                            }) => {
                                if let Some(code) = language {
                                    i18n.set_language.emit(Language::from_code(&code));
                                }
                                session.dispatch(SessionAction::Established {
                                    epoch,
                                    identity,
                                    roles,
                                    must_reset_password: must_reset,
                                });
                            }
                            Ok(Resolution::NoProfile) => {
                                warn!("Session restored but profile missing; degrading to anonymous");
                                session.dispatch(SessionAction::Anonymous { epoch });
                            }
                            Err(e) => {
                                error!("Error restoring session: {}", e);
                                session.dispatch(SessionAction::Anonymous { epoch });
                            }
                        }
                    }
                    Err(e) => {
                        error!("Error restoring session: {}", e);
                        session.dispatch(SessionAction::Anonymous { epoch });
                    }
                }
            });
            || ()
        });
    }

    let login = {
        let session = session.clone();
        let i18n = i18n.clone();
        let next_epoch = next_epoch.clone();
        Callback::from(move |(email, password): (String, String)| {
            let session = session.clone();
            let i18n = i18n.clone();
            let epoch = next_epoch();
            session.dispatch(SessionAction::Started { epoch });
            spawn_local(async move {
                match auth::sign_in(&email, &password).await {
                    Err(e) => session.dispatch(SessionAction::Failed { epoch, error: e }),
                    Ok(user) => {
                        let must_reset = user.temp_password();
                        match resolve_user(&user).await {
                            Ok(Resolution::Established {
                                identity,
                                roles,
                                language,
                            }) => {
                                if let Some(code) = language {
                                    i18n.set_language.emit(Language::from_code(&code));
                                }
                                session.dispatch(SessionAction::Established {
                                    epoch,
                                    identity,
                                    roles,
                                    must_reset_password: must_reset,
                                });
                            }
                            Ok(Resolution::NoProfile) => {
                                session.dispatch(SessionAction::Failed {
                                    epoch,
                                    error: "Profile not found".to_string(),
                                });
                            }
                            Err(e) => session.dispatch(SessionAction::Failed { epoch, error: e }),
                        }
                    }
                }
            });
        })
    };

    // Optimistic local logout: state is reset before the network call
    // resolves, and a failed sign-out only gets logged.
    let logout = {
        let session = session.clone();
        let next_epoch = next_epoch.clone();
        Callback::from(move |_: ()| {
            let epoch = next_epoch();
            session.dispatch(SessionAction::LoggedOut { epoch });
            spawn_local(async move {
                if let Err(e) = auth::sign_out().await {
                    warn!("Sign-out failed, local state cleared anyway: {}", e);
                }
            });
        })
    };

    let password_updated = {
        let session = session.clone();
        Callback::from(move |_: ()| {
            session.dispatch(SessionAction::PasswordCleared);
        })
    };

    #[cfg(debug_assertions)]
    let set_role = {
        let session = session.clone();
        Callback::from(move |role: UserRole| {
            session.dispatch(SessionAction::RoleOverride(role));
        })
    };

    let context = SessionContext {
        state: (*session).clone(),
        login,
        logout,
        password_updated,
        #[cfg(debug_assertions)]
        set_role,
    };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn identity(id: &str) -> UserIdentity {
        UserIdentity {
            id: id.to_string(),
            email: format!("{}@example.com", id),
            first_name: "Ana".to_string(),
            last_name: "Diaz".to_string(),
            created_at: "2024-03-01T10:00:00+00:00".parse().unwrap(),
        }
    }

    fn reduce(state: SessionState, action: SessionAction) -> SessionState {
        Rc::unwrap_or_clone(Rc::new(state).reduce(action))
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = SessionState::default();
        assert!(state.loading);
        assert!(!state.is_authenticated);
        assert_eq!(state.roles, RoleResolution::Unresolved);
    }

    #[test]
    fn test_restore_without_role_is_authenticated_and_unassigned() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Started { epoch: 1 },
        );
        let state = reduce(
            state,
            SessionAction::Established {
                epoch: 1,
                identity: identity("u-1"),
                roles: RoleResolution::Unassigned,
                must_reset_password: false,
            },
        );
        assert!(state.is_authenticated);
        assert!(!state.loading);
        assert_eq!(state.roles, RoleResolution::Unassigned);
        assert!(state.roles.role().is_none());
    }

    #[test]
    fn test_restoring_unassigned_session_twice_is_stable() {
        let mut state = SessionState::default();
        for epoch in [1, 2] {
            state = reduce(state, SessionAction::Started { epoch });
            state = reduce(
                state,
                SessionAction::Established {
                    epoch,
                    identity: identity("u-1"),
                    roles: RoleResolution::Unassigned,
                    must_reset_password: false,
                },
            );
        }
        assert!(state.is_authenticated);
        assert_eq!(state.roles, RoleResolution::Unassigned);
        assert!(!state.loading);
    }

    #[test]
    fn test_login_failure_resets_to_anonymous_with_error() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Started { epoch: 1 },
        );
        let state = reduce(
            state,
            SessionAction::Failed {
                epoch: 1,
                error: "Invalid credentials".to_string(),
            },
        );
        assert!(!state.is_authenticated);
        assert!(!state.loading);
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_missing_profile_degrades_to_anonymous_not_loading() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Started { epoch: 1 },
        );
        let state = reduce(state, SessionAction::Anonymous { epoch: 1 });
        assert!(!state.is_authenticated);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_stale_resolution_cannot_overwrite_newer_attempt() {
        // First attempt starts, then a second one supersedes it.
        let state = reduce(
            SessionState::default(),
            SessionAction::Started { epoch: 1 },
        );
        let state = reduce(state, SessionAction::Started { epoch: 2 });
        let state = reduce(
            state,
            SessionAction::Established {
                epoch: 2,
                identity: identity("u-2"),
                roles: RoleResolution::Assigned {
                    role: UserRole::Parent,
                    club_id: Some("club-1".to_string()),
                },
                must_reset_password: false,
            },
        );
        // The late completion of attempt 1 must be dropped.
        let state = reduce(
            state,
            SessionAction::Established {
                epoch: 1,
                identity: identity("u-1"),
                roles: RoleResolution::Unassigned,
                must_reset_password: true,
            },
        );
        assert_eq!(state.identity.as_ref().unwrap().id, "u-2");
        assert_eq!(state.roles.role(), Some(UserRole::Parent));
        assert!(!state.must_reset_password);
    }

    #[test]
    fn test_stale_anonymous_is_dropped_too() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Started { epoch: 1 },
        );
        let state = reduce(state, SessionAction::Started { epoch: 2 });
        let state = reduce(
            state,
            SessionAction::Established {
                epoch: 2,
                identity: identity("u-2"),
                roles: RoleResolution::Unassigned,
                must_reset_password: false,
            },
        );
        let state = reduce(state, SessionAction::Anonymous { epoch: 1 });
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_logout_is_unconditional() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Started { epoch: 1 },
        );
        let state = reduce(
            state,
            SessionAction::Established {
                epoch: 1,
                identity: identity("u-1"),
                roles: RoleResolution::Assigned {
                    role: UserRole::Player,
                    club_id: None,
                },
                must_reset_password: true,
            },
        );
        // The sign-out network call is fire-and-forget; the reducer clears
        // local state regardless of its outcome.
        let state = reduce(state, SessionAction::LoggedOut { epoch: 2 });
        assert!(!state.is_authenticated);
        assert!(!state.loading);
        assert!(state.identity.is_none());
        assert!(!state.must_reset_password);
    }

    #[test]
    fn test_password_cleared_lifts_reset_lock() {
        let state = reduce(
            SessionState::default(),
            SessionAction::Started { epoch: 1 },
        );
        let state = reduce(
            state,
            SessionAction::Established {
                epoch: 1,
                identity: identity("u-1"),
                roles: RoleResolution::Assigned {
                    role: UserRole::Player,
                    club_id: Some("club-1".to_string()),
                },
                must_reset_password: true,
            },
        );
        assert!(state.must_reset_password);
        let state = reduce(state, SessionAction::PasswordCleared);
        assert!(!state.must_reset_password);
        assert!(state.is_authenticated);
        assert_eq!(state.roles.club_id(), Some("club-1"));
    }

    #[test]
    fn test_unknown_role_string_downgrades_to_unassigned() {
        let resolution = RoleResolution::from_assignment(Some(RoleAssignmentDto {
            role: "club_admin".to_string(),
            club_id: Some("club-1".to_string()),
        }));
        assert_eq!(resolution, RoleResolution::Unassigned);
    }

    #[test]
    fn test_assignment_maps_to_role_and_club() {
        let resolution = RoleResolution::from_assignment(Some(RoleAssignmentDto {
            role: "coach".to_string(),
            club_id: Some("club-2".to_string()),
        }));
        assert_eq!(resolution.role(), Some(UserRole::Coach));
        assert_eq!(resolution.club_id(), Some("club-2"));
    }
}
