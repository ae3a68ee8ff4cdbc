use log::debug;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::players;
use crate::components::common::Spinner;
use crate::session::{RoleResolution, SessionContext};
use crate::Route;
use shared::{PlayerSummary, UserRole};

/// Where a freshly signed-in user lands, by role.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LandingTarget {
    AdminHome,
    CoachTeams,
    ParentDashboard,
    PlayerOnboarding,
    PlayerDashboard,
}

impl LandingTarget {
    pub fn route(&self) -> Route {
        match self {
            LandingTarget::AdminHome => Route::Home,
            LandingTarget::CoachTeams => Route::Teams,
            LandingTarget::ParentDashboard => Route::ParentDashboard,
            LandingTarget::PlayerOnboarding => Route::PlayerOnboarding,
            LandingTarget::PlayerDashboard => Route::PlayerDashboard,
        }
    }
}

/// State of the extra lookup a player login needs before it can land: a
/// player without a club affiliation goes to onboarding instead of the
/// dashboard.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayerLookup {
    /// The signed-in role does not need a player record.
    NotNeeded,
    /// Lookup in flight.
    Pending,
    /// Lookup finished; `None` when no player record exists at all.
    Loaded(Option<PlayerSummary>),
}

/// Pure landing decision. `None` means "not decidable yet" (roles still
/// resolving, or the player lookup still in flight) or "nowhere to send"
/// (unassigned accounts stay on the landing screen).
pub fn landing_target(roles: &RoleResolution, player: &PlayerLookup) -> Option<LandingTarget> {
    let (role, club_id) = match roles {
        RoleResolution::Unresolved | RoleResolution::Unassigned => return None,
        RoleResolution::Assigned { role, club_id } => (*role, club_id.as_deref()),
    };
    match role {
        UserRole::SuperAdmin => Some(LandingTarget::AdminHome),
        UserRole::Coach => Some(LandingTarget::CoachTeams),
        UserRole::Parent => Some(LandingTarget::ParentDashboard),
        UserRole::Player => match player {
            PlayerLookup::NotNeeded | PlayerLookup::Pending => None,
            PlayerLookup::Loaded(summary) => {
                let affiliated = club_id.is_some()
                    || summary
                        .as_ref()
                        .map(|s| s.club_id.is_some())
                        .unwrap_or(false);
                if affiliated {
                    Some(LandingTarget::PlayerDashboard)
                } else {
                    Some(LandingTarget::PlayerOnboarding)
                }
            }
        },
    }
}

/// One-shot latch for the post-login redirect. The first decided target
/// fires navigation; later role or affiliation changes within the same
/// landing render must not yank the user around again.
#[derive(Debug, Default)]
pub struct RedirectGate {
    fired: bool,
}

impl RedirectGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the target to navigate to, at most once. Undecided targets
    /// pass through without consuming the shot.
    pub fn fire(&mut self, target: Option<LandingTarget>) -> Option<LandingTarget> {
        match target {
            Some(target) if !self.fired => {
                self.fired = true;
                Some(target)
            }
            _ => None,
        }
    }
}

/// Rendered on the landing screen for an authenticated session. Resolves
/// the role-dependent target and navigates exactly once.
#[function_component(LandingRedirect)]
pub fn landing_redirect() -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Navigator not found");
    let lookup = use_state_eq(|| PlayerLookup::NotNeeded);
    let gate = use_mut_ref(RedirectGate::new);

    let roles = session.state.roles.clone();
    let user_id = session
        .state
        .identity
        .as_ref()
        .map(|identity| identity.id.clone());

    // Players need their record fetched before the landing decision.
    {
        let lookup = lookup.clone();
        let is_player = roles.role() == Some(UserRole::Player);
        use_effect_with((is_player, user_id), move |(is_player, user_id)| {
            if *is_player {
                if let Some(user_id) = user_id.clone() {
                    lookup.set(PlayerLookup::Pending);
                    spawn_local(async move {
                        match players::player_for_user(&user_id).await {
                            Ok(summary) => lookup.set(PlayerLookup::Loaded(summary)),
                            Err(e) => {
                                debug!("Player lookup failed, sending to onboarding: {}", e);
                                lookup.set(PlayerLookup::Loaded(None));
                            }
                        }
                    });
                }
            } else {
                lookup.set(PlayerLookup::NotNeeded);
            }
            || ()
        });
    }

    {
        let target = landing_target(&roles, &lookup);
        use_effect_with(target, move |target| {
            if let Some(target) = gate.borrow_mut().fire(*target) {
                navigator.replace(&target.route());
            }
            || ()
        });
    }

    match landing_target(&roles, &lookup) {
        Some(_) => html! { <Spinner /> },
        None => match roles {
            RoleResolution::Unassigned => html! {
                <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
                    <div class="text-center text-gray-600">
                        <p class="text-lg font-medium">{"Tu cuenta aún no tiene un rol asignado."}</p>
                        <p class="text-sm mt-2">{"Contacta con el administrador de tu club."}</p>
                    </div>
                </div>
            },
            _ => html! { <Spinner /> },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assigned(role: UserRole, club_id: Option<&str>) -> RoleResolution {
        RoleResolution::Assigned {
            role,
            club_id: club_id.map(str::to_string),
        }
    }

    fn summary(club_id: Option<&str>) -> PlayerSummary {
        PlayerSummary {
            id: "p-1".to_string(),
            club_id: club_id.map(str::to_string),
        }
    }

    #[test]
    fn test_unresolved_and_unassigned_have_no_target() {
        let lookup = PlayerLookup::NotNeeded;
        assert_eq!(landing_target(&RoleResolution::Unresolved, &lookup), None);
        assert_eq!(landing_target(&RoleResolution::Unassigned, &lookup), None);
    }

    #[test]
    fn test_admin_coach_and_parent_targets() {
        let lookup = PlayerLookup::NotNeeded;
        assert_eq!(
            landing_target(&assigned(UserRole::SuperAdmin, None), &lookup),
            Some(LandingTarget::AdminHome)
        );
        assert_eq!(
            landing_target(&assigned(UserRole::Coach, Some("club-1")), &lookup),
            Some(LandingTarget::CoachTeams)
        );
        assert_eq!(
            landing_target(&assigned(UserRole::Parent, Some("club-1")), &lookup),
            Some(LandingTarget::ParentDashboard)
        );
    }

    #[test]
    fn test_player_waits_for_lookup() {
        let roles = assigned(UserRole::Player, None);
        assert_eq!(landing_target(&roles, &PlayerLookup::Pending), None);
    }

    #[test]
    fn test_player_without_affiliation_goes_to_onboarding() {
        let roles = assigned(UserRole::Player, None);
        assert_eq!(
            landing_target(&roles, &PlayerLookup::Loaded(None)),
            Some(LandingTarget::PlayerOnboarding)
        );
        assert_eq!(
            landing_target(&roles, &PlayerLookup::Loaded(Some(summary(None)))),
            Some(LandingTarget::PlayerOnboarding)
        );
    }

    #[test]
    fn test_affiliated_player_goes_to_dashboard() {
        // Affiliation can come from the role assignment or the player row.
        let by_role = assigned(UserRole::Player, Some("club-1"));
        assert_eq!(
            landing_target(&by_role, &PlayerLookup::Loaded(Some(summary(None)))),
            Some(LandingTarget::PlayerDashboard)
        );
        let by_record = assigned(UserRole::Player, None);
        assert_eq!(
            landing_target(&by_record, &PlayerLookup::Loaded(Some(summary(Some("club-1"))))),
            Some(LandingTarget::PlayerDashboard)
        );
    }

    #[test]
    fn test_gate_fires_exactly_once() {
        let mut gate = RedirectGate::new();
        assert_eq!(
            gate.fire(Some(LandingTarget::ParentDashboard)),
            Some(LandingTarget::ParentDashboard)
        );
        assert_eq!(gate.fire(Some(LandingTarget::ParentDashboard)), None);
        assert_eq!(gate.fire(Some(LandingTarget::AdminHome)), None);
    }

    #[test]
    fn test_gate_survives_undecided_targets() {
        // None does not consume the single shot.
        let mut gate = RedirectGate::new();
        assert_eq!(gate.fire(None), None);
        assert_eq!(gate.fire(None), None);
        assert_eq!(
            gate.fire(Some(LandingTarget::PlayerOnboarding)),
            Some(LandingTarget::PlayerOnboarding)
        );
        assert_eq!(gate.fire(Some(LandingTarget::PlayerDashboard)), None);
    }
}
