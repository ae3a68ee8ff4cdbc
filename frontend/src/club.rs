use log::{debug, warn};
use std::cell::Cell;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::clubs;
use crate::session::SessionContext;
use shared::ClubDto;

/// Monotonic counter guarding in-flight branding fetches. Only the
/// completion holding the latest token may write, so a slow response for
/// an earlier club can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    current: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request generation and invalidates all earlier ones.
    pub fn begin(&self) -> u64 {
        self.current.set(self.current.get() + 1);
        self.current.get()
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }
}

/// What a club-scope change requires: a branding request for a scoped
/// session, a local clear (no request) for an unscoped one.
#[derive(Debug, Clone, PartialEq)]
enum BrandingPlan {
    Clear,
    Fetch(String),
}

fn plan_for_scope(club_id: Option<String>) -> BrandingPlan {
    match club_id {
        None => BrandingPlan::Clear,
        Some(club_id) => BrandingPlan::Fetch(club_id),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClubContext {
    /// Branding of the club the session is scoped to, when loaded.
    pub club: Option<ClubDto>,
    pub refresh: Callback<()>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ClubProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Keeps club branding in sync with the session's club scope. A session
/// without a club scope (admins, unaffiliated accounts) clears branding
/// without issuing a request.
#[function_component(ClubProvider)]
pub fn club_provider(props: &ClubProviderProps) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let club = use_state_eq(|| Option::<ClubDto>::None);
    let sequencer = use_mut_ref(RequestSequencer::new);

    let club_id = session.state.roles.club_id().map(str::to_string);

    let fetch = {
        let club = club.clone();
        let sequencer = sequencer.clone();
        move |club_id: Option<String>| {
            let token = sequencer.borrow().begin();
            match plan_for_scope(club_id) {
                BrandingPlan::Clear => club.set(None),
                BrandingPlan::Fetch(club_id) => {
                    let club = club.clone();
                    let sequencer = sequencer.clone();
                    spawn_local(async move {
                        let result = clubs::get_club_branding(&club_id).await;
                        if !sequencer.borrow().is_current(token) {
                            debug!("Dropping stale branding response for club {}", club_id);
                            return;
                        }
                        match result {
                            Ok(branding) => club.set(branding),
                            Err(e) => {
                                // Branding is cosmetic; the app stays usable.
                                warn!("Error loading club branding: {}", e);
                                club.set(None);
                            }
                        }
                    });
                }
            }
        }
    };

    {
        let fetch = fetch.clone();
        use_effect_with(club_id.clone(), move |club_id| {
            fetch(club_id.clone());
            || ()
        });
    }

    let refresh = Callback::from(move |_: ()| fetch(club_id.clone()));

    let context = ClubContext {
        club: (*club).clone(),
        refresh,
    };

    html! {
        <ContextProvider<ClubContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ClubContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_transition_starts_a_new_generation() {
        // club-1 -> no club -> club-2 is three distinct generations.
        let sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        let second = sequencer.begin();
        let third = sequencer.begin();
        assert!(first < second && second < third);
        assert!(sequencer.is_current(third));
    }

    #[test]
    fn test_stale_token_is_rejected_after_newer_request() {
        let sequencer = RequestSequencer::new();
        let stale = sequencer.begin();
        let fresh = sequencer.begin();
        assert!(!sequencer.is_current(stale));
        assert!(sequencer.is_current(fresh));
    }

    #[test]
    fn test_only_scoped_sessions_trigger_a_request() {
        // club-1 -> no club -> club-2: one fetch per club, none in between.
        let scopes = [
            Some("club-1".to_string()),
            None,
            Some("club-2".to_string()),
        ];
        let plans: Vec<BrandingPlan> = scopes.into_iter().map(plan_for_scope).collect();
        assert_eq!(
            plans,
            vec![
                BrandingPlan::Fetch("club-1".to_string()),
                BrandingPlan::Clear,
                BrandingPlan::Fetch("club-2".to_string()),
            ]
        );
        let fetches = plans
            .iter()
            .filter(|p| matches!(p, BrandingPlan::Fetch(_)))
            .count();
        assert_eq!(fetches, 2);
    }

    #[test]
    fn test_tokens_never_regain_currency() {
        let sequencer = RequestSequencer::new();
        let stale = sequencer.begin();
        sequencer.begin();
        sequencer.begin();
        assert!(!sequencer.is_current(stale));
    }
}
