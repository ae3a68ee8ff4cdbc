use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::common::Spinner;
use crate::session::SessionContext;
use crate::Route;

/// What a protected route should do for the current session. Pure over its
/// three inputs so every combination is table-testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Not signed in: back to the login screen.
    Login,
    /// Signed in with a temporary password, anywhere but the reset screen.
    RedirectToReset,
    /// Signed in with a temporary password, already on the reset screen.
    RenderReset,
    /// Signed in and unlocked.
    Render,
}

impl GuardOutcome {
    pub fn evaluate(
        is_authenticated: bool,
        must_reset_password: bool,
        on_reset_route: bool,
    ) -> Self {
        if !is_authenticated {
            return GuardOutcome::Login;
        }
        match (must_reset_password, on_reset_route) {
            (true, false) => GuardOutcome::RedirectToReset,
            (true, true) => GuardOutcome::RenderReset,
            // An unlocked account on the reset screen still renders it; the
            // page itself offers the way back.
            (false, _) => GuardOutcome::Render,
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct RouteGuardProps {
    #[prop_or_default]
    pub children: Children,
}

/// Wraps every authenticated route. Shows a spinner while the session is
/// still resolving, then either renders the children or navigates away.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_context::<SessionContext>().expect("Session context not found");
    let navigator = use_navigator().expect("Navigator not found");
    let route = use_route::<Route>();

    let loading = session.state.loading;
    let on_reset_route = matches!(route, Some(Route::ResetPassword));
    let outcome = GuardOutcome::evaluate(
        session.state.is_authenticated,
        session.state.must_reset_password,
        on_reset_route,
    );

    // Navigation happens only when the decision changes, so a re-render
    // with unchanged inputs never re-fires a redirect.
    use_effect_with((outcome, loading), move |(outcome, loading)| {
        if !*loading {
            match outcome {
                GuardOutcome::Login => navigator.replace(&Route::Landing),
                GuardOutcome::RedirectToReset => navigator.replace(&Route::ResetPassword),
                GuardOutcome::RenderReset | GuardOutcome::Render => {}
            }
        }
        || ()
    });

    if loading {
        return html! { <Spinner /> };
    }

    match outcome {
        GuardOutcome::Render | GuardOutcome::RenderReset => html! {
            <>{props.children.clone()}</>
        },
        GuardOutcome::Login | GuardOutcome::RedirectToReset => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(false, false, false => GuardOutcome::Login ; "anonymous on protected route")]
    #[test_case(false, false, true => GuardOutcome::Login ; "anonymous on reset route")]
    #[test_case(false, true, false => GuardOutcome::Login ; "stale reset flag without session")]
    #[test_case(false, true, true => GuardOutcome::Login ; "stale reset flag on reset route")]
    #[test_case(true, false, false => GuardOutcome::Render ; "unlocked account renders")]
    #[test_case(true, false, true => GuardOutcome::Render ; "unlocked account may revisit reset")]
    #[test_case(true, true, false => GuardOutcome::RedirectToReset ; "locked account is forced to reset")]
    #[test_case(true, true, true => GuardOutcome::RenderReset ; "locked account renders reset screen")]
    fn test_guard_table(
        is_authenticated: bool,
        must_reset_password: bool,
        on_reset_route: bool,
    ) -> GuardOutcome {
        GuardOutcome::evaluate(is_authenticated, must_reset_password, on_reset_route)
    }

    #[test]
    fn test_evaluation_is_stable_for_unchanged_inputs() {
        let first = GuardOutcome::evaluate(true, true, false);
        let second = GuardOutcome::evaluate(true, true, false);
        assert_eq!(first, second);
    }
}
