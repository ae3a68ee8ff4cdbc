pub mod calendar;
pub mod centers;
pub mod coaches;
pub mod event_detail;
pub mod events_admin;
pub mod home;
pub mod login;
pub mod messages;
pub mod not_found;
pub mod parent_dashboard;
pub mod player_dashboard;
pub mod player_onboarding;
pub mod players_admin;
pub mod players_parent;
pub mod profile;
pub mod reset_password;
pub mod team_detail;
pub mod teams;
