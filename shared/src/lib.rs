pub mod dto {
    pub mod auth;
    pub mod center;
    pub mod club;
    pub mod coach;
    pub mod common;
    pub mod event;
    pub mod message;
    pub mod player;
    pub mod profile;
    pub mod team;
}

pub mod error;
pub mod role;

// Re-export commonly used items
pub use error::SharedError;
pub use role::UserRole;

// Re-export DTOs
pub use dto::{
    auth::{SessionUser, SignInRequest, TokenResponse, UpdatePasswordRequest},
    center::{CenterDto, CreateCenterRequest},
    club::{ClubDto, ClubRef},
    coach::{CoachDto, CoachRow, CreateCoachRequest},
    common::{ErrorResponse, MaybeJoined},
    event::{CreateEventRequest, EventDto, EventType},
    message::{MessageDto, MessagePriority, MessageRow},
    player::{PlayerDto, PlayerListing, PlayerRow, PlayerSummary},
    profile::{ProfileDto, RoleAssignmentDto, UserIdentity},
    team::{TeamDto, TeamRef, TeamRosterRow, TeamWithPlayers},
};
