use crate::entities::relationships::Relationship as RelationshipEntity;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    // The ID of the user that sent the request
    pub follower_id: i64,
    // The ID of the requested friend
    pub friend_id: i64,
    pub confirmed: bool,
}

impl From<RelationshipEntity> for Relationship {
    fn from(value: RelationshipEntity) -> Self {
        Self {
            follower_id: value.user_id,
            friend_id: value.friend_id,
            confirmed: value.confirmed,
        }
    }
}

/// How `add_friend` treats a new edge.
///
/// `Symmetric` is the degenerate case of `RequestConfirm` where both directions
/// are written and confirmed at creation time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipMode {
    Symmetric,
    #[default]
    RequestConfirm,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown friendship mode `{0}`, expected `symmetric` or `request_confirm`")]
pub struct ParseFriendshipModeError(String);

impl FromStr for FriendshipMode {
    type Err = ParseFriendshipModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "symmetric" => Ok(FriendshipMode::Symmetric),
            "request_confirm" | "request-confirm" => Ok(FriendshipMode::RequestConfirm),
            _ => Err(ParseFriendshipModeError(s.to_owned())),
        }
    }
}

impl fmt::Display for FriendshipMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendshipMode::Symmetric => f.write_str("symmetric"),
            FriendshipMode::RequestConfirm => f.write_str("request_confirm"),
        }
    }
}

/// State of the unordered pair {user, other}, seen from `user`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FriendshipState {
    NoRelation,
    /// `user` requested `other`, no request back.
    OutgoingRequest,
    /// `other` requested `user`, no request back.
    IncomingRequest,
    MutualRequest,
    Confirmed,
}

impl FriendshipState {
    /// Derives the pair state from the two directed edges, if present.
    pub fn from_edges(outgoing: Option<&Relationship>, incoming: Option<&Relationship>) -> Self {
        match (outgoing, incoming) {
            (None, None) => FriendshipState::NoRelation,
            (Some(_), None) => FriendshipState::OutgoingRequest,
            (None, Some(_)) => FriendshipState::IncomingRequest,
            (Some(out), Some(inc)) if out.confirmed && inc.confirmed => {
                FriendshipState::Confirmed
            }
            (Some(_), Some(_)) => FriendshipState::MutualRequest,
        }
    }
}

#[derive(Serialize)]
pub struct FriendshipStateResponse {
    pub user_id: i64,
    pub other_id: i64,
    pub state: FriendshipState,
}
