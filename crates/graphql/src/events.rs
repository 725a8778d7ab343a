//! Event names carried on the broadcast channel.

/// Published by the `kill` mutation, consumed by the `characterKilled`
/// subscription. The payload is the JSON shape of
/// [`KillResult`](crate::types::KillResult).
pub const CHARACTER_KILLED: &str = "character.killed";
