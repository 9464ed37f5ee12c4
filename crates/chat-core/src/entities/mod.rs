//! Domain entities - core client-side objects

mod avatar;
mod reaction;
mod upload;

pub use avatar::{initial_for, resolve_avatar, AvatarIdentity, SENTINEL_INITIAL};
pub use reaction::{Reaction, ReactionCount, ReactionRequest, ReactionSet};
pub use upload::{AvatarUpload, MAX_AVATAR_BYTES};
