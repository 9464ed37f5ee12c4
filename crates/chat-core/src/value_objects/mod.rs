//! Value objects - immutable types that represent domain concepts

mod avatar_color;
mod avatar_size;
mod message_id;

pub use avatar_color::AvatarColor;
pub use avatar_size::AvatarSize;
pub use message_id::MessageId;
