mod hash;
mod lookup;
mod random;
mod geometry;

pub use self::hash::hash_code;
pub use self::lookup::{keyfind, keysearch};
pub use self::random::{random_from_array, random_from_array_with};
pub use self::geometry::{line_plane_intersect, xz_direction, xz_direction_into};
