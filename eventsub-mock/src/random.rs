//! Random values for filling in synthetic event fields.
//!
//! Everything draws from [`rand::thread_rng`], a thread-local generator
//! seeded from the OS, so concurrent callers never share generator state.

use rand::Rng;
use uuid::Uuid;

/// Upper bound (exclusive) for generated user IDs.
const MAX_USER_ID: u64 = 100_000_000;

/// Upper bound (exclusive) for generated viewer counts.
const MAX_VIEWER_COUNT: i64 = 100_000;

/// Length of a generated client ID.
const CLIENT_ID_LEN: usize = 30;

/// A random numeric user ID in `0..100_000_000`.
pub fn random_user_id() -> String {
    rand::thread_rng().gen_range(0..MAX_USER_ID).to_string()
}

/// A random v4 GUID, hyphenated.
pub fn random_guid() -> String {
    Uuid::new_v4().to_string()
}

/// A random lowercase hex client ID of 30 characters.
pub fn random_client_id() -> String {
    let mut bytes = [0u8; CLIENT_ID_LEN / 2];
    rand::thread_rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// A random viewer count in `0..100_000`.
pub fn random_viewer_count() -> i64 {
    rand::thread_rng().gen_range(0..MAX_VIEWER_COUNT)
}

/// A random integer in `0..max`; `0` when `max` is not positive.
pub fn random_int(max: i64) -> i64 {
    if max <= 0 {
        return 0;
    }
    rand::thread_rng().gen_range(0..max)
}

/// One of `bits`, `other` or `subscription`, roughly evenly distributed.
pub fn random_type() -> &'static str {
    match rand::thread_rng().gen_range(0..3) {
        0 => "bits",
        1 => "other",
        _ => "subscription",
    }
}

/// A random `#rrggbb` color.
pub fn random_color_hex() -> String {
    let mut rng = rand::thread_rng();
    let (red, green, blue): (u8, u8, u8) = (rng.gen(), rng.gen(), rng.gen());
    format!("#{red:02x}{green:02x}{blue:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_user_id_in_range() {
        for _ in 0..100 {
            let id: u64 = random_user_id().parse().unwrap();
            assert!(id < MAX_USER_ID);
        }
    }

    #[test]
    fn test_random_guid_is_uuid() {
        let guid = random_guid();
        assert_eq!(guid.len(), 36);
        assert!(Uuid::parse_str(&guid).is_ok());
        assert_ne!(guid, random_guid());
    }

    #[test]
    fn test_random_client_id_shape() {
        let id = random_client_id();
        assert_eq!(id.len(), CLIENT_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_random_int_bounds() {
        assert_eq!(random_int(0), 0);
        assert_eq!(random_int(-5), 0);
        assert_eq!(random_int(1), 0);
        for _ in 0..100 {
            assert!((0..10).contains(&random_int(10)));
            assert!((0..MAX_VIEWER_COUNT).contains(&random_viewer_count()));
        }
    }

    #[test]
    fn test_random_type_values() {
        for _ in 0..50 {
            assert!(["bits", "other", "subscription"].contains(&random_type()));
        }
    }

    #[test]
    fn test_random_color_hex_shape() {
        let color = random_color_hex();
        assert_eq!(color.len(), 7);
        assert!(color.starts_with('#'));
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }
}
