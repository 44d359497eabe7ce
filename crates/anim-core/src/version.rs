//! Kernel version query.
//!
//! Hosts check compatibility with a single integer: `major * 100 + minor * 10
//! + patch`, so `1.0.0` reads as `100`. The value is derived from the
//! workspace version at compile time.
//!
//! The encoding is only monotonic while minor and patch stay single digits.
//! [`encode`] panics outside that range, and because [`VERSION`] is a const
//! a package version like `1.0.10` fails the build instead of colliding
//! with `1.1.0`.

/// Encoded kernel version (`100` for 1.0.0).
pub const VERSION: u32 = encode(
    parse_u32(env!("CARGO_PKG_VERSION_MAJOR")),
    parse_u32(env!("CARGO_PKG_VERSION_MINOR")),
    parse_u32(env!("CARGO_PKG_VERSION_PATCH")),
);

/// Returns the encoded kernel version. No side effects.
#[inline]
pub const fn get_version() -> u32 {
    VERSION
}

/// Encodes a semantic version into the host's integer form.
///
/// # Panics
///
/// If `minor` or `patch` is 10 or more.
#[inline]
pub const fn encode(major: u32, minor: u32, patch: u32) -> u32 {
    assert!(minor < 10 && patch < 10, "minor and patch must be single digits");
    major * 100 + minor * 10 + patch
}

const fn parse_u32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut value = 0;
    let mut i = 0;
    while i < bytes.len() {
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_package() {
        assert_eq!(env!("CARGO_PKG_VERSION"), "1.0.0");
        assert_eq!(get_version(), 100);
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode(1, 0, 0), 100);
        assert_eq!(encode(1, 2, 3), 123);
        assert!(encode(1, 1, 0) > encode(1, 0, 9));
        assert!(encode(2, 0, 0) > encode(1, 9, 9));
    }

    #[test]
    fn test_encode_is_strictly_increasing() {
        let mut prev = None;
        for major in 0..3 {
            for minor in 0..10 {
                for patch in 0..10 {
                    let v = encode(major, minor, patch);
                    if let Some(p) = prev {
                        assert!(v > p, "{major}.{minor}.{patch}");
                    }
                    prev = Some(v);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "single digits")]
    fn test_encode_rejects_two_digit_patch() {
        let _ = encode(1, 0, 10);
    }

    #[test]
    #[should_panic(expected = "single digits")]
    fn test_encode_rejects_two_digit_minor() {
        let _ = encode(1, 10, 0);
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_u32("0"), 0);
        assert_eq!(parse_u32("42"), 42);
    }
}
