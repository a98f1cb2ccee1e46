//! Connection constants for the hosted data service. The anon key only
//! grants what the service's own row-level rules allow; admin writes ride
//! on the signed-in session token instead.

pub const SERVICE_URL: &str = "https://data.rapidflow-labs.dev";

pub const SERVICE_ANON_KEY: &str =
    "sb-anon-4f9c2d71a8e0b6539d14c7f2e8a0b35d9c6e1f84a2b7d0c3";

/// Local-storage key holding the serialized admin session.
pub const SESSION_STORAGE_KEY: &str = "admin-session";
