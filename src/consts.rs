//! Fixed route paths and storage keys shared across the client.

/// `localStorage` key holding the serialized logged-in user record. The key
/// is absent whenever the session is logged out.
pub const SESSION_STORAGE_KEY: &str = "vestibule_logged_in_user";

/// Register page sits at the site root.
pub const REGISTER_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";
pub const DASHBOARD_PATH: &str = "/dashboard";
