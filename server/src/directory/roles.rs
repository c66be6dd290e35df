//! Built-in role vocabulary.
//!
//! The directory stores arbitrary role rows; these three are the names the
//! bundled routes are gated on, seeded at startup.

/// Role names seeded on boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BuiltinRole {
    /// User administration routes.
    Admin,
    /// Content creation routes.
    Editor,
    /// Read-only content routes.
    Viewer,
}

impl BuiltinRole {
    /// Returns the stored role name.
    ///
    /// Role names are compared byte-for-byte; the capitalization here is
    /// exactly what callers must present.
    ///
    /// # Examples
    ///
    /// ```
    /// use doorman_server::directory::BuiltinRole;
    ///
    /// assert_eq!(BuiltinRole::Editor.as_str(), "Editor");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::Viewer => "Viewer",
        }
    }

    /// Returns all built-in roles in seed order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Admin, Self::Editor, Self::Viewer]
    }
}
