use std::fmt;

/// A named projection of a record's fields.
///
/// Record fields declare the views they belong to. A field that declares no
/// views is part of every projection; otherwise it is visible only while one of
/// its declared views is active. Without an active view every field is visible.
///
/// ```
/// use json_format_core::View;
///
/// const PUBLIC: View = View::new("public");
/// const INTERNAL: View = View::new("internal");
///
/// assert!(INTERNAL.admits(&[INTERNAL]));
/// assert!(!PUBLIC.admits(&[INTERNAL]));
/// assert!(PUBLIC.admits(&[]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct View(&'static str);

impl View {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(self) -> &'static str {
        self.0
    }

    /// Whether a field declared under `declared` is visible in this view.
    pub fn admits(self, declared: &[View]) -> bool {
        declared.is_empty() || declared.contains(&self)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Visibility of a field declared under `declared` while `active` is in force.
pub fn visible(active: Option<View>, declared: &[View]) -> bool {
    active.map_or(true, |view| view.admits(declared))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUBLIC: View = View::new("public");
    const INTERNAL: View = View::new("internal");
    const AUDIT: View = View::new("audit");

    #[test]
    fn no_active_view_shows_everything() {
        assert!(visible(None, &[]));
        assert!(visible(None, &[INTERNAL]));
    }

    #[test]
    fn membership_is_exact() {
        assert!(visible(Some(INTERNAL), &[INTERNAL, AUDIT]));
        assert!(visible(Some(AUDIT), &[INTERNAL, AUDIT]));
        assert!(!visible(Some(PUBLIC), &[INTERNAL, AUDIT]));
        assert!(visible(Some(PUBLIC), &[]));
    }

    #[test]
    fn views_compare_by_name() {
        assert_eq!(View::new("internal"), INTERNAL);
        assert_eq!(INTERNAL.to_string(), "internal");
    }
}
