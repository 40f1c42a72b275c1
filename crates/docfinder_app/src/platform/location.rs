//! The session's stand-in for a browser address bar.

/// Holds the query string this session would show in an address bar.
/// Seeded from the command line so a shared link restores its filter
/// state, and replaced (never stacked) on every sync, mirroring a
/// history-neutral location update.
#[derive(Debug, Clone, Default)]
pub struct SessionLocation {
    query: String,
}

impl SessionLocation {
    pub fn from_args(mut args: std::env::Args) -> Self {
        let raw = args.nth(1).unwrap_or_default();
        Self {
            query: raw.strip_prefix('?').unwrap_or(&raw).to_string(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the current query; reports whether it actually changed.
    pub fn replace(&mut self, query: &str) -> bool {
        if self.query == query {
            false
        } else {
            self.query = query.to_string();
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SessionLocation;

    #[test]
    fn replace_reports_change() {
        let mut location = SessionLocation::default();
        assert!(location.replace("search=rao"));
        assert!(!location.replace("search=rao"));
        assert_eq!(location.query(), "search=rao");
    }
}
