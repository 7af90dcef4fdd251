use std::fmt;

/// Build metadata stamped into `valctx version` output and generated headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    version: &'static str,
    commit_hash: &'static str,
    build_date: &'static str,
}

impl BuildInfo {
    pub const fn new(
        version: &'static str,
        commit_hash: &'static str,
        build_date: &'static str,
    ) -> Self {
        Self {
            version,
            commit_hash,
            build_date,
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn commit_hash(&self) -> &'static str {
        self.commit_hash
    }

    pub fn build_date(&self) -> &'static str {
        self.build_date
    }

    /// Version string written into the generated file header (e.g. `v0.3.0`).
    pub fn tool_version(&self) -> String {
        if self.version.is_empty() || self.version.starts_with('v') {
            self.version.to_string()
        } else {
            format!("v{}", self.version)
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::new("latest", "main", "unknown")
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Version:     {}", self.version)?;
        writeln!(f, "Build Date:  {}", self.build_date)?;
        write!(f, "Commit Hash: {}", self.commit_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let info = BuildInfo::new("1.2.3", "abc123", "2025-01-01");
        assert_eq!(info.version(), "1.2.3");
        assert_eq!(info.commit_hash(), "abc123");
        assert_eq!(info.build_date(), "2025-01-01");
    }

    #[test]
    fn test_default() {
        let info = BuildInfo::default();
        assert_eq!(info.version(), "latest");
        assert_eq!(info.commit_hash(), "main");
        assert_eq!(info.build_date(), "unknown");
    }

    #[test]
    fn test_tool_version() {
        assert_eq!(BuildInfo::new("1.2.3", "", "").tool_version(), "v1.2.3");
        assert_eq!(BuildInfo::new("v1.2.3", "", "").tool_version(), "v1.2.3");
        assert_eq!(BuildInfo::new("", "", "").tool_version(), "");
    }

    #[test]
    fn test_display() {
        let info = BuildInfo::new("v1.2.3", "main", "2025-01-01");
        assert_eq!(
            info.to_string(),
            "Version:     v1.2.3\nBuild Date:  2025-01-01\nCommit Hash: main"
        );
    }
}
