/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub timestamp: &'static str,
    pub profile: &'static str,
}

impl BuildMetadata {
    /// One-line banner used by the shell `version` command.
    pub fn banner(&self) -> String {
        format!(
            "findash {} ({} {}, built {})",
            self.version, self.git_hash, self.profile, self.timestamp
        )
    }
}

pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: env!("CARGO_PKG_VERSION"),
        git_hash: option_env!("FINDASH_BUILD_HASH").unwrap_or("unknown"),
        timestamp: option_env!("FINDASH_BUILD_TIMESTAMP").unwrap_or("unknown"),
        profile: option_env!("FINDASH_BUILD_PROFILE").unwrap_or("unknown"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_includes_package_version() {
        let banner = current().banner();
        assert!(banner.starts_with(&format!("findash {}", env!("CARGO_PKG_VERSION"))));
    }
}
