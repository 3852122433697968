use semver::Version;

pub const APP_NAME: &str = "Dashboard Bisnis Trucking";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

fn parse_version_str(input: &str) -> Option<Version> {
    let trimmed = input.trim_start_matches(|ch| ch == 'v' || ch == 'V');
    Version::parse(trimmed).ok()
}

/// Version shown in the footer. A git tag wins when it is valid semver.
pub fn version_label() -> String {
    label_for(GIT_TAG, APP_VERSION)
}

fn label_for(tag: Option<&str>, package_version: &str) -> String {
    if let Some(version) = tag.and_then(parse_version_str) {
        return format!("v{version}");
    }
    format!("v{package_version}")
}
