pub const APP_NAME: &str = "ChainPulse";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version_label() -> String {
    format!("v{APP_VERSION}")
}

/// User agent sent with every backend request.
pub fn user_agent() -> String {
    format!("chainpulse/{APP_VERSION}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_carries_crate_version() {
        assert_eq!(user_agent(), format!("chainpulse/{}", env!("CARGO_PKG_VERSION")));
        assert!(version_label().starts_with('v'));
    }
}
