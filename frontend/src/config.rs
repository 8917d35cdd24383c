/// Public asset root, baked in at compile time. Empty means root-relative URLs.
pub fn get_asset_root() -> &'static str {
    option_env!("DISHCOVERY_ASSET_ROOT").unwrap_or("")
}

/// URL of a file under the public asset root.
pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_root().trim_end_matches('/'), file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_root_and_file() {
        let url = asset_url("food1.png");
        assert!(url.ends_with("/food1.png"));
        assert!(url.starts_with(get_asset_root().trim_end_matches('/')));
        assert!(!url.contains("//food1.png"));
    }
}
