#[cfg(test)]
mod tests {
    use super::super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.display.reference_name_width, 40);
        assert_eq!(config.display.free_text_reference_width, 200);
        assert_eq!(config.literature.timeout_secs, 30);
    }

    #[test]
    fn test_default_esummary_points_at_eutils() {
        let url = default_esummary_url();
        assert!(url.starts_with("https://eutils.ncbi.nlm.nih.gov/"));
        assert!(url.ends_with("esummary.fcgi"));
    }

    #[test]
    fn test_partial_sections_keep_remaining_defaults() {
        let config = Config::from_toml_str(
            r#"
            [literature]
            api_key = "secret"
            extra_allowed_domains = ["localhost"]

            [recommender]
            credentials = "tumorboard@example.org"
            "#,
        )
        .unwrap();

        assert_eq!(config.literature.api_key.as_deref(), Some("secret"));
        assert_eq!(config.literature.extra_allowed_domains, vec!["localhost".to_string()]);
        assert_eq!(config.literature.esummary_url, default_esummary_url());
        assert_eq!(config.recommender.credentials, "tumorboard@example.org");
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::from_toml_str("[display\nreference_name_width = 'x'").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = Config::load_from(Path::new("/definitely/not/here/tumorboard.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
