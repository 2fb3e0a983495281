#[cfg(test)]
mod tests {
    use patchup::libs::download::{file_name_from_disposition, megabytes_rounded_up, DEFAULT_ARCHIVE_NAME};

    #[test]
    fn test_filename_with_quotes() {
        let value = r#"attachment; filename="Default Windows desktop 32-bit.zip""#;
        assert_eq!(file_name_from_disposition(value).as_deref(), Some("Default Windows desktop 32-bit.zip"));
    }

    #[test]
    fn test_filename_without_quotes() {
        let value = "attachment; filename=build-42.zip";
        assert_eq!(file_name_from_disposition(value).as_deref(), Some("build-42.zip"));
    }

    #[test]
    fn test_filename_parameter_order_does_not_matter() {
        let value = r#"attachment; size=123; filename="client.zip"; creation-date="Thu, 01 Jan"#;
        assert_eq!(file_name_from_disposition(value).as_deref(), Some("client.zip"));
    }

    #[test]
    fn test_missing_filename_parameter() {
        assert_eq!(file_name_from_disposition("attachment"), None);
        assert_eq!(file_name_from_disposition("inline; size=4"), None);
    }

    #[test]
    fn test_empty_filename_is_rejected() {
        assert_eq!(file_name_from_disposition(r#"attachment; filename="""#), None);
        assert_eq!(file_name_from_disposition("attachment; filename="), None);
    }

    #[test]
    fn test_filename_is_reduced_to_its_final_component() {
        let value = r#"attachment; filename="../escape.zip""#;
        assert_eq!(file_name_from_disposition(value).as_deref(), Some("escape.zip"));

        let value = "attachment; filename=/tmp/absolute.zip";
        assert_eq!(file_name_from_disposition(value).as_deref(), Some("absolute.zip"));

        let value = r#"attachment; filename="..\..\windows-style.zip""#;
        assert_eq!(file_name_from_disposition(value).as_deref(), Some("windows-style.zip"));
    }

    #[test]
    fn test_filename_that_is_only_a_path_is_rejected() {
        assert_eq!(file_name_from_disposition(r#"attachment; filename="..""#), None);
        assert_eq!(file_name_from_disposition(r#"attachment; filename="../""#), None);
        assert_eq!(file_name_from_disposition("attachment; filename=/"), None);
    }

    #[test]
    fn test_default_archive_name_is_a_zip() {
        assert!(DEFAULT_ARCHIVE_NAME.ends_with(".zip"));
    }

    #[test]
    fn test_megabyte_figure_rounds_up() {
        assert_eq!(megabytes_rounded_up(0), 0);
        assert_eq!(megabytes_rounded_up(1), 1);
        assert_eq!(megabytes_rounded_up(999_999), 1);
        assert_eq!(megabytes_rounded_up(1_000_000), 1);
        assert_eq!(megabytes_rounded_up(1_000_001), 2);
        assert_eq!(megabytes_rounded_up(42_500_000), 43);
    }
}
