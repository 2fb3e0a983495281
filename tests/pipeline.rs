#[cfg(test)]
mod tests {
    use anyhow::Result;
    use patchup::api::cloud_build::RemoteBuild;
    use patchup::libs::confirm::Confirm;
    use patchup::libs::installer::install;
    use patchup::libs::launcher;
    use patchup::libs::platform::{PlatformProfile, PlatformTag};
    use patchup::libs::settings::AppSettings;
    use patchup::libs::update::{decide, Decision};
    use std::fs::{self, File};
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    struct PipelineTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for PipelineTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());

            PipelineTestContext { temp_dir }
        }
    }

    struct AlwaysYes;

    impl Confirm for AlwaysYes {
        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            Ok(true)
        }
    }

    struct AlwaysNo;

    impl Confirm for AlwaysNo {
        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            Ok(false)
        }
    }

    fn windows_profile(root: &Path) -> PlatformProfile {
        PlatformProfile {
            tag: PlatformTag::Windows,
            artifact_path: PathBuf::from("Default Windows desktop 32-bit.exe"),
            install_dir: root.join("game"),
        }
    }

    fn write_client_zip(path: &Path) {
        let file = File::create(path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("Default Windows desktop 32-bit.exe", SimpleFileOptions::default()).unwrap();
        zip.write_all(b"fake client binary").unwrap();
        zip.finish().unwrap();
    }

    /// Installed version 5, remote build 7, auto-update on: the update is
    /// applied, the version is persisted, the archive is gone, and the
    /// launch target exists.
    #[test_context(PipelineTestContext)]
    #[test]
    fn test_update_applied_end_to_end(ctx: &mut PipelineTestContext) {
        let root = ctx.temp_dir.path().to_path_buf();
        let profile = windows_profile(&root);

        let mut settings = AppSettings {
            greeting: "hello".to_string(),
            org_id: "org".to_string(),
            project_id: "proj".to_string(),
            api_key: "key".to_string(),
            version: 5,
            auto_update: true,
        };
        settings.save().unwrap();

        let remote = RemoteBuild {
            build_number: 7,
            download_url: "https://example.com/signed/build-7.zip".to_string(),
        };

        let mut confirm = AlwaysYes;
        assert_eq!(decide(&remote, &settings, &mut confirm).unwrap(), Decision::Proceed);

        // Stands in for the download step's written archive.
        let archive = root.join("build-7.zip");
        write_client_zip(&archive);

        install(&profile, &archive).unwrap();
        settings.persist_version(remote.build_number).unwrap();

        let loaded = AppSettings::load().unwrap().unwrap();
        assert_eq!(loaded.version, 7);
        assert_eq!(loaded.greeting, "hello");
        assert!(!archive.exists());
        assert!(profile.launch_target().exists());
    }

    /// Declined update: nothing is downloaded or installed and the
    /// persisted version stays put; the launcher still targets the old
    /// install.
    #[test_context(PipelineTestContext)]
    #[test]
    fn test_declined_update_keeps_old_install(ctx: &mut PipelineTestContext) {
        let root = ctx.temp_dir.path().to_path_buf();
        let profile = windows_profile(&root);

        // Pretend build 5 is already installed.
        fs::create_dir_all(&profile.install_dir).unwrap();
        fs::write(profile.launch_target(), b"old client").unwrap();

        let settings = AppSettings {
            greeting: "hello".to_string(),
            org_id: "org".to_string(),
            project_id: "proj".to_string(),
            api_key: "key".to_string(),
            version: 5,
            auto_update: false,
        };
        settings.save().unwrap();

        let remote = RemoteBuild {
            build_number: 7,
            download_url: "https://example.com/signed/build-7.zip".to_string(),
        };

        let mut confirm = AlwaysNo;
        assert_eq!(decide(&remote, &settings, &mut confirm).unwrap(), Decision::Declined);

        let loaded = AppSettings::load().unwrap().unwrap();
        assert_eq!(loaded.version, 5);
        assert_eq!(fs::read(profile.launch_target()).unwrap(), b"old client");
    }

    /// A missing client is reported but never fails the run: the offline
    /// path ends the same way.
    #[test_context(PipelineTestContext)]
    #[test]
    fn test_launch_with_no_client_is_non_fatal(ctx: &mut PipelineTestContext) {
        let profile = windows_profile(ctx.temp_dir.path());
        assert!(!profile.launch_target().exists());

        launcher::launch(&profile).unwrap();
    }
}
