//! Integration tests for the --check flag

#[cfg(test)]
mod check_mode_tests {
    use std::fs::{self, File};
    use std::path::Path;
    use std::process::{Command, Output};
    use tempfile::tempdir;

    fn run_svglist(workdir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_svglist"))
            .args(args)
            .current_dir(workdir)
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run svglist")
    }

    #[test]
    fn test_check_after_generate_is_up_to_date() {
        let workdir = tempdir().unwrap();
        let svg_dir = workdir.path().join("mathworld_svgs");
        fs::create_dir(&svg_dir).unwrap();
        File::create(svg_dir.join("a.svg")).unwrap();

        assert!(run_svglist(workdir.path(), &[]).status.success());

        let output = run_svglist(workdir.path(), &["--check"]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "List is up to date with 1 SVG files\n"
        );
    }

    #[test]
    fn test_check_reports_stale_without_writing() {
        let workdir = tempdir().unwrap();
        let svg_dir = workdir.path().join("mathworld_svgs");
        fs::create_dir(&svg_dir).unwrap();
        File::create(svg_dir.join("a.svg")).unwrap();
        run_svglist(workdir.path(), &[]);

        File::create(svg_dir.join("b.svg")).unwrap();
        let output = run_svglist(workdir.path(), &["--check"]);

        assert!(!output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "List mathworld_svgs_list.json is out of date (2 SVG files)\n"
        );
        let written = fs::read_to_string(workdir.path().join("mathworld_svgs_list.json")).unwrap();
        assert_eq!(written, "[\n  \"a.svg\"\n]");
    }

    #[test]
    fn test_check_missing_output_is_stale() {
        let workdir = tempdir().unwrap();
        fs::create_dir(workdir.path().join("mathworld_svgs")).unwrap();

        let output = run_svglist(workdir.path(), &["--check"]);
        assert!(!output.status.success());
        assert!(!workdir.path().join("mathworld_svgs_list.json").exists());
    }

    #[test]
    fn test_check_missing_directory_exits_zero() {
        let workdir = tempdir().unwrap();

        let output = run_svglist(workdir.path(), &["--check"]);
        assert!(output.status.success());
        assert_eq!(
            String::from_utf8_lossy(&output.stdout),
            "Directory mathworld_svgs not found!\n"
        );
    }
}
