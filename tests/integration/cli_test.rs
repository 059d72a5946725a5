//! End-to-end tests driving the typesift binary

#[cfg(test)]
mod cli_tests {
    use std::fs::{self, File};
    use std::io::Write;
    use std::process::Command;
    use tempfile::tempdir;

    fn run_typesift(args: &[&str]) -> std::process::Output {
        let mut cmd = Command::new("cargo");
        cmd.args(["run", "--bin", "typesift", "--"])
            .args(args)
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());
        cmd.output().expect("Failed to run typesift")
    }

    #[test]
    fn test_cli_classifies_named_inputs() {
        let input_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();

        let file = input_dir.path().join("sample.json");
        let mut f = File::create(&file).unwrap();
        write!(
            f,
            "{{\"screen\": {{\"type\": \"Screen\", \"items\": [{{\"type\": \"Button\"}}]}}}}"
        )
        .unwrap();

        let spec = format!("api1={}", file.display());
        let output = run_typesift(&[
            &spec,
            "--output",
            output_dir.path().to_str().unwrap(),
            "--quiet",
        ]);

        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        assert!(output_dir.path().join("api1/Screen.json").exists());
        assert!(output_dir.path().join("api1/Button.json").exists());
        assert!(output_dir.path().join("merged/Button.json").exists());
        assert!(output_dir.path().join("summary.json").exists());
    }

    #[test]
    fn test_cli_fails_on_invalid_json() {
        let input_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();

        let file = input_dir.path().join("broken.json");
        fs::write(&file, "{\"type\": ").unwrap();

        let output = run_typesift(&[
            file.to_str().unwrap(),
            "--output",
            output_dir.path().to_str().unwrap(),
            "--quiet",
        ]);

        assert!(!output.status.success());
    }

    #[test]
    fn test_cli_skips_missing_input() {
        let input_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();

        let absent = input_dir.path().join("absent.json");
        let output = run_typesift(&[
            absent.to_str().unwrap(),
            "--output",
            output_dir.path().to_str().unwrap(),
            "--quiet",
        ]);

        assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
        assert!(output_dir.path().join("summary.json").exists());
        assert!(!output_dir.path().join("absent").exists());
    }
}
