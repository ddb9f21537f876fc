mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::prelude::*;
    use mockito::Server;
    use predicates::str::contains;

    use std::io::Write;
    use std::process::Command;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "upwatch";

    /// Write an endpoint catalog that probes the given URLs
    fn catalog(entries: &[(&str, &str)]) -> Result<tempfile::NamedTempFile, std::io::Error> {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        for (key, url) in entries {
            writeln!(file, "[endpoints.{key}]\nurl = \"{url}\"\n")?;
        }
        Ok(file)
    }

    #[test]
    fn test_output__when_no_sources_provided() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.assert()
            .failure()
            .stderr(contains("Error: No sources provided"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_all_rows_online() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create();
        let file = catalog(&[("alpha", &(server.url() + "/200"))])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(file.path()).arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains("OK (200)"))
            .stdout(contains("1/1 rows online (0 offline, 0 skipped)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__when_row_offline() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create();
        let _m404 = server.mock("GET", "/404").with_status(404).create();
        let file = catalog(&[
            ("alpha", &(server.url() + "/200")),
            ("beta", &(server.url() + "/404")),
        ])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(file.path()).arg("--no-config");

        cmd.assert()
            .failure()
            .stdout(contains("Error 404"))
            .stdout(contains("1/2 rows online (1 offline, 0 skipped)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__empty_url_rows_are_skipped() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create();
        let file = catalog(&[("alpha", &(server.url() + "/200")), ("placeholder", "")])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(file.path()).arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains("Pending"))
            .stdout(contains("1/2 rows online (0 offline, 1 skipped)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__json_format() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create();
        let file = catalog(&[("alpha", &(server.url() + "/200"))])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(file.path())
            .arg("--no-config")
            .arg("--format")
            .arg("json");

        let output = cmd.assert().success().get_output().stdout.clone();
        let value: serde_json::Value = serde_json::from_slice(&output)?;

        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["summary"]["online"], 1);
        assert_eq!(value["rows"][0]["key"], "alpha");
        assert_eq!(value["rows"][0]["status_label"], "OK (200)");
        Ok(())
    }

    #[tokio::test]
    async fn test_output__minimal_format() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create();
        let endpoint = server.url() + "/200";
        let file = catalog(&[("alpha", &endpoint)])?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(file.path())
            .arg("--no-config")
            .arg("--format")
            .arg("minimal");

        cmd.assert()
            .success()
            .stdout(contains(format!("OK (200) {endpoint}")));
        Ok(())
    }

    #[tokio::test]
    async fn test_output__sheet_export_source() -> TestResult {
        let mut server = Server::new_async().await;
        let _m200 = server.mock("GET", "/200").with_status(200).create();
        let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
        write!(
            file,
            r#"[{{"link": "{}/200", "comment": "from sheet"}}]"#,
            server.url()
        )?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(file.path()).arg("--no-config");

        cmd.assert()
            .success()
            .stdout(contains("OK (200)"))
            .stdout(contains("from sheet"));
        Ok(())
    }

    #[test]
    fn test_output__when_unknown_source_kind() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("rows.csv").arg("--no-config");

        cmd.assert()
            .failure()
            .stderr(contains("Cannot tell what kind of source"));
        Ok(())
    }

    #[test]
    fn test_output__when_catalog_missing() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("no-such-catalog.toml").arg("--no-config");

        cmd.assert()
            .failure()
            .stderr(contains("Could not read endpoint catalog"));
        Ok(())
    }

    #[test]
    fn test_args__invalid_timeout_rejected() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("endpoints.toml")
            .arg("--no-config")
            .arg("--timeout")
            .arg("0");

        cmd.assert()
            .failure()
            .stderr(contains("Timeout must be positive"));
        Ok(())
    }

    #[test]
    fn test_args__zero_batch_size_rejected() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("endpoints.toml")
            .arg("--no-config")
            .arg("--batch-size")
            .arg("0");

        cmd.assert()
            .failure()
            .stderr(contains("Batch size cannot be 0"));
        Ok(())
    }

    #[test]
    fn test_args__unknown_format_rejected() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("endpoints.toml")
            .arg("--no-config")
            .arg("--format")
            .arg("yaml");

        cmd.assert().failure();
        Ok(())
    }

    #[test]
    fn test_completion_generate() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("completion-generate").arg("bash");

        cmd.assert().success().stdout(contains("upwatch"));
        Ok(())
    }

    #[tokio::test]
    async fn test_config_file_sets_head_requests() -> TestResult {
        let mut server = Server::new_async().await;
        let _head = server.mock("HEAD", "/200").with_status(200).create();
        let rows = catalog(&[("alpha", &(server.url() + "/200"))])?;
        let mut config_file = tempfile::Builder::new().suffix(".toml").tempfile()?;
        writeln!(config_file, "use_head_requests = true")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg(rows.path())
            .arg("--config")
            .arg(config_file.path());

        cmd.assert().success().stdout(contains("OK (200)"));
        Ok(())
    }
}
