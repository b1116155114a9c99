use anyhow::{Context, Result};
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

/// Local stand-in for the control plane. Answers each connection with the
/// next scripted response and keeps the raw requests it received.
struct FakeControlPlane {
    base_url: String,
    received: Arc<Mutex<Vec<String>>>,
}

impl FakeControlPlane {
    fn start(script: Vec<(u16, &'static str)>) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")?;
        let base_url = format!("http://{}", listener.local_addr()?);
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        // Left blocked on accept() when fewer calls arrive than scripted.
        thread::spawn(move || {
            for (status, body) in script {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                let Ok(request) = read_request(&mut stream) else {
                    return;
                };
                if let Ok(mut log) = log.lock() {
                    log.push(request);
                }
                let reply = format!(
                    "HTTP/1.1 {} Scripted\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = stream.write_all(reply.as_bytes());
                let _ = stream.flush();
            }
        });

        Ok(Self { base_url, received })
    }

    fn received(&self) -> Vec<String> {
        self.received.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

fn read_request(stream: &mut TcpStream) -> std::io::Result<String> {
    let mut raw = Vec::new();
    let mut buf = [0u8; 2048];
    loop {
        let n = stream.read(&mut buf)?;
        if n == 0 {
            break;
        }
        raw.extend_from_slice(&buf[..n]);

        let text = String::from_utf8_lossy(&raw);
        if let Some(split) = text.find("\r\n\r\n") {
            let content_length = text[..split]
                .lines()
                .filter_map(|l| l.split_once(':'))
                .find(|(k, _)| k.trim().eq_ignore_ascii_case("content-length"))
                .and_then(|(_, v)| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if raw.len() >= split + 4 + content_length {
                break;
            }
        }
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}

/// Temporary working directory holding a streamforge.yaml.
struct StreamforgeTestEnv {
    _tmp: TempDir,
    root: PathBuf,
}

impl StreamforgeTestEnv {
    fn new(base_url: &str) -> Result<Self> {
        let tmp = tempfile::tempdir()?;
        let root = tmp.path().to_path_buf();
        let config = format!(
            r#"
project_id: demo-proj
location: us-central1
source_profile:
  display_name: orders-mysql
  profile_id: orders-mysql-cp
  hostname: 10.0.0.12
  port: 3306
  username: replicator
destination_profile:
  display_name: orders-landing
  profile_id: orders-gcs-cp
  bucket_name: orders-landing-bucket
  root_path: /cdc
stream:
  stream_id: orders-stream
  display_name: Orders CDC
api:
  primary_base_url: {base}/v1
  preview_base_url: {base}/v1alpha1
settle:
  seconds: 0
"#,
            base = base_url
        );
        std::fs::write(root.join("streamforge.yaml"), config)?;
        Ok(Self { _tmp: tmp, root })
    }

    fn streamforge(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("streamforge"));
        cmd.current_dir(&self.root)
            .env("STREAMFORGE_AUTH_TOKEN", "test-token")
            .env("STREAMFORGE_DB_PASSWORD", "test-password")
            .env_remove("STREAMFORGE_PROJECT_ID")
            .env_remove("STREAMFORGE_LOCATION");
        for proxy in ["HTTP_PROXY", "http_proxy", "HTTPS_PROXY", "https_proxy", "ALL_PROXY", "all_proxy"] {
            cmd.env_remove(proxy);
        }
        cmd
    }
}

fn positions_in_order(haystack: &str, needles: &[&str]) -> bool {
    let mut from = 0;
    for needle in needles {
        match haystack[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => return false,
        }
    }
    true
}

#[test]
fn test_full_run_prints_four_confirmations_in_order() -> Result<()> {
    let plane = FakeControlPlane::start(vec![(200, "{}"), (200, "{}"), (200, "{}"), (200, "{}")])?;
    let env = StreamforgeTestEnv::new(&plane.base_url)?;

    let output = env.streamforge().arg("provision").assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout)?;

    assert!(positions_in_order(
        &stdout,
        &[
            "Source connection profile orders-mysql created successfully",
            "Destination connection profile orders-gcs-cp created successfully",
            "Stream Orders CDC created successfully",
            "Stream Orders CDC started successfully",
            "Process Completed!",
        ]
    ));

    let received = plane.received();
    assert_eq!(received.len(), 4);
    assert!(received[0].starts_with(
        "POST /v1/projects/demo-proj/locations/us-central1/connectionProfiles?connectionProfileId=orders-mysql-cp "
    ));
    assert!(received[1].starts_with(
        "POST /v1alpha1/projects/demo-proj/locations/us-central1/connectionProfiles?connectionProfileId=orders-gcs-cp "
    ));
    assert!(received[2].starts_with(
        "POST /v1alpha1/projects/demo-proj/locations/us-central1/streams?streamId=orders-stream "
    ));
    assert!(received[3].starts_with(
        "PATCH /v1/projects/demo-proj/locations/us-central1/streams/orders-stream?updateMask=state "
    ));
    assert!(
        received
            .iter()
            .all(|r| r.to_lowercase().contains("authorization: bearer test-token"))
    );
    assert!(received[0].contains("\"password\":\"test-password\""));
    assert!(received[3].ends_with(r#"{"state":"RUNNING"}"#));
    Ok(())
}

#[test]
fn test_stream_creation_failure_prints_body_and_never_starts() -> Result<()> {
    let plane = FakeControlPlane::start(vec![
        (200, "{}"),
        (200, "{}"),
        (500, r#"{"error":"invalid argument"}"#),
        (200, "{}"),
    ])?;
    let env = StreamforgeTestEnv::new(&plane.base_url)?;

    env.streamforge()
        .arg("provision")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#"{"error":"invalid argument"}"#))
        .stdout(predicate::str::contains("started successfully").not())
        .stdout(predicate::str::contains("Process Completed!").not());

    assert_eq!(plane.received().len(), 3);
    Ok(())
}

#[test]
fn test_existing_source_profile_is_accepted() -> Result<()> {
    let plane = FakeControlPlane::start(vec![(409, "{}"), (200, "{}"), (200, "{}"), (200, "{}")])?;
    let env = StreamforgeTestEnv::new(&plane.base_url)?;

    let output = env.streamforge().arg("provision").assert().success().get_output().clone();
    let stdout = String::from_utf8(output.stdout)?;

    assert!(positions_in_order(
        &stdout,
        &[
            "Source connection profile orders-mysql already exist",
            "Destination connection profile orders-gcs-cp created successfully",
        ]
    ));
    assert_eq!(plane.received().len(), 4);
    Ok(())
}

#[test]
fn test_source_failure_stops_after_first_call() -> Result<()> {
    let plane = FakeControlPlane::start(vec![(403, "permission denied"), (200, "{}")])?;
    let env = StreamforgeTestEnv::new(&plane.base_url)?;

    env.streamforge()
        .arg("provision")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Issue while creating source connection profile: permission denied",
        ));

    assert_eq!(plane.received().len(), 1);
    Ok(())
}

#[test]
fn test_unreachable_control_plane_exits_non_zero() -> Result<()> {
    // Port from a listener that is dropped straight away.
    let port = TcpListener::bind("127.0.0.1:0")?.local_addr()?.port();
    let env = StreamforgeTestEnv::new(&format!("http://127.0.0.1:{}", port))?;

    env.streamforge().arg("provision").assert().code(1);
    Ok(())
}

#[test]
fn test_start_command_rejects_conflict() -> Result<()> {
    let plane = FakeControlPlane::start(vec![(409, "already running")])?;
    let env = StreamforgeTestEnv::new(&plane.base_url)?;

    env.streamforge()
        .arg("start")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Issue while starting stream: already running",
        ));

    let received = plane.received();
    assert_eq!(received.len(), 1);
    assert!(received[0].starts_with("PATCH "));
    Ok(())
}

#[test]
fn test_rust_log_debug_shows_request_details() -> Result<()> {
    let plane = FakeControlPlane::start(vec![(200, "{}")])?;
    let env = StreamforgeTestEnv::new(&plane.base_url)?;

    env.streamforge()
        .arg("start")
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("Control plane answered"));
    Ok(())
}

#[test]
fn test_default_log_level_hides_debug_events() -> Result<()> {
    let plane = FakeControlPlane::start(vec![(200, "{}")])?;
    let env = StreamforgeTestEnv::new(&plane.base_url)?;

    env.streamforge()
        .arg("start")
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("Sending request"))
        .stderr(predicate::str::contains("Control plane answered").not());
    Ok(())
}

#[test]
fn test_plan_masks_password_and_sends_nothing() -> Result<()> {
    let plane = FakeControlPlane::start(vec![(200, "{}")])?;
    let env = StreamforgeTestEnv::new(&plane.base_url)?;

    env.streamforge()
        .args(["plan", "--bodies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create-source-profile"))
        .stdout(predicate::str::contains("streams/orders-stream?updateMask=state"))
        .stdout(predicate::str::contains("********"))
        .stdout(predicate::str::contains("test-password").not());

    assert!(plane.received().is_empty());
    Ok(())
}

#[test]
fn test_missing_configuration_fails() -> Result<()> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().to_str().context("non-utf8 temp path")?;

    Command::new(assert_cmd::cargo::cargo_bin!("streamforge"))
        .args(["provision", "--dir", dir])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("configuration not found"));
    Ok(())
}
