//! Minimal HTTP/1.1 server that answers git smart-HTTP discovery for integration tests.
//!
//! `GET /<repo>/info/refs?service=git-upload-pack` returns 200 with a short ref
//! advertisement for known repositories, 404 for unknown ones. A few fixed
//! paths simulate server failures and redirects.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

const DISCOVERY_SUFFIX: &str = "/info/refs?service=git-upload-pack";
const ADVERTISEMENT: &str = "001e# service=git-upload-pack\n0000";

/// Starts a server in a background thread serving `repos` (paths like "x/y.git").
/// Returns the base URL (e.g. "http://127.0.0.1:12345"). The server runs until
/// the process exits.
///
/// Fixed paths: `broken.git` answers 500, `moved.git` redirects to the first repo.
pub fn start(repos: &[&str]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let repos: Arc<Vec<String>> = Arc::new(repos.iter().map(|r| r.to_string()).collect());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let repos = Arc::clone(&repos);
            thread::spawn(move || handle(stream, &repos));
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Base URL of a port nobody listens on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

fn handle(mut stream: std::net::TcpStream, repos: &[String]) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let target = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let response = match target.strip_suffix(DISCOVERY_SUFFIX) {
        Some(path) => respond_discovery(path.trim_start_matches('/'), repos),
        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_string(),
    };
    let _ = stream.write_all(response.as_bytes());
}

fn respond_discovery(repo: &str, repos: &[String]) -> String {
    if repo == "broken.git" {
        return "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\n\r\n".to_string();
    }
    if repo == "moved.git" {
        if let Some(first) = repos.first() {
            return format!(
                "HTTP/1.1 301 Moved Permanently\r\nLocation: /{}{}\r\nContent-Length: 0\r\n\r\n",
                first, DISCOVERY_SUFFIX
            );
        }
    }
    if repos.iter().any(|r| r == repo) {
        return format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/x-git-upload-pack-advertisement\r\nContent-Length: {}\r\n\r\n{}",
            ADVERTISEMENT.len(),
            ADVERTISEMENT
        );
    }
    "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n".to_string()
}
