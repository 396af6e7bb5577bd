//! Browser integration tests — verifies the generated page's behavior in a
//! real engine: anchor uniqueness, fragment scrolling, image fallback.
//!
//! These tests use headless Chrome over a local HTTP server so script
//! behavior (scroll state, image error events) matches deployment rather
//! than file:// quirks.
//!
//! Run with: `cargo test --test browser_page -- --ignored`

use headless_chrome::{Browser, LaunchOptions, Tab};
use std::io::{Read as _, Write as _};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::Command;
use std::sync::OnceLock;
use std::thread;
use std::time::Duration;

// ===========================================================================
// Minimal HTTP server (script behavior differs on file://)
// ===========================================================================

struct TestServer {
    port: u16,
    _stop: std::sync::mpsc::Sender<()>,
}

impl TestServer {
    fn start(root: PathBuf) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let (tx, rx) = std::sync::mpsc::channel::<()>();

        thread::spawn(move || {
            listener.set_nonblocking(true).unwrap();
            loop {
                if rx.try_recv().is_ok() {
                    break;
                }
                match listener.accept() {
                    Ok((stream, _)) => {
                        let root = root.clone();
                        thread::spawn(move || serve_request(stream, &root));
                    }
                    Err(ref e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(5));
                    }
                    Err(_) => break,
                }
            }
        });

        Self { port, _stop: tx }
    }

    fn url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

fn serve_request(mut stream: std::net::TcpStream, root: &std::path::Path) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(5)));
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(n) if n > 0 => n,
        _ => return,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request.split_whitespace().nth(1).unwrap_or("/");
    let path = path.split(['?', '#']).next().unwrap_or("/");
    let rel = path.trim_start_matches('/');
    let file_path = if rel.is_empty() {
        root.join("index.html")
    } else {
        root.join(rel)
    };

    let (status, body, ct) = if file_path.is_file() {
        let body = std::fs::read(&file_path).unwrap_or_default();
        let ext = file_path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let ct = match ext {
            "html" => "text/html; charset=utf-8",
            "js" => "application/javascript",
            "css" => "text/css",
            "json" => "application/json",
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "pdf" => "application/pdf",
            _ => "application/octet-stream",
        };
        ("200 OK", body, ct)
    } else {
        ("404 Not Found", b"Not Found".to_vec(), "text/plain")
    };

    let header = format!(
        "HTTP/1.1 {status}\r\n\
         Content-Type: {ct}\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         \r\n",
        body.len()
    );
    let _ = stream.write_all(header.as_bytes());
    let _ = stream.write_all(&body);
}

// ===========================================================================
// Setup helpers
// ===========================================================================

fn generated_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/browser/generated")
}

fn ensure_fixtures_built() {
    static BUILT: OnceLock<()> = OnceLock::new();
    BUILT.get_or_init(|| {
        let bin = env!("CARGO_BIN_EXE_folio-one");
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        let status = Command::new(bin)
            .args([
                "build",
                "--source",
                root.join("fixtures/browser-content").to_str().unwrap(),
                "--output",
                root.join("tests/browser/generated").to_str().unwrap(),
                "--temp-dir",
                root.join(".folio-one-browser-temp").to_str().unwrap(),
            ])
            .status()
            .expect("failed to run folio-one");
        assert!(status.success(), "fixture generation failed");
    });
}

fn browser() -> &'static Browser {
    static B: OnceLock<Browser> = OnceLock::new();
    B.get_or_init(|| {
        Browser::new(LaunchOptions {
            window_size: Some((1280, 800)),
            ..Default::default()
        })
        .expect("failed to launch Chrome")
    })
}

fn start_server() -> TestServer {
    ensure_fixtures_built();
    TestServer::start(generated_dir())
}

fn eval_f64(tab: &Tab, js: &str) -> f64 {
    tab.evaluate(js, false)
        .unwrap()
        .value
        .unwrap()
        .as_f64()
        .unwrap()
}

// ===========================================================================
// Anchor contract
// ===========================================================================

#[test]
#[ignore]
fn each_section_anchor_exists_exactly_once() {
    let server = start_server();
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&server.url())
        .unwrap()
        .wait_until_navigated()
        .unwrap();

    for slug in ["about", "projects", "skills", "contact"] {
        let count = eval_f64(
            &tab,
            &format!("document.querySelectorAll('#{slug}').length"),
        );
        assert_eq!(count, 1.0, "anchor #{slug}");
    }
}

// ===========================================================================
// Fragment navigation
// ===========================================================================

#[test]
#[ignore]
fn fragment_load_scrolls_contact_into_view() {
    let server = start_server();
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&format!("{}/#contact", server.url()))
        .unwrap()
        .wait_until_navigated()
        .unwrap();

    // Grace delay (100 ms) plus smooth-scroll settling
    thread::sleep(Duration::from_millis(1500));

    let scroll_y = eval_f64(&tab, "window.scrollY");
    assert!(scroll_y > 0.0, "page should have scrolled, got {scroll_y}");

    let top = eval_f64(
        &tab,
        "document.getElementById('contact').getBoundingClientRect().top",
    );
    let viewport = eval_f64(&tab, "window.innerHeight");
    assert!(
        top >= -1.0 && top < viewport,
        "contact top {top} should be inside the {viewport}px viewport"
    );
}

// ===========================================================================
// Image fallback
// ===========================================================================

#[test]
#[ignore]
fn broken_portrait_falls_back_to_placeholder_data_uri() {
    let server = start_server();
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&server.url())
        .unwrap()
        .wait_until_navigated()
        .unwrap();

    // Primary 404s, the alternate 404s, then the placeholder goes in
    thread::sleep(Duration::from_millis(1500));

    let src = tab
        .evaluate("document.querySelector('.hero-portrait img').src", false)
        .unwrap()
        .value
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();
    assert!(
        src.starts_with("data:image/svg+xml"),
        "expected placeholder data URI, got {src}"
    );

    let alt = tab
        .evaluate("document.querySelector('.hero-portrait img').alt", false)
        .unwrap()
        .value
        .unwrap()
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(alt, "Placeholder image");
}

// ===========================================================================
// Skill counters
// ===========================================================================

#[test]
#[ignore]
fn counters_settle_on_their_targets_after_scrolling_to_skills() {
    let server = start_server();
    let tab = browser().new_tab().unwrap();
    tab.navigate_to(&server.url())
        .unwrap()
        .wait_until_navigated()
        .unwrap();

    tab.evaluate(
        "document.getElementById('skills').scrollIntoView()",
        false,
    )
    .unwrap();
    // Count duration is 2000 ms; allow settling
    thread::sleep(Duration::from_millis(3000));

    let mismatches = eval_f64(
        &tab,
        "Array.from(document.querySelectorAll('[data-counter]')).filter(function (el) {\
             return el.textContent !== el.getAttribute('data-counter') + '%';\
         }).length",
    );
    assert_eq!(mismatches, 0.0, "all counters should display their targets");
}
