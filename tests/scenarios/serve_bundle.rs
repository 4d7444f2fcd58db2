//! Scenario: export a bundle, then serve it unmodified

use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};

use muwanx::application::launch::bind;
use muwanx::{ExportFormat, LaunchOptions};

use crate::common::*;

fn get(addr: SocketAddr, path: &str) -> Vec<u8> {
    let mut stream = TcpStream::connect(addr).unwrap();
    write!(
        stream,
        "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        path
    )
    .unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).unwrap();
    response
}

fn body(response: &[u8]) -> &[u8] {
    let split = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    &response[split + 4..]
}

#[test]
fn scenario_served_files_match_exported_files() {
    let env = TestEnv::new();
    write_main_demo(&env);
    main_g1_tracking(env.root.path())
        .export(env.path("dist"), ExportFormat::Bundle, false)
        .unwrap();

    let options = LaunchOptions::new()
        .with_host("127.0.0.1")
        .with_port(0)
        .with_open_browser(false);
    let server = bind(&env.path("dist"), &options).unwrap();
    let addr = server.local_addr();
    let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
    let handle = std::thread::spawn(move || {
        server.serve_until(async move {
            let _ = stopped.await;
        })
    });

    for rel in list_files(&env.path("dist")) {
        let response = get(addr, &format!("/{}", rel));
        assert!(response.starts_with(b"HTTP/1.1 200"), "GET /{rel} failed");
        assert_eq!(body(&response), std::fs::read(env.path("dist").join(&rel)).unwrap());
    }

    stop.send(()).unwrap();
    handle.join().unwrap().unwrap();
}
