use chrono::Local;
use hyper::Method;
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, root: &Path) {
    println!("======================================");
    println!("Static file server started");
    println!("Listening on: http://{addr}");
    println!("Serving directory: {}", root.display());
    println!("======================================\n");
}

pub fn log_server_stop() {
    println!("\nServer stopped.");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[Error] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

/// One line per completed request, in the classic dev-server shape.
pub fn log_access(method: &Method, path: &str, status: u16) {
    println!(
        "[{}] \"{} {}\" {}",
        Local::now().format("%d/%b/%Y %H:%M:%S"),
        method,
        path,
        status
    );
}
