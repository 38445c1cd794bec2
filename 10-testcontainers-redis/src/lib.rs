//! Chapter 10: container-backed integration testing.
//!
//! The tests in `tests/redis_container.rs` start a throwaway Redis in a
//! container, run real commands against it, and let the container be torn
//! down when the handle drops. They are `#[ignore]`d because they need a
//! local Docker daemon; run them with
//! `cargo test -p redis-integration -- --ignored`.

/// Connection URL for a Redis reachable at `host:port`.
pub fn connection_url(host: &str, port: u16) -> String {
    format!("redis://{host}:{port}")
}
