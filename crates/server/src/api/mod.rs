mod nearest;

pub use nearest::*;

pub async fn health() -> &'static str {
    "OK"
}
