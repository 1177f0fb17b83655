//! Headless integration tests driven through `TestScene`.
