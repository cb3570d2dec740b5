//! PDF Rule Checker CLI
//!
//! 共通ロジック（rule_check_common）にHTTP送信・クリップボード・端末表示を組み合わせる

pub mod cli;
pub mod client;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod output;
pub mod rules;
