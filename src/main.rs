use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rule_check::{cli, client, clipboard, config, output, rules};
use cli::{Cli, Commands};
use config::Config;
use rule_check_common::{
    serialize_for_clipboard, CheckSession, DocumentFile, RequestState, ResultView,
};
use std::time::Duration;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // --verbose は RUST_LOG より優先
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("ログ出力の初期化に失敗")?;

    let mut config = Config::load()?;

    match cli.command {
        Commands::Check { pdf, rule1, rule2, rule3, interactive, copy, json, endpoint } => {
            let mut session: CheckSession<DocumentFile> = CheckSession::new();
            rules::load_document(&mut session, &pdf)?;
            rules::apply_rules(&mut session, [rule1.as_str(), rule2.as_str(), rule3.as_str()]);
            if interactive {
                rules::prompt_rules(&mut session)?;
            }

            let base_url = endpoint.unwrap_or_else(|| config.resolve_endpoint());
            let transport = client::HttpTransport::new(&base_url, &config)?;
            tracing::debug!(url = transport.url(), "using analysis endpoint");

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.cyan} {msg}")
                    .context("スピナーの設定に失敗")?,
            );
            spinner.set_message("Checking...");
            spinner.enable_steady_tick(Duration::from_millis(100));

            // ファイル未設定は load_document で弾くため、ここでのエラーはセッションに反映済み
            if let Err(err) = client::submit(&mut session, &transport).await {
                tracing::debug!(error = %err, "submission rejected");
            }
            spinner.finish_and_clear();

            if let Some(result) = session.result() {
                if json {
                    match serialize_for_clipboard(result) {
                        Ok(text) => println!("{}", text),
                        Err(err) => output::print_error(&err.user_message()),
                    }
                } else {
                    println!("{}", output::render_result(&ResultView::render(result)));
                }
            }

            if copy && session.state() == RequestState::Succeeded {
                let clipboard = clipboard::SystemClipboard::detect();
                match clipboard::copy_result(&mut session, &clipboard).await {
                    Ok(Some(_)) => eprintln!("{}", "Copied!".green()),
                    // 失敗はセッションのエラー表示に反映済み
                    Ok(None) | Err(_) => {}
                }
            }

            if let Some(message) = session.error() {
                output::print_error(message);
                std::process::exit(1);
            }
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut changed = false;

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                changed = true;
            }

            if let Some(seconds) = set_timeout {
                config.timeout_seconds = if seconds == 0 { None } else { Some(seconds) };
                changed = true;
            }

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  エンドポイント: {}", config.resolve_endpoint());
                println!(
                    "  タイムアウト: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{}秒", s))
                        .unwrap_or_else(|| "既定".to_string())
                );
                if std::env::var(config::ENDPOINT_ENV).is_ok() {
                    println!("  ({} が設定されています)", config::ENDPOINT_ENV);
                }
            }
        }
    }

    Ok(())
}
