use anyhow::{bail, Context};
use clap::Parser;
use corner_detect::{api, cli, config, download, page, picker};
use corner_detect_common::view::PROCESSING_LABEL;
use corner_detect_common::Algorithm;
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;

use api::BackendClient;
use cli::{Cli, Commands};
use config::Config;
use page::Page;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    // --base-url / config --set-base-url は壊れた設定の修復にも使う
    let explicit = cli.base_url.as_deref().or(match &cli.command {
        Commands::Config { set_base_url, .. } => set_base_url.as_deref(),
        _ => None,
    });
    let mut config = Config::resolve(
        &Config::config_path()?,
        std::env::var(config::BASE_URL_ENV).ok(),
        explicit,
    )
    .context("設定の読み込みに失敗")?;

    match cli.command {
        Commands::Upload { file } => {
            let page = Page::new(BackendClient::from_config(&config)?);
            select(&page, &file)?;

            if !page.upload().await? {
                bail!("アップロードに失敗しました: {}", file.display());
            }
            println!("✔ {}", page.state().status_message().unwrap_or_default());
        }

        Commands::Detect { algorithm, save } => {
            let client = BackendClient::from_config(&config)?;
            let spinner = spinner(algorithm);
            let url = client.detect(algorithm).await;
            spinner.finish_and_clear();

            match url? {
                Some(url) => {
                    println!("✔ {}: {}", algorithm.label(), url);
                    if let Some(dir) = save {
                        let path = download::save_output(&client, &url, &dir).await?;
                        println!("  保存: {}", path.display());
                    }
                }
                None => println!("✘ {}: 結果なし", algorithm.label()),
            }
        }

        Commands::Run { file, algorithms, save } => {
            let page = Page::new(BackendClient::from_config(&config)?);

            println!("[1/2] アップロード中...");
            select(&page, &file)?;
            if !page.upload().await? {
                bail!("アップロードに失敗しました: {}", file.display());
            }
            println!("✔ {}\n", page.state().status_message().unwrap_or_default());

            let algorithms = Commands::resolve_algorithms(&algorithms);
            println!("[2/2] コーナー検出中...");
            for algorithm in algorithms {
                let spinner = spinner(algorithm);
                let result = page.run_detection(algorithm).await;
                spinner.finish_and_clear();

                match result {
                    Ok(Some(url)) => {
                        println!("✔ {}: {}", algorithm.label(), url);
                        if let Some(dir) = &save {
                            let path = download::save_output(page.client(), &url, dir).await?;
                            println!("  保存: {}", path.display());
                        }
                    }
                    Ok(None) => println!("✘ {}: 結果なし", algorithm.label()),
                    Err(e) => println!("✘ {}: {}", algorithm.label(), e),
                }
            }

            println!("\n✅ 完了");
        }

        Commands::Ping => {
            let client = BackendClient::from_config(&config)?;
            if client.ping().await? {
                println!("✔ {} は応答しています", client.origin());
            } else {
                bail!("{} から pong が返りませんでした", client.origin());
            }
        }

        Commands::Config { set_base_url, show } => {
            if let Some(url) = set_base_url {
                config.set_base_url(&url)?;
                config.save()?;
                println!("✔ ベースURLを設定しました");
            }

            if show {
                println!("設定:");
                println!("  ベースURL: {}", config.base_url);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn select(page: &Page, file: &Path) -> anyhow::Result<()> {
    let selected = picker::load_image(file)
        .with_context(|| format!("画像を読み込めません: {}", file.display()))?;
    page.select_file(Some(selected));
    Ok(())
}

fn spinner(algorithm: Algorithm) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("{} {}", algorithm.label(), PROCESSING_LABEL));
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}
