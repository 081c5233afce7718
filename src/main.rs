//! Preview binary - boots the page against an in-memory document
//!
//! Usage:
//!   cargo run                                   # Load data/translations.json
//!   echo en | cargo run                         # Switch to English after boot
//!   TRANSLATIONS_SOURCE=https://site/t.json cargo run
//!
//! Each stdin line is a click: a language code ("en") or an element id
//! ("lang-zh"). The document is printed after boot and after every click,
//! followed by a JSON metrics report when stdin closes.
//!
//! Optional environment variables:
//! - TRANSLATIONS_SOURCE (defaults to data/translations.json)
//! - SITE_BASE_URL (resolve a relative TRANSLATIONS_SOURCE over HTTP)
//! - DEFAULT_LANGUAGE (defaults to zh)
//! - PAGE_TEXT_KEYS, PAGE_PLACEHOLDER_KEYS (comma-separated keys to place on the page)

use anyhow::Result;
use site_i18n::config::Config;
use site_i18n::dom::MemoryDocument;
use site_i18n::i18n::Language;
use site_i18n::loader::TranslationLoader;
use site_i18n::page::Page;
use site_i18n::presentation::ClickEvent;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only document snapshots
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_i18n=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let source = config.translation_source()?;
    info!("Loading translations from {}", source);

    let loader = TranslationLoader::new(source);
    let doc = MemoryDocument::page_skeleton(
        config.text_keys.as_slice(),
        config.placeholder_keys.as_slice(),
    );
    let page = Page::new(doc, config.default_language);

    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let target = line.trim();
                    if target.is_empty() {
                        continue;
                    }
                    let event = match Language::from_code(target) {
                        Ok(lang) => ClickEvent::on_control(lang),
                        Err(_) => ClickEvent::new(target),
                    };
                    if tx.send(event).is_err() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!("Failed to read stdin: {}", e);
                    break;
                }
            }
        }
    });

    let page = page
        .run(&loader, rx, |doc| println!("{}", doc))
        .await;

    let report = page.applier().metrics().report();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
