//! Hornet Deck - 生成演示文稿并渲染为 HTML
//!
//! 不带参数时输出内置示例文稿；带主题参数时生成该主题的文稿
//! （设置了 OPENAI_API_KEY 则用 LLM 辅助，否则纯模板）。
//! 产物：deck.json、presentation_light.html、presentation_dark.html。

use std::sync::Arc;

use anyhow::Context;
use hornet::config::load_config;
use hornet::deck::{DeckGenerator, Theme};
use hornet::llm::OpenAiClient;
use hornet::render::render_deck_with_theme;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hornet::observability::init();

    let topic: Option<String> = {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.is_empty() {
            None
        } else {
            Some(args.join(" "))
        }
    };

    let cfg = load_config(None).unwrap_or_default();

    let deck = match &topic {
        None => {
            println!("📝 Generating sample deck...");
            DeckGenerator::sample_deck()
        }
        Some(topic) => {
            let generator = if std::env::var("OPENAI_API_KEY").is_ok() {
                println!("🤖 Generating deck about '{}' with LLM assistance...", topic);
                let llm = Arc::new(OpenAiClient::new(
                    cfg.llm.base_url.as_deref(),
                    &cfg.llm.model,
                    None,
                ));
                DeckGenerator::with_llm(llm, cfg.llm.temperature)
            } else {
                println!("📋 Generating deck about '{}' from templates...", topic);
                DeckGenerator::new()
            };
            generator.generate(topic, cfg.deck.slides).await
        }
    };

    deck.save_json("deck.json").context("Saving deck.json")?;
    println!("✅ Deck saved to deck.json");

    for (theme, path) in [
        (Theme::Light, "presentation_light.html"),
        (Theme::Dark, "presentation_dark.html"),
    ] {
        let html = render_deck_with_theme(&deck, theme);
        std::fs::write(path, html).with_context(|| format!("Writing {}", path))?;
        println!("✅ Rendered {}", path);
    }

    Ok(())
}
