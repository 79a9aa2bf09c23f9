//! HTML 渲染层：把 Deck 结构渲染成无 JS 的静态幻灯片页面
//!
//! 纯函数式模板替换：六种布局各有固定结构，缺失字段降级为占位文案，渲染不会失败。

mod styles;

use crate::deck::{Deck, Layout, Slide, SlideContent, Theme};
use styles::{BASE_STYLES, DARK_THEME_STYLES, LIGHT_THEME_STYLES};

/// Deck 渲染器：持有主题，render_deck 产出完整 HTML 文档
pub struct HtmlRenderer {
    theme: Theme,
}

impl HtmlRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// 渲染完整文稿：头部（标题/作者）+ 逐张幻灯片 + 脚注
    pub fn render_deck(&self, deck: &Deck) -> String {
        let slides_html: String = deck
            .slides
            .iter()
            .enumerate()
            .map(|(i, slide)| self.render_slide(slide, i + 1))
            .collect();

        let author_html = if deck.author.is_empty() {
            String::new()
        } else {
            format!("<p class=\"author\">by {}</p>", deck.author)
        };

        let theme_styles = match self.theme {
            Theme::Light => LIGHT_THEME_STYLES,
            Theme::Dark => DARK_THEME_STYLES,
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>
        {base}
        {theme}
    </style>
</head>
<body>
    <div class="presentation-container">
        <header class="presentation-header">
            <h1>{title}</h1>
            {author}
        </header>
        <main class="slides-container">
            {slides}
        </main>
        <footer class="presentation-footer">
            <p>Generated with Hornet</p>
        </footer>
    </div>
</body>
</html>"#,
            title = deck.title,
            base = BASE_STYLES,
            theme = theme_styles,
            author = author_html,
            slides = slides_html,
        )
    }

    /// 渲染单张幻灯片（slide_number 从 1 开始）
    pub fn render_slide(&self, slide: &Slide, slide_number: usize) -> String {
        let c = &slide.content;
        match slide.layout {
            Layout::Title => Self::title_slide(c, slide_number),
            Layout::TwoColumn => Self::two_column_slide(c, slide_number),
            Layout::ImageText => Self::image_text_slide(c, slide_number),
            Layout::BulletPoints => Self::bullet_points_slide(c, slide_number),
            Layout::Quote => Self::quote_slide(c, slide_number),
            Layout::FullImage => Self::full_image_slide(c, slide_number),
        }
    }

    fn title_slide(c: &SlideContent, n: usize) -> String {
        let subtitle = opt_tag("h3", c.subtitle.as_deref());
        let content = opt_tag("p", c.content.as_deref());
        format!(
            r#"
        <div class="slide title-slide">
            <span class="slide-number">Slide {n}</span>
            <h2>{title}</h2>
            {subtitle}
            {content}
        </div>
"#,
            n = n,
            title = c.title.as_deref().unwrap_or("Untitled Slide"),
            subtitle = subtitle,
            content = content,
        )
    }

    fn two_column_slide(c: &SlideContent, n: usize) -> String {
        format!(
            r#"
        <div class="slide">
            <span class="slide-number">Slide {n}</span>
            {title}
            <div class="two-column">
                <div class="column-left">
                    {left}
                </div>
                <div class="column-right">
                    {right}
                </div>
            </div>
        </div>
"#,
            n = n,
            title = opt_tag("h2", c.title.as_deref()),
            left = render_content(c.left_content.as_deref().unwrap_or("")),
            right = render_content(c.right_content.as_deref().unwrap_or("")),
        )
    }

    fn image_text_slide(c: &SlideContent, n: usize) -> String {
        format!(
            r#"
        <div class="slide">
            <span class="slide-number">Slide {n}</span>
            {title}
            <div class="image-text-container">
                <div class="image-side">
                    {image}
                    {caption}
                </div>
                <div class="text-side">
                    {text}
                </div>
            </div>
        </div>
"#,
            n = n,
            title = opt_tag("h2", c.title.as_deref()),
            image = image_tag(c.image_url.as_deref(), c.title.as_deref()),
            caption = opt_class_tag("p", "image-caption", c.image_caption.as_deref()),
            text = render_content(c.content.as_deref().unwrap_or("")),
        )
    }

    fn bullet_points_slide(c: &SlideContent, n: usize) -> String {
        let bullets: String = c
            .bullets
            .iter()
            .map(|b| format!("<li>{}</li>\n", b))
            .collect();
        format!(
            r#"
        <div class="slide">
            <span class="slide-number">Slide {n}</span>
            {title}
            {content}
            <ul class="bullet-list">
                {bullets}
            </ul>
        </div>
"#,
            n = n,
            title = opt_tag("h2", c.title.as_deref()),
            content = opt_tag("p", c.content.as_deref()),
            bullets = bullets,
        )
    }

    fn quote_slide(c: &SlideContent, n: usize) -> String {
        let author = match c.author.as_deref() {
            Some(author) => format!("<p class=\"quote-author\">\u{2014} {}</p>", author),
            None => String::new(),
        };
        format!(
            r#"
        <div class="slide">
            <span class="slide-number">Slide {n}</span>
            <div class="quote-container">
                <blockquote class="quote">
                    {quote}
                </blockquote>
                {author}
            </div>
        </div>
"#,
            n = n,
            quote = c.quote.as_deref().unwrap_or("No quote provided"),
            author = author,
        )
    }

    fn full_image_slide(c: &SlideContent, n: usize) -> String {
        format!(
            r#"
        <div class="slide">
            <span class="slide-number">Slide {n}</span>
            {title}
            <div class="full-image-container">
                {image}
                {caption}
            </div>
        </div>
"#,
            n = n,
            title = opt_tag("h2", c.title.as_deref()),
            image = image_tag(c.image_url.as_deref(), c.title.as_deref()),
            caption = opt_class_tag("p", "image-caption", c.image_caption.as_deref()),
        )
    }
}

/// 便捷入口：按指定主题渲染（不使用 deck 自带的 theme 字段）
pub fn render_deck_with_theme(deck: &Deck, theme: Theme) -> String {
    HtmlRenderer::new(theme).render_deck(deck)
}

/// 正文的轻量 markdown 式渲染：`# `->h3、`## `->h4、`- `->li，其余成段，空行跳过
fn render_content(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if let Some(rest) = line.strip_prefix("## ") {
                format!("<h4>{}</h4>", rest)
            } else if let Some(rest) = line.strip_prefix("# ") {
                format!("<h3>{}</h3>", rest)
            } else if let Some(rest) = line.strip_prefix("- ") {
                format!("<li>{}</li>", rest)
            } else {
                format!("<p>{}</p>", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn opt_tag(tag: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("<{tag}>{v}</{tag}>"),
        None => String::new(),
    }
}

fn opt_class_tag(tag: &str, class: &str, value: Option<&str>) -> String {
    match value {
        Some(v) => format!("<{tag} class=\"{class}\">{v}</{tag}>"),
        None => String::new(),
    }
}

fn image_tag(url: Option<&str>, alt: Option<&str>) -> String {
    match url {
        Some(url) => format!(
            "<img src=\"{}\" alt=\"{}\">",
            url,
            alt.unwrap_or("Slide image")
        ),
        None => "<p>No image provided</p>".to_string(),
    }
}
