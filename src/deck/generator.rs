//! Deck 生成器
//!
//! 按主题生成幻灯片结构：首张固定为标题页，其余布局轮换；配置了 LLM 时用模型
//! 产出标题页与元数据，调用失败即回退到模板内容（生成过程本身不报错）。

use std::sync::Arc;

use crate::deck::types::{Deck, Layout, Slide, SlideContent, Theme};
use crate::llm::LlmClient;
use crate::memory::Message;

/// 标题页之后轮换使用的布局
const ROTATING_LAYOUTS: [Layout; 5] = [
    Layout::TwoColumn,
    Layout::BulletPoints,
    Layout::ImageText,
    Layout::Quote,
    Layout::FullImage,
];

/// Quote 布局的候选引文（按页码轮换）
const QUOTES: [(&str, &str); 3] = [
    ("The best way to predict the future is to invent it.", "Alan Kay"),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
    ),
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
    ),
];

/// Deck 生成器：可选 LLM 辅助，无 LLM 时纯模板
pub struct DeckGenerator {
    llm: Option<Arc<dyn LlmClient>>,
    temperature: f32,
}

impl DeckGenerator {
    /// 纯模板生成
    pub fn new() -> Self {
        Self {
            llm: None,
            temperature: 0.7,
        }
    }

    /// 启用 LLM 辅助生成标题页与元数据
    pub fn with_llm(llm: Arc<dyn LlmClient>, temperature: f32) -> Self {
        Self {
            llm: Some(llm),
            temperature,
        }
    }

    /// 生成一份关于 topic 的演示文稿（最多六张：标题页 + 轮换布局）
    pub async fn generate(&self, topic: &str, num_slides: usize) -> Deck {
        let mut slides = vec![self.title_slide(topic).await];

        for i in 1..num_slides.min(6) {
            let layout = ROTATING_LAYOUTS[(i - 1) % ROTATING_LAYOUTS.len()];
            slides.push(Self::slide_by_layout(topic, layout, i + 1));
        }

        let (title, author) = self.metadata(topic).await;
        Deck {
            title,
            author,
            description: Some(format!("An informative presentation about {}", topic)),
            theme: Theme::Light,
            slides,
        }
    }

    /// 元数据：LLM 可用时解析 "Title: ..." / "Author: ..." 行，否则模板
    async fn metadata(&self, topic: &str) -> (String, String) {
        if let Some(llm) = &self.llm {
            let messages = vec![
                Message::system("Generate a presentation title and author name."),
                Message::user(format!(
                    "Topic: {}. Provide a creative title and professional author name. Format: Title: [title]\nAuthor: [name]",
                    topic
                )),
            ];
            if let Ok(reply) = llm.complete(&messages, self.temperature).await {
                let mut title = None;
                let mut author = None;
                for line in reply.lines() {
                    if let Some(rest) = line.strip_prefix("Title:") {
                        title = Some(rest.trim().to_string());
                    } else if let Some(rest) = line.strip_prefix("Author:") {
                        author = Some(rest.trim().to_string());
                    }
                }
                if let (Some(title), Some(author)) = (title, author) {
                    return (title, author);
                }
            }
            tracing::warn!("LLM metadata generation failed, falling back to template");
        }
        (
            format!("Presentation: {}", topic),
            "Expert Presenter".to_string(),
        )
    }

    /// 标题页：LLM 可用时取回复前三行作为 title/subtitle/content，否则模板
    async fn title_slide(&self, topic: &str) -> Slide {
        if let Some(llm) = &self.llm {
            let messages = vec![
                Message::system("Generate a title slide for a presentation."),
                Message::user(format!(
                    "Create a title, subtitle, and brief description for a presentation about: {}",
                    topic
                )),
            ];
            if let Ok(reply) = llm.complete(&messages, self.temperature).await {
                let lines: Vec<&str> = reply.lines().map(str::trim).collect();
                if !lines.is_empty() {
                    return Slide {
                        layout: Layout::Title,
                        content: SlideContent {
                            title: Some(lines[0].to_string()),
                            subtitle: Some(
                                lines
                                    .get(1)
                                    .copied()
                                    .unwrap_or("An Informative Presentation")
                                    .to_string(),
                            ),
                            content: lines.get(2).map(|s| s.to_string()),
                            ..Default::default()
                        },
                    };
                }
            }
            tracing::warn!("LLM title slide generation failed, falling back to template");
        }

        Slide {
            layout: Layout::Title,
            content: SlideContent {
                title: Some(topic.to_string()),
                subtitle: Some("Key Insights and Information".to_string()),
                content: Some("Let's explore this topic together".to_string()),
                ..Default::default()
            },
        }
    }

    /// 按布局生成一张模板幻灯片
    fn slide_by_layout(topic: &str, layout: Layout, slide_num: usize) -> Slide {
        let content = match layout {
            Layout::TwoColumn => SlideContent {
                title: Some(format!("Key Aspects of {}", topic)),
                left_content: Some(format!(
                    "# Aspect {}A\n\n- Point 1\n- Point 2\n- Point 3",
                    slide_num
                )),
                right_content: Some(format!(
                    "# Aspect {}B\n\n- Point A\n- Point B\n- Point C",
                    slide_num
                )),
                ..Default::default()
            },
            Layout::BulletPoints => SlideContent {
                title: Some(format!("Important Points about {}", topic)),
                content: Some("Consider these key factors:".to_string()),
                bullets: (1..6)
                    .map(|i| format!("Key point {} about {}", i, topic))
                    .collect(),
                ..Default::default()
            },
            Layout::ImageText => SlideContent {
                title: Some(format!("Visualizing {}", topic)),
                image_url: Some(format!(
                    "https://via.placeholder.com/600x400/4a9eff/ffffff?text={}",
                    topic.replace(' ', "+")
                )),
                image_caption: Some(format!("A visual representation of {}", topic)),
                content: Some(format!(
                    "This diagram illustrates the key concepts of {}. Understanding these visual elements helps grasp the complexity and relationships involved.",
                    topic
                )),
                ..Default::default()
            },
            Layout::Quote => {
                let (quote, author) = QUOTES[slide_num % QUOTES.len()];
                SlideContent {
                    quote: Some(quote.to_string()),
                    author: Some(author.to_string()),
                    ..Default::default()
                }
            }
            Layout::FullImage => SlideContent {
                title: Some(format!("{} in Practice", topic)),
                image_url: Some(format!(
                    "https://via.placeholder.com/800x600/0066cc/ffffff?text={}+Visualization",
                    topic.replace(' ', "+")
                )),
                image_caption: Some(format!("Real-world application of {}", topic)),
                ..Default::default()
            },
            Layout::Title => SlideContent {
                title: Some(topic.to_string()),
                ..Default::default()
            },
        };

        Slide { layout, content }
    }

    /// 内置示例文稿：覆盖全部六种布局
    pub fn sample_deck() -> Deck {
        let slides = vec![
            Slide {
                layout: Layout::Title,
                content: SlideContent {
                    title: Some("Introduction to Modern Web Development".into()),
                    subtitle: Some("Building Scalable Applications".into()),
                    content: Some("A comprehensive guide to current best practices".into()),
                    ..Default::default()
                },
            },
            Slide {
                layout: Layout::TwoColumn,
                content: SlideContent {
                    title: Some("Frontend vs Backend".into()),
                    left_content: Some(
                        "# Frontend Technologies\n\n- React/Vue/Angular\n- TypeScript\n- CSS Frameworks\n- Build Tools"
                            .into(),
                    ),
                    right_content: Some(
                        "# Backend Technologies\n\n- Node.js/Python/Go\n- REST/GraphQL APIs\n- Databases\n- Cloud Services"
                            .into(),
                    ),
                    ..Default::default()
                },
            },
            Slide {
                layout: Layout::BulletPoints,
                content: SlideContent {
                    title: Some("Key Development Principles".into()),
                    content: Some("Essential principles every developer should follow:".into()),
                    bullets: vec![
                        "Write clean, readable code".into(),
                        "Follow DRY (Don't Repeat Yourself)".into(),
                        "Test early and often".into(),
                        "Document your code".into(),
                        "Use version control effectively".into(),
                    ],
                    ..Default::default()
                },
            },
            Slide {
                layout: Layout::ImageText,
                content: SlideContent {
                    title: Some("Modern Architecture Patterns".into()),
                    image_url: Some(
                        "https://via.placeholder.com/600x400/4a9eff/ffffff?text=Microservices+Architecture"
                            .into(),
                    ),
                    image_caption: Some(
                        "Microservices enable scalable, maintainable systems".into(),
                    ),
                    content: Some(
                        "Microservices architecture breaks down applications into small, independent services that communicate through APIs. This approach offers better scalability, fault isolation, and technology flexibility."
                            .into(),
                    ),
                    ..Default::default()
                },
            },
            Slide {
                layout: Layout::Quote,
                content: SlideContent {
                    quote: Some(
                        "Any fool can write code that a computer can understand. Good programmers write code that humans can understand."
                            .into(),
                    ),
                    author: Some("Martin Fowler".into()),
                    ..Default::default()
                },
            },
            Slide {
                layout: Layout::FullImage,
                content: SlideContent {
                    title: Some("The Development Workflow".into()),
                    image_url: Some(
                        "https://via.placeholder.com/800x600/0066cc/ffffff?text=CI/CD+Pipeline".into(),
                    ),
                    image_caption: Some(
                        "Continuous Integration and Deployment streamline the development process"
                            .into(),
                    ),
                    ..Default::default()
                },
            },
        ];

        Deck {
            title: "Introduction to Modern Web Development".into(),
            author: "Tech Presenter".into(),
            description: Some("A sample presentation showcasing all slide layouts".into()),
            theme: Theme::Light,
            slides,
        }
    }
}

impl Default for DeckGenerator {
    fn default() -> Self {
        Self::new()
    }
}
