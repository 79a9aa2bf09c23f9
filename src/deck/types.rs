//! Deck 数据结构（与 deck.json 对应）
//!
//! 六种固定布局；SlideContent 字段全部可选，各布局按需取用，渲染层对缺失字段做占位降级。

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::AgentError;

/// 幻灯片布局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    Title,
    TwoColumn,
    ImageText,
    BulletPoints,
    Quote,
    FullImage,
}

/// 演示主题（配色）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl FromStr for Theme {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(AgentError::ConfigError(format!("unknown theme: {}", other))),
        }
    }
}

/// 幻灯片正文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_caption: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bullets: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

/// 单张幻灯片：布局 + 正文
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub layout: Layout,
    pub content: SlideContent,
}

/// 一份演示文稿
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    pub slides: Vec<Slide>,
}

impl Deck {
    /// 保存为 pretty JSON 文件
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), AgentError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AgentError::JsonParseError(e.to_string()))?;
        std::fs::write(path, json).map_err(|e| AgentError::Io(e.to_string()))
    }

    /// 从 JSON 文件加载
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, AgentError> {
        let json = std::fs::read_to_string(path).map_err(|e| AgentError::Io(e.to_string()))?;
        serde_json::from_str(&json).map_err(|e| AgentError::JsonParseError(e.to_string()))
    }
}
