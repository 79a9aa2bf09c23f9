//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `HORNET__*` 覆盖（双下划线表示嵌套，如 `HORNET__LLM__MODEL=gpt-4o-mini`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmSection,
    #[serde(default)]
    pub agent: AgentSection,
    #[serde(default)]
    pub deck: DeckSection,
}

/// [llm] 段：模型与采样参数
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSection {
    #[serde(default = "default_model")]
    pub model: String,
    /// OpenAI 兼容端点，未设置时用官方 API
    pub base_url: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            model: default_model(),
            base_url: None,
            temperature: default_temperature(),
        }
    }
}

/// [agent] 段：子任务循环上限
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AgentSection {
    /// 单个子任务最多的 Thought/Continue 轮次，超出即 StepLimitExceeded
    #[serde(default = "default_max_subtask_steps")]
    pub max_subtask_steps: usize,
}

fn default_max_subtask_steps() -> usize {
    16
}

impl Default for AgentSection {
    fn default() -> Self {
        Self {
            max_subtask_steps: default_max_subtask_steps(),
        }
    }
}

/// [deck] 段：幻灯片生成默认值
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeckSection {
    /// light / dark
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_slides")]
    pub slides: usize,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_slides() -> usize {
    6
}

impl Default for DeckSection {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            slides: default_slides(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm: LlmSection::default(),
            agent: AgentSection::default(),
            deck: DeckSection::default(),
        }
    }
}

/// 从 config 目录加载配置，环境变量 HORNET__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 HORNET__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("HORNET")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
