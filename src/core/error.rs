//! Agent 错误类型
//!
//! 模型调用失败原样向上传播并终止本次 run；格式异常的模型输出不是错误（分类器兜底为 Thought）。

use thiserror::Error;

/// Agent 运行过程中可能出现的错误（LLM 调用、步数上限、配置、IO）
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("LLM error: {0}")]
    LlmError(String),

    /// 单个子任务的 Thought/Continue 轮次超过配置上限（防止模型永不给出 Answer 时死循环）
    #[error("Step limit exceeded after {0} steps")]
    StepLimitExceeded(usize),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(String),
}
