//! LLM 客户端抽象
//!
//! 所有后端（OpenAI 兼容 / Scripted）实现 LlmClient：complete 一次非流式请求，
//! 编排器把它当作无状态的 request/reply 函数，失败原样向上传播。

use async_trait::async_trait;

use crate::memory::Message;

/// LLM 客户端 trait：消息序列 + temperature -> 回复文本
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// 非流式完成
    async fn complete(&self, messages: &[Message], temperature: f32) -> Result<String, String>;

    /// 获取累计 token 使用统计：(prompt_tokens, completion_tokens, total_tokens)
    /// 默认返回 (0, 0, 0)，具体实现可覆盖
    fn token_usage(&self) -> (u64, u64, u64) {
        (0, 0, 0)
    }
}
