//! Scripted LLM 客户端（用于测试，无需 API）
//!
//! 按预置脚本逐条返回回复，并记录每次收到的消息序列；脚本耗尽后返回 Err，
//! 可用来模拟模型调用失败。

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::llm::LlmClient;
use crate::memory::Message;

/// Scripted 客户端：replies 出队作为回复，calls 记录每次请求的消息快照
#[derive(Debug, Default)]
pub struct ScriptedLlmClient {
    replies: Mutex<VecDeque<String>>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedLlmClient {
    pub fn new(replies: Vec<&str>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(String::from).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// 所有已发生调用的消息快照（按调用顺序）
    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn remaining(&self) -> usize {
        self.replies.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(&self, messages: &[Message], _temperature: f32) -> Result<String, String> {
        self.calls.lock().unwrap().push(messages.to_vec());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| "scripted replies exhausted".to_string())
    }
}
