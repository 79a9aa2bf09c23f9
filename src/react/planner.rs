//! Planner：持有 LLM 客户端与固定提示词，负责 Plan 阶段与子任务内的模型调用
//!
//! Plan 阶段一次调用产出编号清单；子任务阶段 Thought 轮与 Continue 轮共用 step。

use std::sync::Arc;

use crate::core::AgentError;
use crate::llm::LlmClient;
use crate::memory::{Message, Transcript};

/// Plan 阶段 system 指令
const PLAN_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that breaks down tasks into numbered steps.";

/// 子任务阶段 system 指令：Thought / Action / Final Answer 协议
const SUBTASK_SYSTEM_PROMPT: &str = r#"You are an agent that thinks step by step.
When given a subtask:
1. First respond with "Thought:" followed by your reasoning
2. Then either:
   - "Action: Search('query')" to search for information
   - "Final Answer: your answer" when you have enough information"#;

/// Planner：LLM 客户端 + 采样温度
pub struct Planner {
    llm: Arc<dyn LlmClient>,
    temperature: f32,
}

impl Planner {
    pub fn new(llm: Arc<dyn LlmClient>, temperature: f32) -> Self {
        Self { llm, temperature }
    }

    /// 获取 LLM 累计 token 使用统计
    pub fn token_usage(&self) -> (u64, u64, u64) {
        self.llm.token_usage()
    }

    /// Plan 阶段：请求模型把任务拆成编号清单，返回原始回复文本
    pub async fn request_plan(&self, prompt: &str) -> Result<String, AgentError> {
        let messages = vec![
            Message::system(PLAN_SYSTEM_PROMPT),
            Message::user(format!(
                "Task: {}\nGenerate a Plan: list each subtask as a numbered checklist.",
                prompt
            )),
        ];
        self.llm
            .complete(&messages, self.temperature)
            .await
            .map_err(AgentError::LlmError)
    }

    /// 为一个子任务开启全新转写；末尾的 "Thought:" 引导模型先输出思考
    pub fn open_subtask(&self, item: &str) -> Transcript {
        Transcript::open(SUBTASK_SYSTEM_PROMPT, format!("Subtask: {}\nThought:", item))
    }

    /// 子任务内的一次模型调用（以当前转写为上下文）
    pub async fn step(&self, transcript: &Transcript) -> Result<String, AgentError> {
        self.llm
            .complete(transcript.messages(), self.temperature)
            .await
            .map_err(AgentError::LlmError)
    }
}
