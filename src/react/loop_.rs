//! 主执行循环
//!
//! Plan -> 逐项子任务（Thought -> Continue -> {Action+Observation | Answer | 其他}）-> 回扫最终答案。
//! 计划项严格串行执行；日志与转写都由本次 run 独占，调用间不保留任何状态。
//! 模型调用失败原样向上传播；子任务轮次超过上限返回 StepLimitExceeded。

use crate::actions::ActionExecutor;
use crate::core::AgentError;
use crate::react::classifier::{classify_plan, classify_response};
use crate::react::events::{ClassifiedEvent, EventKind};
use crate::react::planner::Planner;

/// 一次 run 的最终输出：计划项、完整事件日志、可选的最终答案
///
/// final_answer 缺失表示「完成但无答案」，与 run 失败是两回事。
#[derive(Debug)]
pub struct AgentResult {
    pub plan_items: Vec<String>,
    pub log: Vec<ClassifiedEvent>,
    pub final_answer: Option<String>,
}

/// 对单条任务跑完整的 Plan/Think/Act 循环
///
/// max_subtask_steps 限制单个子任务的 Thought/Continue 轮次；空计划时子任务循环零次迭代，
/// 返回空日志与 None 答案。
pub async fn run_agent(
    planner: &Planner,
    executor: &ActionExecutor,
    max_subtask_steps: usize,
    prompt: &str,
) -> Result<AgentResult, AgentError> {
    tracing::info!(prompt = %prompt, "starting agent run");

    // Phase 1: 生成计划
    let plan_text = planner.request_plan(prompt).await?;
    let plan_items = classify_plan(&plan_text);
    tracing::info!(items = plan_items.len(), "plan parsed");

    let mut log: Vec<ClassifiedEvent> = Vec::new();

    // Phase 2: 逐项执行
    for (i, item) in plan_items.iter().enumerate() {
        tracing::info!(index = i + 1, total = plan_items.len(), item = %item, "executing plan item");
        log.push(ClassifiedEvent::new(EventKind::PlanItem, item));

        let mut transcript = planner.open_subtask(item);
        let mut steps = 0usize;

        loop {
            if steps >= max_subtask_steps {
                return Err(AgentError::StepLimitExceeded(steps));
            }
            steps += 1;

            // GENERATE_THOUGHT：强制加 "Thought: " 前缀再分类，保证每轮首条回复
            // 总是以思考入日志，即使模型自己写了 Action:/Answer: 行
            let reply = planner.step(&transcript).await?;
            let thought = classify_response(&format!("Thought: {}", reply));
            tracing::debug!(text = %thought.text, "thought");
            log.push(thought);
            transcript.push_assistant(&reply);
            transcript.push_user("Continue:");

            // EVALUATE_CONTINUATION：原样分类
            let continuation = planner.step(&transcript).await?;
            let event = classify_response(&continuation);
            tracing::debug!(kind = ?event.kind, text = %event.text, "continuation");

            match event.kind {
                EventKind::Action => {
                    let observation = executor.execute(&event).await;
                    log.push(event);
                    log.push(ClassifiedEvent::new(EventKind::Observation, &observation));
                    transcript.push_assistant(&continuation);
                    transcript.push_user(format!("Observation: {}\nContinue:", observation));
                }
                EventKind::Answer => {
                    tracing::info!(answer = %event.text, "subtask answered");
                    log.push(event);
                    break;
                }
                _ => {
                    log.push(event);
                    transcript.push_assistant(&continuation);
                }
            }
        }
    }

    // Phase 3: 从日志末尾回扫最后一个 Answer
    let final_answer = log
        .iter()
        .rev()
        .find(|e| e.kind == EventKind::Answer)
        .map(|e| e.text.clone());

    match &final_answer {
        Some(answer) => tracing::info!(answer = %answer, "agent run completed"),
        None => tracing::warn!("no final answer in execution log"),
    }

    Ok(AgentResult {
        plan_items,
        log,
        final_answer,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::actions::{ActionRegistry, SearchAction};
    use crate::llm::ScriptedLlmClient;

    fn executor() -> ActionExecutor {
        let mut registry = ActionRegistry::new();
        registry.register(SearchAction);
        ActionExecutor::new(registry)
    }

    #[tokio::test]
    async fn test_single_item_immediate_answer() {
        // 计划 -> Thought -> Final Answer：日志应为 [PlanItem, Thought, Answer]
        let llm = Arc::new(ScriptedLlmClient::new(vec![
            "1. Answer the question",
            "I can answer directly.",
            "Final Answer: 42",
        ]));
        let planner = Planner::new(llm, 0.0);
        let result = run_agent(&planner, &executor(), 8, "What is the answer?")
            .await
            .unwrap();

        assert_eq!(result.plan_items, vec!["Answer the question"]);
        let kinds: Vec<_> = result.log.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EventKind::PlanItem, EventKind::Thought, EventKind::Answer]
        );
        assert_eq!(result.final_answer.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_action_round_trip() {
        let llm = Arc::new(ScriptedLlmClient::new(vec![
            "1. Find ticker\n2. Get price",
            // 子任务 1
            "I should search for the ticker.",
            "Action: Search('bitcoin ticker')",
            "The ticker is BTC.",
            "Final Answer: BTC",
            // 子任务 2
            "Now the price.",
            "Action: Search('price of btc')",
            "Got it.",
            "Final Answer: It's $54,000",
        ]));
        let planner = Planner::new(llm, 0.0);
        let result = run_agent(&planner, &executor(), 8, "Get current price of Bitcoin")
            .await
            .unwrap();

        assert_eq!(result.plan_items, vec!["Find ticker", "Get price"]);
        let kinds: Vec<_> = result.log.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::PlanItem,
                EventKind::Thought,
                EventKind::Action,
                EventKind::Observation,
                EventKind::Thought,
                EventKind::Answer,
                EventKind::PlanItem,
                EventKind::Thought,
                EventKind::Action,
                EventKind::Observation,
                EventKind::Thought,
                EventKind::Answer,
            ]
        );
        // 观察事件来自 stub 执行器的固定回复
        assert_eq!(result.log[3].text, "BTC");
        assert_eq!(result.log[9].text, "It's $54,000");
        // 最终答案是日志里最后一个 Answer
        assert_eq!(result.final_answer.as_deref(), Some("It's $54,000"));
    }

    #[tokio::test]
    async fn test_forced_thought_prefix_hides_early_action() {
        // Thought 轮里模型直接写了 Action: 行，也必须按 Thought 入日志（保留原始行为）
        let llm = Arc::new(ScriptedLlmClient::new(vec![
            "1. Do it",
            "Action: Search('bitcoin ticker')",
            "Final Answer: done",
        ]));
        let planner = Planner::new(llm, 0.0);
        let result = run_agent(&planner, &executor(), 8, "task").await.unwrap();

        assert_eq!(result.log[1].kind, EventKind::Thought);
        assert_eq!(result.log[1].text, "Action: Search('bitcoin ticker')");
    }

    #[tokio::test]
    async fn test_empty_plan_is_not_an_error() {
        let llm = Arc::new(ScriptedLlmClient::new(vec!["No steps needed here."]));
        let planner = Planner::new(llm, 0.0);
        let result = run_agent(&planner, &executor(), 8, "task").await.unwrap();

        assert!(result.plan_items.is_empty());
        assert!(result.log.is_empty());
        assert!(result.final_answer.is_none());
    }

    #[tokio::test]
    async fn test_unrecognized_continuation_loops_back() {
        // Continue 轮返回无前缀文本：按 Thought 入日志并回到下一轮 Thought
        let llm = Arc::new(ScriptedLlmClient::new(vec![
            "1. Do it",
            "thinking...",
            "still working on it",
            "thinking more...",
            "Final Answer: ok",
        ]));
        let planner = Planner::new(llm, 0.0);
        let result = run_agent(&planner, &executor(), 8, "task").await.unwrap();

        let kinds: Vec<_> = result.log.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::PlanItem,
                EventKind::Thought,
                EventKind::Thought,
                EventKind::Thought,
                EventKind::Answer,
            ]
        );
        assert_eq!(result.final_answer.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_step_limit_exceeded() {
        // 模型永不给出 Answer：到达上限返回 StepLimitExceeded 而不是死循环
        let replies: Vec<&str> = std::iter::once("1. Stall forever")
            .chain(std::iter::repeat("still thinking").take(20))
            .collect();
        let llm = Arc::new(ScriptedLlmClient::new(replies));
        let planner = Planner::new(llm, 0.0);
        let err = run_agent(&planner, &executor(), 3, "task").await.unwrap_err();
        assert!(matches!(err, AgentError::StepLimitExceeded(3)));
    }

    #[tokio::test]
    async fn test_llm_failure_propagates() {
        // 脚本在子任务中途耗尽：等同于模型调用失败，原样向上传播
        let llm = Arc::new(ScriptedLlmClient::new(vec!["1. Do it", "a thought"]));
        let planner = Planner::new(llm, 0.0);
        let err = run_agent(&planner, &executor(), 8, "task").await.unwrap_err();
        assert!(matches!(err, AgentError::LlmError(_)));
    }
}
