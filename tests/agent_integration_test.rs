//! 端到端集成测试：scripted LLM 驱动完整的 Plan/Think/Act 循环

use std::sync::Arc;

use hornet::actions::{ActionExecutor, ActionRegistry, SearchAction};
use hornet::llm::ScriptedLlmClient;
use hornet::memory::Role;
use hornet::react::{run_agent, EventKind, Planner};

fn executor() -> ActionExecutor {
    let mut registry = ActionRegistry::new();
    registry.register(SearchAction);
    ActionExecutor::new(registry)
}

#[tokio::test]
async fn test_bitcoin_price_scenario() {
    // 经典场景：找 ticker -> 查价格 -> 汇总答案
    let llm = Arc::new(ScriptedLlmClient::new(vec![
        "Here is the plan:\n1. Find ticker\n2. Get price\n3. Summarize",
        // 子任务 1: Find ticker
        "I need the ticker symbol for Bitcoin.",
        "Action: Search('bitcoin ticker')",
        "The ticker symbol is BTC.",
        "Final Answer: BTC",
        // 子任务 2: Get price
        "Now I need the current price of BTC.",
        "Action: Search('price of btc')",
        "I have the price.",
        "Final Answer: It's $54,000",
        // 子任务 3: Summarize
        "I can combine what I know.",
        "Final Answer: Bitcoin (BTC) is currently trading at $54,000.",
    ]));
    let planner = Planner::new(llm.clone(), 0.7);

    let result = run_agent(&planner, &executor(), 16, "Get current price of Bitcoin")
        .await
        .unwrap();

    assert_eq!(
        result.plan_items,
        vec!["Find ticker", "Get price", "Summarize"]
    );
    assert_eq!(
        result.final_answer.as_deref(),
        Some("Bitcoin (BTC) is currently trading at $54,000.")
    );

    // 每个计划项恰好对应一条 PlanItem 事件，且先于其子任务事件出现
    let plan_item_texts: Vec<&str> = result
        .log
        .iter()
        .filter(|e| e.kind == EventKind::PlanItem)
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(plan_item_texts, result.plan_items);

    // stub 执行器的观察进入日志
    let observations: Vec<&str> = result
        .log
        .iter()
        .filter(|e| e.kind == EventKind::Observation)
        .map(|e| e.text.as_str())
        .collect();
    assert_eq!(observations, vec!["BTC", "It's $54,000"]);

    // 脚本应恰好被消费完
    assert_eq!(llm.remaining(), 0);
}

#[tokio::test]
async fn test_transcript_protocol_shape() {
    // 校验发给模型的消息序列符合协议：Thought 引导、Continue 轮、Observation 回写
    let llm = Arc::new(ScriptedLlmClient::new(vec![
        "1. Only step",
        "Searching now.",
        "Action: Search('weather in SF')",
        "Good enough.",
        "Final Answer: sunny",
    ]));
    let planner = Planner::new(llm.clone(), 0.7);

    run_agent(&planner, &executor(), 16, "What's the weather?")
        .await
        .unwrap();

    let calls = llm.calls();
    assert_eq!(calls.len(), 5);

    // 第 1 次调用：计划请求（system + user）
    assert_eq!(calls[0].len(), 2);
    assert!(calls[0][1].content.starts_with("Task: What's the weather?"));

    // 第 2 次调用：子任务开场，以 "Thought:" 结尾
    assert_eq!(calls[1][1].content, "Subtask: Only step\nThought:");

    // 第 3 次调用：追加了 assistant 原始回复与 "Continue:"
    let third = &calls[2];
    assert_eq!(third[2].role, Role::Assistant);
    assert_eq!(third[2].content, "Searching now.");
    assert_eq!(third[3].content, "Continue:");

    // 第 4 次调用：Action 回复按 assistant 入转写，随后是 Observation 回写
    let fourth = &calls[3];
    assert_eq!(fourth[4].content, "Action: Search('weather in SF')");
    assert_eq!(
        fourth[5].content,
        "Observation: It's 72°F and sunny\nContinue:"
    );
}

#[tokio::test]
async fn test_no_answer_yields_none_not_error() {
    // 空计划：零次子任务迭代，final_answer 缺失但 run 成功
    let llm = Arc::new(ScriptedLlmClient::new(vec![
        "I don't think this needs any steps.",
    ]));
    let planner = Planner::new(llm, 0.7);

    let result = run_agent(&planner, &executor(), 16, "nothing to do")
        .await
        .unwrap();
    assert!(result.plan_items.is_empty());
    assert!(result.log.is_empty());
    assert!(result.final_answer.is_none());
}

#[tokio::test]
async fn test_event_log_serializes_to_json() {
    let llm = Arc::new(ScriptedLlmClient::new(vec![
        "1. Do it",
        "thinking",
        "Final Answer: ok",
    ]));
    let planner = Planner::new(llm, 0.7);
    let result = run_agent(&planner, &executor(), 16, "task").await.unwrap();

    let json = serde_json::to_value(&result.log).unwrap();
    let kinds: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["kind"].as_str().unwrap())
        .collect();
    assert_eq!(kinds, vec!["PlanItem", "Thought", "Answer"]);
}
