//! Hornet - Rust 计划执行智能体
//!
//! 入口：初始化日志、加载配置、对命令行给出的任务跑一次 Plan/Think/Act 循环，
//! 打印计划、事件日志与最终答案。

use std::sync::Arc;

use anyhow::Context;
use hornet::actions::{ActionExecutor, ActionRegistry, SearchAction};
use hornet::config::load_config;
use hornet::llm::OpenAiClient;
use hornet::react::{run_agent, EventKind, Planner};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    hornet::observability::init();

    let prompt: String = {
        let args: Vec<String> = std::env::args().skip(1).collect();
        if args.is_empty() {
            eprintln!("Usage: hornet <task>");
            std::process::exit(2);
        }
        args.join(" ")
    };

    let cfg = load_config(None).unwrap_or_default();

    let llm = Arc::new(OpenAiClient::new(
        cfg.llm.base_url.as_deref(),
        &cfg.llm.model,
        None,
    ));
    let planner = Planner::new(llm, cfg.llm.temperature);

    let mut registry = ActionRegistry::new();
    registry.register(SearchAction);
    let executor = ActionExecutor::new(registry);

    let result = run_agent(&planner, &executor, cfg.agent.max_subtask_steps, &prompt)
        .await
        .context("Agent run failed")?;

    println!("Plan:");
    for (i, item) in result.plan_items.iter().enumerate() {
        println!("  {}. {}", i + 1, item);
    }

    println!("\nExecution log:");
    for event in &result.log {
        match event.kind {
            EventKind::PlanItem => println!("\n[{:?}] {}", event.kind, event.text),
            _ => println!("  [{:?}] {}", event.kind, event.text),
        }
    }

    match result.final_answer {
        Some(answer) => println!("\nFinal answer: {}", answer),
        None => println!("\nNo final answer in execution log."),
    }

    Ok(())
}
