use anyhow::Result;
use agentlog_example::{config::Config, logging::init_logging};
use agentlog_persist::{
    AgentLog, AgentLogRepository, AgentLogStore, InMemoryAgentLogStore, MongoConnection, NewAgentLog,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let config = Config::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config.logging);

    println!("Agent Log Demo");
    println!("==============\n");

    if std::env::args().any(|arg| arg == "--in-memory") {
        tracing::info!("Using in-memory store");
        return run(&InMemoryAgentLogStore::new()).await;
    }

    // 1. Connect (fails fast when the server is unreachable)
    println!("1. Connecting to MongoDB...");
    let connection = MongoConnection::connect(&config.mongodb).await?;
    let database = connection.database(&config.mongodb.database);
    println!("   ✓ Connected to database: {}\n", config.mongodb.database);

    let repo = AgentLogRepository::new(&database);
    let outcome = run(&repo).await;

    connection.shutdown().await;
    outcome
}

async fn run(store: &dyn AgentLogStore) -> Result<()> {
    // 2. Insert a log
    let log_id = store
        .create_log(
            NewAgentLog::new("u1", "t100")
                .event("chat")
                .model("gpt-4o")
                .tokens(320),
        )
        .await?;
    println!("2. Inserted log ID: {}\n", log_id);

    // 3. Read logs
    let logs = store.get_logs_by_user("u1").await?;
    println!("3. User logs ({}):", logs.len());
    print_logs(&logs);

    // 4. Update tokens
    store.update_tokens("t100", 400).await?;
    println!("4. Tokens updated");
    if let Some(log) = store.get_log_by_thread("t100").await? {
        println!("   tokens = {:?}\n", log.tokens);
    }

    // 5. Soft delete
    store.soft_delete_log("t100").await?;
    println!("5. Log soft deleted\n");

    // 6. Verify deletion
    let logs_after_delete = store.get_logs_by_user("u1").await?;
    println!("6. Logs after delete ({}):", logs_after_delete.len());
    print_logs(&logs_after_delete);

    Ok(())
}

fn print_logs(logs: &[AgentLog]) {
    if logs.is_empty() {
        println!("   (none)\n");
        return;
    }
    for log in logs {
        println!(
            "   - {} thread={} event={:?} model={:?} tokens={:?} created_at={}",
            log.id,
            log.thread_id,
            log.event,
            log.model,
            log.tokens,
            log.created_at.to_rfc3339(),
        );
    }
    println!();
}
