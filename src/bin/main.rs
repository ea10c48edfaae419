use financial_chatbot::{
    config::BotConfig,
    loader::load_table,
    session::{reply, ConversationState},
};
use std::io::{self, BufRead, Write};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = BotConfig::from_env();

    info!("Financial chatbot starting");

    // A bad table is fatal; nothing can be answered without it.
    let table = match load_table(&config.data_file) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Failed to load dataset: {}", e);
            return Err(Box::new(e));
        }
    };

    let mut state = ConversationState::new();

    println!("=== GFC Financial Chatbot (Rule-Based Prototype) ===");
    println!("Ask naturally, e.g.:");
    println!("- What was Apple revenue in 2024?");
    println!("- How did Tesla net income change in 2024?");
    println!("- Compare Microsoft and Apple CFO in 2024");
    println!("- Compare revenue growth for all companies\n");
    println!("Type 'exit' to quit.\n");

    let stdin = io::stdin();
    loop {
        print!("You: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let user = line.trim();

        if user.eq_ignore_ascii_case("exit") {
            println!("Bot: Goodbye.");
            break;
        }

        // Lookup errors end the turn, not the session.
        match reply(&table, user, &mut state, &config) {
            Ok(answer) => println!("Bot: {}\n", answer),
            Err(e) => println!("Bot: Error: {}\n", e),
        }
    }

    Ok(())
}
