use clap::Parser;
use trivia::{db::Db, memory::MemoryStore, quiz::QuizSelector, AppState};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// SQLite connection string.
    #[arg(long, env, default_value = "sqlite://trivia.db?mode=rwc")]
    database_url: String,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:5000")]
    address: String,

    /// Serve from a throwaway in-memory catalog instead of SQLite.
    #[arg(long, env)]
    in_memory: bool,

    /// Fixed seed for quiz question selection.
    #[arg(long, env = "QUIZ_SEED")]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tower_http=info,trivia=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let quiz = match args.seed {
        Some(seed) => QuizSelector::from_seed(seed),
        None => QuizSelector::from_entropy(),
    };

    let state = if args.in_memory {
        tracing::warn!("serving from the in-memory store; data is lost on exit");
        AppState::new(MemoryStore::seeded(), quiz)
    } else {
        AppState::new(Db::new(&args.database_url).await?, quiz)
    };

    let app = trivia::router(state);

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "trivia api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
