//! TrustGate CLI
//!
//! Usage:
//!   trustgate --serve                        # HTTP API server
//!   trustgate --blink 3 --emotion fear       # One-shot verdict
//!   trustgate --blink 3 --json               # JSON output

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trustgate::core::{evaluate, run_server, SessionStore};
use trustgate::types::{Emotion, SessionStatus};
use trustgate::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "trustgate",
    version = VERSION,
    about = "TrustGate - score behavioral consent reports and seal the verdict",
    long_about = "TrustGate issues challenge sessions and scores client-submitted\n\
                  behavioral reports (blink count, emotion, panic flag) into a\n\
                  trust verdict, sealed with a SHA-256 digest and persisted.\n\n\
                  Modes:\n  \
                  --serve        HTTP API server mode\n  \
                  (default)      One-shot verdict from --blink/--emotion/--panic\n\n\
                  Verdicts:\n  \
                  VERIFIED    - Report looks plausible\n  \
                  FAILED      - Score below threshold\n  \
                  BLOCKED     - Panic flag asserted"
)]
struct Args {
    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:8000)
    #[arg(long, default_value = "127.0.0.1:8000")]
    addr: String,

    /// SQLite database path
    #[arg(long, default_value = "trustgate.db")]
    db: String,

    /// Blink count for a one-shot verdict
    #[arg(long, default_value_t = 0)]
    blink: i64,

    /// Emotion label for a one-shot verdict (neutral, happy, fear)
    #[arg(long, default_value = "neutral")]
    emotion: String,

    /// Panic flag for a one-shot verdict
    #[arg(long)]
    panic: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else {
        run_verdict(&args);
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

/// Score one report from the command line and print the verdict
fn run_verdict(args: &Args) {
    let emotion = Emotion::normalize(&args.emotion);
    let verdict = evaluate(args.blink, emotion, args.panic);

    if args.json {
        println!("{}", serde_json::to_string(&verdict).unwrap());
    } else if args.no_color {
        println!("score={} | status={}", verdict.score, verdict.status);
    } else {
        println!(
            "{}score={} | status={}{}",
            verdict.status.color_code(),
            verdict.score,
            verdict.status,
            SessionStatus::color_reset()
        );
    }
}

/// Run HTTP API server mode
async fn run_serve(args: &Args) {
    let store = match SessionStore::open(&args.db) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open session store at {}: {}", args.db, e);
            std::process::exit(1);
        }
    };

    println!("TrustGate v{} API server on {}", VERSION, args.addr);
    println!("  POST /api/start  - Create session");
    println!("  POST /api/submit - Submit behavioral report");
    println!("  GET  /health     - Health check");

    if let Err(e) = run_server(&args.addr, store).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
