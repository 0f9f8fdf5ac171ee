// Thin line-oriented frame loop over stdin/stdout (SPEC_FULL.md §4.6): the
// single out-of-core piece `spec.md` §1 sets aside. One task, no sockets:
// read a line, hand it to the engine, write the reply line, repeat until
// EOF.

use redish_engine::{Engine, EngineConfig};
use std::env;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let config = EngineConfig::from_args(env::args())?;
    info!(max_keys = config.max_keys, "redish-engine starting");

    let mut engine = Engine::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = BufReader::new(stdin).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = engine.process_line(&line);
        if let Err(e) = write_reply(&mut stdout, &reply).await {
            warn!(error = %e, "failed writing reply, stopping");
            break;
        }
    }

    Ok(())
}

async fn write_reply(stdout: &mut io::Stdout, reply: &str) -> io::Result<()> {
    stdout.write_all(reply.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
