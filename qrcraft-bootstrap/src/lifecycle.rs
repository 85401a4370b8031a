use std::future::Future;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use qrcraft_application::AppState;
use qrcraft_interfaces_console::{handle, parse_command, Command, ConsoleError, ConsoleSession, Reply};

use crate::context::{AppContext, ContextOptions};

const QUEUE_DEPTH: usize = 16;
const PROMPT: &str = "qrcraft> ";

/// One parsed command waiting for the worker.
pub struct Job {
    pub command: Command,
    pub reply: oneshot::Sender<Result<Reply, ConsoleError>>,
}

pub async fn run_console(options: ContextOptions) -> Result<()> {
    let context = AppContext::new(&options).await?;
    let state = context.state;

    let (tx, rx) = mpsc::channel::<Job>(QUEUE_DEPTH);
    let worker = tokio::spawn(run_worker(state.clone(), rx));

    let mut stdout = tokio::io::stdout();
    let banner = {
        let history_len = state.session.lock().await.history.len();
        let theme = *state.theme.read().await;
        format!(
            "QRCraft Studio (history: {}, theme: {}). Type 'help' for commands.",
            history_len,
            theme.as_str()
        )
    };
    print_line(&mut stdout, &banner).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        stdout.write_all(PROMPT.as_bytes()).await?;
        stdout.flush().await?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = shutdown_signal() => {
                info!("interrupted, shutting down");
                break;
            }
        };
        let Some(line) = line else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                print_line(&mut stdout, &err.render()).await?;
                continue;
            }
        };

        let (reply_tx, reply_rx) = oneshot::channel();
        let job = Job {
            command,
            reply: reply_tx,
        };
        if tx.send(job).await.is_err() {
            break;
        }
        let Some(reply) = wait_for_reply(reply_rx, shutdown_signal()).await else {
            info!("interrupted, finishing the current command");
            break;
        };
        match reply {
            Ok(Reply::Text(text)) => print_line(&mut stdout, &text).await?,
            Ok(Reply::Quit) => break,
            Err(err) => print_line(&mut stdout, &err.render()).await?,
        }
    }

    drop(tx);
    worker.await?;
    info!("session closed");
    Ok(())
}

/// `None` when `shutdown` fires first or the worker is gone. An interrupted
/// job still runs to completion on the worker.
async fn wait_for_reply(
    reply_rx: oneshot::Receiver<Result<Reply, ConsoleError>>,
    shutdown: impl Future<Output = ()>,
) -> Option<Result<Reply, ConsoleError>> {
    tokio::select! {
        reply = reply_rx => reply.ok(),
        _ = shutdown => None,
    }
}

/// Applies jobs strictly one after another; each finishes, durable write
/// included, before the next is taken off the queue.
pub async fn run_worker(state: AppState, mut rx: mpsc::Receiver<Job>) {
    let mut session = ConsoleSession::default();
    while let Some(job) = rx.recv().await {
        let result = handle(&state, &mut session, job.command).await;
        if let Err(err) = &result {
            debug!("command failed: {}", err);
        }
        let _ = job.reply.send(result);
    }
}

async fn print_line(stdout: &mut Stdout, text: &str) -> Result<()> {
    stdout.write_all(text.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
