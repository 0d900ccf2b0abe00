use crate::{
    dictionary::SpellChecker,
    game::{Game, Submission},
    session::messages::{ClientMessage, ServerMessage},
    words::WordSource,
};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

/// Drive a game from line based input until the reader is exhausted.
/// Each reply is written as one JSON object per line. The writer is
/// handed back once everything queued has been written.
pub async fn run_session<R, W, D, S>(reader: R, writer: W, game: &mut Game<D, S>) -> Result<W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
    D: SpellChecker,
    S: WordSource,
{
    let (tx, mut rx) = mpsc::channel::<ServerMessage>(100);

    // Spawn a task to write messages to the player
    let send_task = tokio::spawn(async move {
        let mut writer = writer;
        while let Some(msg) = rx.recv().await {
            match serde_json::to_string(&msg) {
                Ok(json) => {
                    if let Err(e) = write_line(&mut writer, &json).await {
                        tracing::error!("Failed to write message: {}", e);
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("Failed to serialize message: {}", e);
                }
            }
        }
        writer
    });

    tracing::info!("Session started");
    tx.send(game.snapshot().into()).await?;

    let mut reader = reader;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = match std::str::from_utf8(trim_line_ending(&buf)) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to decode message: {}", e);
                tx.send(ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                })
                .await?;
                continue;
            }
        };

        match ClientMessage::parse_line(line) {
            Ok(client_msg) => handle_client_message(client_msg, game, &tx).await?,
            Err(e) => {
                tracing::error!("Failed to parse message: {}", e);
                tx.send(ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                })
                .await?;
            }
        }
    }

    drop(tx);
    let writer = send_task.await?;

    tracing::info!("Session closed at score {}", game.state().score());

    Ok(writer)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> std::io::Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await
}

/// Handle individual client messages
async fn handle_client_message<D: SpellChecker, S: WordSource>(
    msg: ClientMessage,
    game: &mut Game<D, S>,
    tx: &mpsc::Sender<ServerMessage>,
) -> Result<()> {
    match msg {
        ClientMessage::SubmitWord { word } => match game.submit(&word) {
            Submission::Ignored => {}
            Submission::Accepted {
                word,
                points,
                score,
            } => {
                tx.send(ServerMessage::WordScored {
                    word,
                    points,
                    score,
                })
                .await?;
            }
            Submission::Rejected(rejection) => {
                tx.send(ServerMessage::InvalidWord {
                    title: rejection.title().to_string(),
                    message: rejection.to_string(),
                })
                .await?;
            }
        },
        ClientMessage::Restart => {
            game.restart();
            tx.send(game.snapshot().into()).await?;
        }
        ClientMessage::GetState => {
            tx.send(game.snapshot().into()).await?;
        }
    }

    Ok(())
}
