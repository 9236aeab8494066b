// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte-faithful tee of child output to a log file and the console

use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinError;

/// Copy two output streams to `log_path` and stdout.
///
/// Chunks are newline-delimited but stay raw bytes end to end: phase
/// executables are arbitrary external tools and their output is not
/// guaranteed to be UTF-8. The log file gets the exact bytes; the
/// console copy is lossy-decoded for display only. Chunks from the two
/// streams interleave in arrival order, so the operator sees the same
/// combined stream that lands in the log file.
///
/// The log file is truncated on each call; log files are per-run, not
/// appended across runs. Read errors on either stream fail the tee
/// rather than truncating the capture.
pub async fn tee<O, E>(stdout: O, stderr: E, log_path: &Path) -> std::io::Result<()>
where
    O: AsyncRead + Unpin + Send + 'static,
    E: AsyncRead + Unpin + Send + 'static,
{
    let mut file = tokio::fs::File::create(log_path).await?;

    let (tx, mut rx) = mpsc::channel::<Vec<u8>>(64);
    let err_tx = tx.clone();
    let out_task = tokio::spawn(forward_chunks(stdout, tx));
    let err_task = tokio::spawn(forward_chunks(stderr, err_tx));

    // Channel closes once both forwarders have dropped their senders.
    while let Some(chunk) = rx.recv().await {
        print!("{}", String::from_utf8_lossy(&chunk));
        file.write_all(&chunk).await?;
    }

    let out_result = out_task.await;
    let err_result = err_task.await;
    file.flush().await?;
    join_result(out_result)?;
    join_result(err_result)?;
    Ok(())
}

async fn forward_chunks<R>(reader: R, tx: mpsc::Sender<Vec<u8>>) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    loop {
        let mut chunk = Vec::new();
        let read = reader.read_until(b'\n', &mut chunk).await?;
        if read == 0 {
            return Ok(());
        }
        if tx.send(chunk).await.is_err() {
            // Receiver is gone; the tee already failed.
            return Ok(());
        }
    }
}

fn join_result(result: Result<std::io::Result<()>, JoinError>) -> std::io::Result<()> {
    result.unwrap_or_else(|e| Err(std::io::Error::other(e)))
}

#[cfg(test)]
#[path = "tee_tests.rs"]
mod tests;
