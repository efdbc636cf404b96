// Line oriented terminal IO for the interactive CLI.
//
// Responsibilities
// - Print prompts without a trailing newline and read one trimmed answer per line.
// - Surface closed input as `UnexpectedEof` so callers can end the session.
// - Decode answers lossily; bytes that are not UTF-8 never end the session.
//
// Generic over the reader and writer so sessions can be scripted in tests.

use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

pub type StdConsole = Console<BufReader<Stdin>, Stdout>;

pub fn stdio() -> StdConsole {
    Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    pub async fn say(&mut self, line: impl AsRef<str>) -> io::Result<()> {
        self.writer.write_all(line.as_ref().as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await
    }

    pub async fn prompt(&mut self, label: impl AsRef<str>) -> io::Result<String> {
        self.writer.write_all(label.as_ref().as_bytes()).await?;
        self.writer.flush().await?;

        let mut line = Vec::new();
        if self.reader.read_until(b'\n', &mut line).await? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}
