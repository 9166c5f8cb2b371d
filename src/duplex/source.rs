use tokio::io::AsyncBufRead;
use tokio::io::AsyncRead;
use tokio::io::BufReader;
use tokio::io::Lines;

/// Line-oriented input.
///
/// Futures are not required to be `Send`: websocket payloads live on
/// a single worker thread.
#[async_trait::async_trait(?Send)]
pub trait Source {
    /// Next line without its terminator.
    /// End of input and read failures both come back as an empty string.
    async fn line(&mut self) -> String;
}

#[async_trait::async_trait(?Send)]
impl<R> Source for Lines<R>
where
    R: AsyncBufRead + Unpin,
{
    async fn line(&mut self) -> String {
        match self.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => String::new(),
            Err(e) => {
                log::warn!("error reading input line: {}", e);
                String::new()
            }
        }
    }
}

/// Line source over any async reader.
pub fn lines<R>(reader: R) -> Lines<BufReader<R>>
where
    R: AsyncRead + Unpin,
{
    tokio::io::AsyncBufReadExt::lines(BufReader::new(reader))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lines_then_empty_at_end() {
        let ref mut source = lines("3\nAndre wins\n".as_bytes());
        assert_eq!(source.line().await, "3");
        assert_eq!(source.line().await, "Andre wins");
        assert_eq!(source.line().await, "");
        assert_eq!(source.line().await, "");
    }

    #[tokio::test]
    async fn last_line_without_newline() {
        let ref mut source = lines("Chris wins".as_bytes());
        assert_eq!(source.line().await, "Chris wins");
    }
}
