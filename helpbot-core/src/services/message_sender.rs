use std::sync::Arc;
use tracing::{debug, info, warn};
use helpbot_common::models::Destination;
use helpbot_common::traits::OutboundTransport;
use crate::config::OverflowPolicy;
use crate::Error;

/// Split `text` into chunks shorter than `max_length` characters, breaking
/// only after a newline. Fails with `Error::UnsplittableSegment` when a line
/// does not fit.
pub fn paginate(text: &str, max_length: usize) -> Result<Vec<String>, Error> {
    paginate_with(text, max_length, OverflowPolicy::Fail)
}

/// Like [`paginate`], with an explicit policy for lines that do not fit.
///
/// Each chunk keeps the newline that ends it, so concatenating the chunks
/// yields `text` unchanged. Lengths are counted in characters.
pub fn paginate_with(
    text: &str,
    max_length: usize,
    overflow: OverflowPolicy,
) -> Result<Vec<String>, Error> {
    if text.chars().count() < max_length {
        return Ok(vec![text.to_string()]);
    }
    if max_length < 2 {
        return Err(Error::Config(format!(
            "max_length {} leaves no room for a line and its newline",
            max_length
        )));
    }

    let mut chunks = Vec::new();
    let mut cursor = 0;

    while cursor < text.len() {
        let remaining = &text[cursor..];

        // Byte offset where a window of (max_length - 1) characters ends.
        // `None` means the rest of the text fits.
        let window_end = remaining
            .char_indices()
            .nth(max_length - 1)
            .map(|(i, _)| i);

        let end = match window_end {
            None => remaining.len(),
            Some(limit) => match remaining[..limit].rfind('\n') {
                Some(pos) => pos + 1,
                None => match overflow {
                    OverflowPolicy::Fail => {
                        return Err(Error::UnsplittableSegment { offset: cursor, max_length });
                    }
                    OverflowPolicy::HardSplit => {
                        warn!(
                            "No line break within {} characters at offset {}; cutting mid-line",
                            max_length, cursor
                        );
                        limit
                    }
                },
            },
        };

        chunks.push(remaining[..end].to_string());
        cursor += end;
    }

    debug!("Paginated {} bytes into {} chunk(s)", text.len(), chunks.len());
    Ok(chunks)
}

/// Hands paginated text to the outbound transport.
pub struct MessageSender {
    transport: Arc<dyn OutboundTransport>,
}

impl MessageSender {
    pub fn new(transport: Arc<dyn OutboundTransport>) -> Self {
        Self { transport }
    }

    /// Prefix each chunk with the destination's mention, if any.
    pub fn address(target: &Destination, chunks: Vec<String>) -> Vec<String> {
        match target.mention.as_deref() {
            Some(mention) => chunks
                .into_iter()
                .map(|chunk| format!("{},\n{}", mention, chunk))
                .collect(),
            None => chunks,
        }
    }

    /// Send all chunks, in order, as separate messages.
    pub async fn send_chunks(&self, target: &Destination, chunks: Vec<String>) -> Result<(), Error> {
        if chunks.is_empty() {
            debug!("Nothing to send to {:?}", target);
            return Ok(());
        }

        let messages = Self::address(target, chunks);
        info!(
            "Sending {} message(s) to user={:?} room={:?} private={}",
            messages.len(),
            target.user,
            target.room,
            target.private
        );
        self.transport.send_messages(target, &messages).await
    }
}
