//! DNS-over-TCP framing (RFC 1035 §4.2.2).
//!
//! Each TCP message is preceded by a two-byte big-endian length. UDP messages
//! are sent as-is; the receive buffer allows for EDNS(0)-sized queries.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Maximum UDP DNS message size with EDNS(0)
pub const MAX_UDP_PACKET_SIZE: usize = 4096;

/// Read one length-prefixed DNS message. `UnexpectedEof` on the length prefix
/// means the peer closed the connection between requests.
pub async fn read_framed<S>(stream: &mut S) -> io::Result<Vec<u8>>
where
    S: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;
    let message_len = u16::from_be_bytes(len_buf) as usize;

    let mut message = vec![0u8; message_len];
    stream.read_exact(&mut message).await?;
    Ok(message)
}

/// Write one length-prefixed DNS message and flush it.
pub async fn write_framed<S>(stream: &mut S, message: &[u8]) -> io::Result<()>
where
    S: AsyncWrite + Unpin,
{
    let message_len = u16::try_from(message.len()).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("DNS message too large for TCP framing: {} bytes", message.len()),
        )
    })?;

    stream.write_all(&message_len.to_be_bytes()).await?;
    stream.write_all(message).await?;
    stream.flush().await
}
