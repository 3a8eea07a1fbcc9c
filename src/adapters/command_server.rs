//! TCP command console.
//!
//! A line-oriented console on the local network: connect, type a
//! command (`status`, `door`, `window`, `pir`, `help`), get a text
//! reply.  Replies are rendered from the shared [`StatusCell`] snapshot,
//! so the console never touches the poll loop or the domain state.
//!
//! One client at a time, blocking accept loop on its own thread.  Lines
//! longer than the buffer are answered with the help text, same as any
//! other unrecognised input.

use std::io::{BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;

use log::{info, warn};

use crate::app::query;
use crate::status::StatusCell;

/// Default console port.
pub const DEFAULT_PORT: u16 = 7700;

/// Command lines longer than this are treated as garbage.
const MAX_LINE: usize = 256;

/// Bind the console and serve it on a dedicated thread.
///
/// Returns an error only if the initial bind fails; per-client I/O
/// errors just drop that client.
pub fn spawn(cell: Arc<StatusCell>, port: u16) -> std::io::Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port))?;
    info!("command console listening on port {}", port);

    thread::Builder::new()
        .name("cmd-server".into())
        .stack_size(8 * 1024)
        .spawn(move || {
            for stream in listener.incoming() {
                match stream {
                    Ok(stream) => {
                        if let Err(e) = serve_client(&cell, stream) {
                            warn!("console client error: {}", e);
                        }
                    }
                    Err(e) => warn!("console accept failed: {}", e),
                }
            }
        })?;
    Ok(())
}

fn serve_client(cell: &StatusCell, stream: TcpStream) -> std::io::Result<()> {
    let peer = stream.peer_addr()?;
    info!("console client connected: {}", peer);

    let mut writer = stream.try_clone()?;
    let mut reader = BufReader::new(stream);
    let mut line: heapless::Vec<u8, MAX_LINE> = heapless::Vec::new();
    let mut overflowed = false;

    loop {
        let mut byte = [0u8; 1];
        if reader.read(&mut byte)? == 0 {
            break; // client hung up
        }
        if byte[0] != b'\n' {
            if line.push(byte[0]).is_err() {
                // Keep consuming until end of line, then answer with help.
                overflowed = true;
            }
            continue;
        }

        let reply = if overflowed {
            query::respond(&cell.snapshot(), "")
        } else {
            let text = core::str::from_utf8(&line).unwrap_or("");
            query::respond(&cell.snapshot(), text)
        };
        writer.write_all(reply.as_bytes())?;
        writer.write_all(b"\n")?;
        line.clear();
        overflowed = false;
    }

    info!("console client disconnected: {}", peer);
    Ok(())
}
