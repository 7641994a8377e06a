//! TCP Client
//!
//! One client-side session: connect, send one request block, block on the
//! single response block, done. No timeout and no cancellation — a
//! stalled peer stalls the client.

use std::io::{BufReader, BufWriter};
use std::net::{TcpStream, ToSocketAddrs};

use crate::error::Result;
use crate::protocol::{read_response, write_request, Request, Response};

/// A connected client, good for exactly one exchange
pub struct Client {
    reader: BufReader<TcpStream>,
    writer: BufWriter<TcpStream>,
}

impl Client {
    /// Connect to the server
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self> {
        let stream = TcpStream::connect(addr)?;
        stream.set_nodelay(true)?;

        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
        })
    }

    /// Send the request and block for the response
    ///
    /// Consumes the client: the server closes after one exchange, so the
    /// connection is not reusable.
    pub fn exchange(mut self, request: &Request) -> Result<Response> {
        write_request(&mut self.writer, request)?;
        tracing::debug!(
            "Sent request '{} {}'",
            request.type_code as char,
            request.city
        );

        let response = read_response(&mut self.reader)?;
        tracing::debug!("Received response {:?}", response.status);
        Ok(response)
    }
}
