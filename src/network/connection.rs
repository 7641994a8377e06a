//! Connection Handler
//!
//! One server-side session: exactly one request in, one response out,
//! then the connection closes. There is no pipelining and no retry; a
//! transport failure at any step abandons the session.

use std::io::{BufReader, BufWriter};
use std::net::TcpStream;

use crate::catalog;
use crate::error::{MeteoError, Result};
use crate::generator::MeasurementGenerator;
use crate::protocol::{read_request, write_response, MeasurementType, Response, Status};

/// Handles a single client connection
pub struct Connection {
    /// TCP stream reader (buffered)
    reader: BufReader<TcpStream>,

    /// TCP stream writer (buffered)
    writer: BufWriter<TcpStream>,

    /// Peer address for logging
    peer_addr: String,
}

impl Connection {
    /// Create a new connection handler
    pub fn new(stream: TcpStream) -> Result<Self> {
        // Get peer address for logging before we split the stream
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Disable Nagle's algorithm: each session is one tiny block each way
        stream.set_nodelay(true)?;

        // Clone stream for separate read/write handles
        let read_stream = stream.try_clone()?;
        let write_stream = stream;

        Ok(Self {
            reader: BufReader::new(read_stream),
            writer: BufWriter::new(write_stream),
            peer_addr,
        })
    }

    /// Run the session: receive, validate, generate, respond, close
    ///
    /// The connection is finished when this returns, success or not;
    /// dropping `self` closes the socket.
    pub fn handle(&mut self, generator: &mut MeasurementGenerator) -> Result<()> {
        tracing::debug!("Connection established from {}", self.peer_addr);

        // Exactly one fixed-size request block, or the session dies here
        let request = match read_request(&mut self.reader) {
            Ok(req) => req,
            Err(MeteoError::Io(ref e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                tracing::debug!("Client {} closed before sending a request", self.peer_addr);
                return Ok(());
            }
            Err(e) => {
                tracing::warn!("Error reading request from {}: {}", self.peer_addr, e);
                return Err(e);
            }
        };

        tracing::info!(
            "Request '{} {}' from client {}",
            request.type_code as char,
            request.city,
            self.peer_addr
        );

        let validation = catalog::validate(&request);
        tracing::debug!(
            "Validation for {}: {:?} (city normalized to {:?})",
            self.peer_addr,
            validation.status,
            validation.city
        );

        let response = match validation.status {
            Status::Success => {
                let ty = MeasurementType::from_code(request.type_code).ok_or_else(|| {
                    MeteoError::Protocol("validator accepted an unknown type code".to_string())
                })?;
                Response::success(request.type_code, generator.generate(ty))
            }
            Status::CityNotFound => Response::city_not_found(),
            Status::InvalidRequest => Response::invalid_request(),
            Status::Unknown(code) => {
                // The validator never emits this; bail rather than answer
                return Err(MeteoError::Protocol(format!(
                    "validator produced unknown status {}",
                    code
                )));
            }
        };

        if let Err(e) = write_response(&mut self.writer, &response) {
            tracing::warn!("Error writing response to {}: {}", self.peer_addr, e);
            return Err(e);
        }

        tracing::debug!(
            "Response {:?} sent to {}, closing",
            response.status,
            self.peer_addr
        );
        Ok(())
    }

    /// Get the peer address string
    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }
}
