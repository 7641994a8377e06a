//! TCP Server
//!
//! Sequential accept loop: each accepted connection is processed to
//! completion before the next `accept`. Sessions never interleave, so the
//! measurement generator needs no synchronization — it is simply lent to
//! one session at a time.

use std::net::{SocketAddr, TcpListener};

use crate::config::Config;
use crate::error::Result;
use crate::generator::MeasurementGenerator;
use super::Connection;

/// TCP server for the weather service
pub struct Server {
    listener: TcpListener,
    generator: MeasurementGenerator,
}

impl Server {
    /// Bind the listener and seed the process-wide generator
    pub fn bind(config: &Config) -> Result<Self> {
        Self::with_generator(config, MeasurementGenerator::new())
    }

    /// Bind with a caller-supplied generator (deterministic in tests)
    pub fn with_generator(config: &Config, generator: MeasurementGenerator) -> Result<Self> {
        let listener = TcpListener::bind(config.bind_addr())?;
        Ok(Self {
            listener,
            generator,
        })
    }

    /// The address the listener actually bound (port 0 resolves here)
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept one connection and run its session to completion
    pub fn serve_next(&mut self) -> Result<()> {
        let (stream, _) = self.listener.accept()?;
        let mut connection = Connection::new(stream)?;
        connection.handle(&mut self.generator)
    }

    /// Run the accept loop (blocking, runs until the process exits)
    ///
    /// A failed session is abandoned and the loop continues; only an
    /// `accept` failure ends the loop.
    pub fn run(&mut self) -> Result<()> {
        let addr = self.local_addr()?;
        tracing::info!("Listening on {}", addr);

        loop {
            let (stream, peer) = match self.listener.accept() {
                Ok(accepted) => accepted,
                Err(e) => {
                    tracing::error!("accept() failed: {}", e);
                    return Err(e.into());
                }
            };

            let mut connection = match Connection::new(stream) {
                Ok(conn) => conn,
                Err(e) => {
                    tracing::warn!("Failed to set up connection from {}: {}", peer, e);
                    continue;
                }
            };

            if let Err(e) = connection.handle(&mut self.generator) {
                tracing::warn!("Session with {} failed: {}", connection.peer_addr(), e);
            }
        }
    }
}
