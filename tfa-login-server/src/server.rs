use std::io;
use std::net::{SocketAddr, TcpListener};
use std::thread;
use std::time::Duration;

use tfa_login_api::{mock, LOGIN_PATH, TFA_PATH};

use crate::http;

/// Development server answering the login API
pub struct Server {
    host: String,
    port: u16,
    delay: Duration,
}

impl Server {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            delay: mock::PROCESSING_DELAY,
        }
    }

    /// Override the simulated processing time
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Print server info and scenario trigger values
    pub fn print_banner(&self) {
        let addr = format!("http://{}:{}", self.host, self.port);

        println!();
        println!("╔══════════════════════════════════════════════════════════════╗");
        println!("║              TWO-FACTOR LOGIN SERVER (Dev Mode)              ║");
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║ API: {:<56}║", addr);
        println!("║   POST {:<14} - Check credentials                     ║", LOGIN_PATH);
        println!("║   POST {:<14} - Verify code                           ║", TFA_PATH);
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!("║                          SCENARIOS                           ║");
        println!("╠══════════════════════════════════════════════════════════════╣");
        println!(
            "║  200 │ {:<17} / {:<12}                      ║",
            mock::VALID_EMAIL,
            mock::VALID_PASSWORD
        );
        println!("║  500 │ {:<17}                                     ║", mock::SERVER_ERROR_EMAIL);
        println!("║  429 │ {:<17}                                     ║", mock::RATE_LIMIT_EMAIL);
        println!(
            "║  401 │ {:<17} or password {:<14}            ║",
            mock::FAIL_EMAIL,
            mock::WRONG_PASSWORD
        );
        println!("║  404 │ anything else                                         ║");
        println!("║  TFA │ code {:06}                                           ║", mock::VALID_CODE);
        println!("╚══════════════════════════════════════════════════════════════╝");
        println!();
    }

    pub fn bind(&self) -> io::Result<TcpListener> {
        let addr = format!("{}:{}", self.host, self.port);
        let listener = TcpListener::bind(&addr)?;
        log::info!("API listening on {}", listener.local_addr()?);
        Ok(listener)
    }

    /// Run the server (blocking)
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let listener = self.bind()?;
        self.serve(listener);
        Ok(())
    }

    /// Accept connections forever, one thread per connection
    pub fn serve(&self, listener: TcpListener) {
        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let delay = self.delay;
                    thread::spawn(move || http::handle_connection(stream, delay));
                }
                Err(e) => {
                    log::error!("Failed to accept connection: {}", e);
                }
            }
        }
    }

    /// Bind and serve from a background thread.
    /// Returns the bound address, useful with port 0.
    pub fn spawn(self) -> io::Result<(SocketAddr, thread::JoinHandle<()>)> {
        let listener = self.bind()?;
        let addr = listener.local_addr()?;
        let handle = thread::spawn(move || self.serve(listener));
        Ok((addr, handle))
    }
}
