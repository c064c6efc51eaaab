//! HTTP request handling for the login API

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpStream;
use std::thread;
use std::time::Duration;

use serde_json::json;
use tfa_login_api::{mock, LoginRequest, TfaRequest, LOGIN_PATH, TFA_PATH};

/// Largest request body accepted, in bytes.
pub const MAX_BODY_SIZE: usize = 4 * 1024;

/// A parsed HTTP request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

/// Status code and JSON body to send back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    fn message(status: u16, message: &str) -> Self {
        Self::new(status, json!({ "message": message }).to_string())
    }
}

pub fn status_text(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

/// Parse an HTTP request from a reader
/// Returns None if this is not a valid HTTP request or if its body is
/// larger than [`MAX_BODY_SIZE`].
pub fn parse_http_request<R: Read>(stream: R) -> Option<Request> {
    let mut reader = BufReader::new(stream);

    // Read request line
    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;

    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let path = parts.next()?.to_string();

    // Read headers
    let mut headers = Vec::new();
    let mut content_length = 0usize;

    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).ok()? == 0 {
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            break;
        }

        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim().to_lowercase();
            let value = value.trim().to_string();

            if name == "content-length" {
                content_length = value.parse().unwrap_or(0);
            }

            headers.push((name, value));
        }
    }

    if content_length > MAX_BODY_SIZE {
        log::warn!(
            "Rejecting {} {}: body of {} bytes is too large",
            method,
            path,
            content_length
        );
        return None;
    }

    // Read body if present
    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).ok()?;
    }

    Some(Request {
        method,
        path,
        headers,
        body,
    })
}

/// Send an HTTP response
pub fn send_response<W: Write>(stream: &mut W, response: &Response) {
    let raw = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\
         Access-Control-Allow-Origin: *\r\n\
         Access-Control-Allow-Methods: POST, OPTIONS\r\n\
         Access-Control-Allow-Headers: Content-Type\r\n\
         \r\n\
         {}",
        response.status,
        status_text(response.status),
        response.body.len(),
        response.body
    );
    if let Err(e) = stream.write_all(raw.as_bytes()).and_then(|_| stream.flush()) {
        log::warn!("Failed to write response: {}", e);
    }
}

/// Route a request to its canned answer.
///
/// Both API endpoints sleep `delay` before answering.
pub fn route(request: &Request, delay: Duration) -> Response {
    log::debug!("HTTP {} {}", request.method, request.path);

    // Handle CORS preflight
    if request.method == "OPTIONS" {
        return Response::new(200, "");
    }

    match (request.method.as_str(), request.path.as_str()) {
        ("POST", LOGIN_PATH) => {
            thread::sleep(delay);
            match serde_json::from_slice::<LoginRequest>(&request.body) {
                Ok(req) => {
                    let answer = mock::login(&req);
                    if answer.is_success() {
                        log::info!("Login accepted for {}", req.email);
                    } else {
                        log::warn!("Login refused for {} ({})", req.email, answer.status);
                    }
                    answer_response(&answer)
                }
                Err(e) => {
                    log::error!("Failed to parse login request: {}", e);
                    Response::message(400, &e.to_string())
                }
            }
        }
        ("POST", TFA_PATH) => {
            thread::sleep(delay);
            match serde_json::from_slice::<TfaRequest>(&request.body) {
                Ok(req) => {
                    let answer = mock::verify(&req);
                    if answer.is_success() {
                        log::info!("Verification code accepted");
                    } else {
                        log::warn!("Invalid verification code {:06}", req.tfa_code);
                    }
                    answer_response(&answer)
                }
                Err(e) => {
                    log::error!("Failed to parse verification request: {}", e);
                    Response::message(400, &e.to_string())
                }
            }
        }
        _ => Response::message(404, "Not found"),
    }
}

fn answer_response(answer: &mock::Answer) -> Response {
    match answer.to_json() {
        Ok(body) => Response::new(answer.status, body),
        Err(e) => {
            log::error!("Failed to serialize answer: {}", e);
            Response::message(500, "Failed to serialize answer")
        }
    }
}

/// Read one request from the stream, answer it and close.
pub fn handle_connection(mut stream: TcpStream, delay: Duration) {
    let reader = match stream.try_clone() {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("Failed to clone stream: {}", e);
            return;
        }
    };
    match parse_http_request(reader) {
        Some(request) => {
            let response = route(&request, delay);
            send_response(&mut stream, &response);
        }
        None => {
            log::debug!("Dropping connection: not an HTTP request");
        }
    }
}
