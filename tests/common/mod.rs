use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex, Once};
use std::thread;

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Clone, Debug)]
pub struct Canned {
    pub status: u16,
    pub body: String,
}

impl Canned {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Replies the stub gives per path. Anything else gets a 404.
#[derive(Clone, Debug)]
pub struct Replies {
    pub place_order: Canned,
    pub check_order: Canned,
    pub order_depth: Canned,
    pub last_traded_prices: Canned,
}

impl Default for Replies {
    fn default() -> Self {
        Self {
            place_order: Canned::new(201, r#"{"order_id": "abc123"}"#),
            check_order: Canned::new(200, r#"{"order_id": "abc123", "status": "open"}"#),
            order_depth: Canned::new(200, r#"{"buy": {"100.5": 3}, "sell": {"101.0": 2}}"#),
            last_traded_prices: Canned::new(200, r#"{"last_traded_prices": [100.75, 101.0]}"#),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Hit {
    pub method: String,
    pub path: String,
    pub order_id: Option<String>,
    pub body: String,
}

struct StubState {
    replies: Replies,
    hits: Arc<Mutex<Vec<Hit>>>,
}

async fn record(req: HttpRequest, body: web::Bytes, state: web::Data<StubState>) -> HttpResponse {
    let query = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();

    state.hits.lock().unwrap().push(Hit {
        method: req.method().to_string(),
        path: req.path().to_string(),
        order_id: query.get("order_id").cloned(),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    let canned = match req.path() {
        "/place_order" => &state.replies.place_order,
        "/check_order" => &state.replies.check_order,
        "/order_depth" => &state.replies.order_depth,
        "/last_traded_prices" => &state.replies.last_traded_prices,
        _ => return HttpResponse::NotFound().finish(),
    };

    HttpResponse::build(StatusCode::from_u16(canned.status).unwrap())
        .content_type("application/json")
        .body(canned.body.clone())
}

/// Stand-in for the simulation server, listening on an ephemeral local port.
pub struct StubServer {
    addr: SocketAddr,
    hits: Arc<Mutex<Vec<Hit>>>,
    handle: ServerHandle,
}

impl StubServer {
    pub fn start(replies: Replies) -> Self {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(StubState {
            replies,
            hits: hits.clone(),
        });

        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = actix_web::rt::System::new().block_on(async move {
                let server = HttpServer::new(move || {
                    App::new()
                        .app_data(state.clone())
                        .default_service(web::to(record))
                })
                .workers(1)
                .bind(("127.0.0.1", 0))?;

                let addr = server.addrs()[0];
                let server = server.run();
                tx.send((addr, server.handle())).unwrap();
                server.await
            });
        });

        let (addr, handle) = rx.recv().unwrap();
        Self { addr, hits, handle }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.hits().into_iter().map(|hit| hit.path).collect()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        // Sending the stop command happens eagerly, the returned future only waits on it.
        let _ = self.handle.stop(false);
    }
}

/// A local address with nothing listening on it.
pub fn dead_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Keeps every log record so tests can assert on what the client reported. Tests share one
/// process-wide logger, so each test logs under its own target and reads that target back.
struct CaptureLogger {
    records: Mutex<Vec<(String, Level, String)>>,
}

static CAPTURE: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        self.records.lock().unwrap().push((
            record.target().to_string(),
            record.level(),
            record.args().to_string(),
        ));
    }

    fn flush(&self) {}
}

pub fn capture_logs() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Debug);
    });
}

/// Info lines logged under `target`, in order.
pub fn info_lines(target: &str) -> Vec<String> {
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(t, level, _)| t == target && *level == Level::Info)
        .map(|(_, _, message)| message.clone())
        .collect()
}
