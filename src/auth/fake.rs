//! In-process stand-in for the auth service.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use crate::auth::client::{
    ApiResponse, AuthApi, AuthResponseBody, LoginRequest, RegisterRequest, TransportError,
};

/// Canned response plus a call counter.
#[derive(Clone)]
pub struct FakeApi {
    reply: Result<ApiResponse, TransportError>,
    calls: Arc<AtomicUsize>,
}

impl FakeApi {
    pub fn replying(status: u16, token: Option<&str>, message: Option<&str>) -> Self {
        Self {
            reply: Ok(ApiResponse {
                status,
                body: AuthResponseBody {
                    token: token.map(str::to_string),
                    message: message.map(str::to_string),
                },
            }),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: Err(TransportError("connection refused".into())),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AuthApi for FakeApi {
    async fn login(&self, _: &LoginRequest) -> Result<ApiResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }

    async fn register(&self, _: &RegisterRequest) -> Result<ApiResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply.clone()
    }
}
