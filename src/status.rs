//! HTTP status codes as a typed enum.
//!
//! Only the codes a locale-routed service actually sends. Anything else can
//! still be produced by building an `http::Response` yourself.
//!
//! ```rust
//! use lingo::{Response, Status};
//!
//! Response::status(Status::NoContent);
//! Response::redirect(Status::TemporaryRedirect, "/en/dashboard");
//! ```

/// Status codes sent by lingo and its handlers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    // ── 2xx Success ───────────────────────────────────────────────────────────
    Ok,                  // 200
    Created,             // 201
    NoContent,           // 204

    // ── 3xx Redirection ───────────────────────────────────────────────────────
    MovedPermanently,    // 301
    Found,               // 302
    SeeOther,            // 303
    TemporaryRedirect,   // 307
    PermanentRedirect,   // 308

    // ── 4xx Client errors ─────────────────────────────────────────────────────
    BadRequest,          // 400
    NotFound,            // 404
    MethodNotAllowed,    // 405

    // ── 5xx Server errors ─────────────────────────────────────────────────────
    InternalServerError, // 500
}

impl Status {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok                  => 200,
            Self::Created             => 201,
            Self::NoContent           => 204,
            Self::MovedPermanently    => 301,
            Self::Found               => 302,
            Self::SeeOther            => 303,
            Self::TemporaryRedirect   => 307,
            Self::PermanentRedirect   => 308,
            Self::BadRequest          => 400,
            Self::NotFound            => 404,
            Self::MethodNotAllowed    => 405,
            Self::InternalServerError => 500,
        }
    }

    pub fn is_redirect(self) -> bool {
        (300..400).contains(&self.code())
    }
}

impl From<Status> for u16 {
    fn from(s: Status) -> u16 { s.code() }
}

impl From<Status> for http::StatusCode {
    fn from(s: Status) -> http::StatusCode {
        match s {
            Status::Ok                  => http::StatusCode::OK,
            Status::Created             => http::StatusCode::CREATED,
            Status::NoContent           => http::StatusCode::NO_CONTENT,
            Status::MovedPermanently    => http::StatusCode::MOVED_PERMANENTLY,
            Status::Found               => http::StatusCode::FOUND,
            Status::SeeOther            => http::StatusCode::SEE_OTHER,
            Status::TemporaryRedirect   => http::StatusCode::TEMPORARY_REDIRECT,
            Status::PermanentRedirect   => http::StatusCode::PERMANENT_REDIRECT,
            Status::BadRequest          => http::StatusCode::BAD_REQUEST,
            Status::NotFound            => http::StatusCode::NOT_FOUND,
            Status::MethodNotAllowed    => http::StatusCode::METHOD_NOT_ALLOWED,
            Status::InternalServerError => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
