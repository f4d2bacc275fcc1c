//! Per-request trace identifiers.
//!
//! Register with `App::wrap(from_fn(trace_requests))`. Each request gets a
//! fresh [`TraceId`] that handlers, extractors and domain errors can read,
//! and the same value is returned in the `trace-id` response header.

use actix_web::Error;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::middleware::Next;
use tracing::{debug, error};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Run the rest of the pipeline with a new [`TraceId`] in scope.
///
/// ```
/// use actix_web::App;
/// use actix_web::middleware::from_fn;
/// use donor_backend::trace_requests;
///
/// let _app = App::new().wrap(from_fn(trace_requests));
/// ```
pub async fn trace_requests(
    req: ServiceRequest,
    next: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let trace_id = TraceId::generate();
    let method = req.method().clone();
    let path = req.path().to_owned();

    let mut res = trace_id.run(next.call(req)).await?;
    debug!(%trace_id, %method, %path, status = res.status().as_u16(), "request handled");

    match HeaderValue::try_from(trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(err) => error!(error = %err, %trace_id, "trace id is not a valid header value"),
    }
    Ok(res)
}
