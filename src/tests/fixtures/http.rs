// Request and response helpers for router tests.

use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;

use crate::modules::timesheets::core::access::Caller;
use crate::shell::auth::{USER_ID_HEADER, USER_ROLE_HEADER};

pub fn request(method: &str, uri: &str, caller: Option<&Caller>, body: Option<serde_json::Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(caller) = caller {
        builder = builder
            .header(USER_ID_HEADER, caller.user_id.as_str())
            .header(USER_ROLE_HEADER, caller.role.as_str());
    }
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
