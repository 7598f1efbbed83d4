//! HTML forms can only submit GET and POST; mutating forms add a
//! `_method` query parameter that is promoted to the real verb here,
//! before routing dispatches on the method.

use axum::extract::Request;
use axum::http::Method;

/// Rewrite `POST /path?_method=PUT|PATCH|DELETE` to the named method.
///
/// Only POST requests are rewritten; unknown `_method` values are left
/// untouched.
pub fn override_method(mut req: Request) -> Request {
    if req.method() != Method::POST {
        return req;
    }
    let Some(query) = req.uri().query() else {
        return req;
    };
    let Some(target) = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("_method="))
    else {
        return req;
    };

    match target.to_ascii_uppercase().as_str() {
        "PUT" => *req.method_mut() = Method::PUT,
        "PATCH" => *req.method_mut() = Method::PATCH,
        "DELETE" => *req.method_mut() = Method::DELETE,
        _ => {}
    }
    req
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request(method: Method, uri: &str) -> Request {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[test]
    fn post_with_override_becomes_named_method() {
        let req = override_method(request(Method::POST, "/listings/abc?_method=DELETE"));
        assert_eq!(req.method(), Method::DELETE);

        let req = override_method(request(Method::POST, "/listings/abc?_method=put"));
        assert_eq!(req.method(), Method::PUT);
    }

    #[test]
    fn non_post_is_never_rewritten() {
        let req = override_method(request(Method::GET, "/listings?_method=DELETE"));
        assert_eq!(req.method(), Method::GET);
    }

    #[test]
    fn post_without_override_stays_post() {
        let req = override_method(request(Method::POST, "/listings"));
        assert_eq!(req.method(), Method::POST);
    }

    #[test]
    fn unknown_override_is_ignored() {
        let req = override_method(request(Method::POST, "/listings?_method=TRACE"));
        assert_eq!(req.method(), Method::POST);
    }
}
