use super::*;
use crate::constants::header;
use crate::headers::Headers;
use crate::options::CorsOptions;

#[derive(Debug, Default)]
struct Recorder {
    headers: Headers,
    status: Option<StatusCode>,
    body: String,
}

impl ResponseWriter for Recorder {
    type Sink = Headers;

    fn header_sink(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn write_status(&mut self, status: StatusCode) {
        self.status = Some(status);
    }
}

fn hello(_request: &RequestContext<'_>, response: &mut Recorder) {
    response.body.push_str("hello");
}

fn hello_http(_request: &RequestContext<'_>, response: &mut Response<String>) {
    *response.body_mut() = "hello".to_string();
}

fn wrap_fn<F>(cors: &Cors, handler: F) -> CorsHandler<F>
where
    F: Fn(&RequestContext<'_>, &mut Recorder),
{
    cors.wrap(handler)
}

fn preflight_request() -> RequestContext<'static> {
    RequestContext {
        method: "OPTIONS",
        origin: "http://foobar.com",
        access_control_request_method: "GET",
        access_control_request_headers: "",
    }
}

fn actual_request() -> RequestContext<'static> {
    RequestContext {
        method: "GET",
        origin: "http://foobar.com",
        access_control_request_method: "",
        access_control_request_headers: "",
    }
}

mod wrap {
    use super::*;

    #[test]
    fn should_finish_with_ok_and_skip_handler_when_preflight_without_passthrough() {
        // Arrange
        let handler = Cors::default().wrap(hello);
        let mut response = Recorder::default();

        // Act
        handler.serve(&preflight_request(), &mut response);

        // Assert
        assert_eq!(response.status, Some(StatusCode::OK));
        assert!(response.body.is_empty());
        assert_eq!(
            response.headers.get(header::ACCESS_CONTROL_ALLOW_METHODS),
            Some("GET")
        );
    }

    #[test]
    fn should_run_handler_after_headers_when_preflight_with_passthrough() {
        // Arrange
        let handler = Cors::new(CorsOptions::new().options_passthrough(true)).wrap(hello);
        let mut response = Recorder::default();

        // Act
        handler.serve(&preflight_request(), &mut response);

        // Assert
        assert_eq!(response.status, None);
        assert_eq!(response.body, "hello");
        assert_eq!(
            response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("*")
        );
    }

    #[test]
    fn should_run_handler_when_actual_request() {
        // Arrange
        let handler = Cors::default().wrap(hello);
        let mut response = Recorder::default();

        // Act
        handler.serve(&actual_request(), &mut response);

        // Assert
        assert_eq!(response.status, None);
        assert_eq!(response.body, "hello");
        assert_eq!(response.headers.get(header::VARY), Some("Origin"));
    }

    #[test]
    fn should_accept_closure_when_wrapping_inline_handler() {
        // Arrange
        let handler = wrap_fn(&Cors::default(), |_, response| {
            response.body.push_str("closure");
        });
        let mut response = Recorder::default();

        // Act
        handler.serve(&actual_request(), &mut response);

        // Assert
        assert_eq!(response.body, "closure");
    }

    #[test]
    fn should_write_status_into_http_response_when_preflight_answered() {
        // Arrange
        let handler = Cors::default().wrap(hello_http);
        let mut response = Response::new(String::new());
        *response.status_mut() = StatusCode::NOT_FOUND;

        // Act
        handler.serve(&preflight_request(), &mut response);

        // Assert
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());
        assert_eq!(
            response
                .headers()
                .get_all(http::header::VARY)
                .iter()
                .count(),
            3
        );
    }
}

mod inner {
    use super::*;

    #[test]
    fn should_expose_wrapped_handler_when_wrapped() {
        // Arrange
        let handler = Cors::default().wrap(hello);
        let mut response = Recorder::default();

        // Act
        handler.inner()(&actual_request(), &mut response);

        // Assert
        assert_eq!(response.body, "hello");
        assert!(response.headers.is_empty());
    }
}

mod apply {
    use super::*;

    #[test]
    fn should_write_headers_without_status_when_preflight() {
        // Arrange
        let cors = Cors::default();
        let mut response = Recorder::default();

        // Act
        cors.apply(&preflight_request(), &mut response);

        // Assert
        assert_eq!(response.status, None);
        assert!(response.body.is_empty());
        assert_eq!(response.headers.get_all(header::VARY).len(), 3);
    }

    #[test]
    fn should_write_actual_headers_when_not_preflight() {
        let cors = Cors::default();
        let mut response = Recorder::default();

        cors.apply(&actual_request(), &mut response);

        assert_eq!(
            response.headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some("*")
        );
    }
}

mod serve {
    use super::*;

    #[test]
    fn should_skip_continuation_when_preflight_without_passthrough() {
        // Arrange
        let cors = Cors::default();
        let mut response = Recorder::default();
        let mut called = false;

        // Act
        cors.serve(&preflight_request(), &mut response, |_, _| called = true);

        // Assert
        assert!(!called);
        assert_eq!(response.status, Some(StatusCode::OK));
    }

    #[test]
    fn should_call_continuation_when_actual_request() {
        // Arrange
        let cors = Cors::default();
        let mut response = Recorder::default();

        // Act
        cors.serve(&actual_request(), &mut response, hello);

        // Assert
        assert_eq!(response.body, "hello");
        assert_eq!(response.status, None);
    }

    #[test]
    fn should_call_continuation_when_preflight_with_passthrough() {
        let cors = Cors::new(CorsOptions::new().options_passthrough(true));
        let mut response = Recorder::default();

        cors.serve(&preflight_request(), &mut response, hello);

        assert_eq!(response.body, "hello");
        assert_eq!(response.status, None);
    }
}
