use crate::core::{GeocodeQuery, HandlerResponse, ResponseBody};
use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::{Body, Error, Request, RequestExt, Response};

/// 從 API Gateway 事件取出 city / state
pub fn query_from_request(event: &Request) -> GeocodeQuery {
    let params = event.query_string_parameters();
    if !params.is_empty() {
        return GeocodeQuery::new(
            params.first("city").unwrap_or_default(),
            params.first("state").unwrap_or_default(),
        );
    }

    // 本地呼叫時參數只存在於 URI
    match event.uri().query() {
        Some(query) => GeocodeQuery::from_query_string(query),
        None => GeocodeQuery::default(),
    }
}

pub fn into_lambda_response(reply: HandlerResponse) -> Result<Response<Body>, Error> {
    let mut builder = Response::builder()
        .status(reply.status)
        .header(CONTENT_TYPE, reply.body.content_type());

    for (name, value) in &reply.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let body = match reply.body {
        ResponseBody::Json(value) => Body::Text(serde_json::to_string(&value)?),
        ResponseBody::Text(text) => Body::Text(text),
    };

    Ok(builder.body(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn body_text(response: &Response<Body>) -> String {
        match response.body() {
            Body::Text(text) => text.clone(),
            other => panic!("unexpected body: {:?}", other),
        }
    }

    #[test]
    fn test_query_from_gateway_parameters() {
        let params: HashMap<String, String> = [
            ("city".to_string(), "Seattle".to_string()),
            ("state".to_string(), "WA".to_string()),
        ]
        .into_iter()
        .collect();

        let event = lambda_http::http::Request::builder()
            .uri("https://example.com/getLatLong")
            .body(Body::Empty)
            .unwrap()
            .with_query_string_parameters(params);

        assert_eq!(query_from_request(&event), GeocodeQuery::new("Seattle", "WA"));
    }

    #[test]
    fn test_query_falls_back_to_uri() {
        let event = lambda_http::http::Request::builder()
            .uri("https://example.com/getLatLong?state=CA")
            .body(Body::Empty)
            .unwrap();

        let query = query_from_request(&event);
        assert_eq!(query.address(), ",+CA");
    }

    #[test]
    fn test_success_response_conversion() {
        let reply = HandlerResponse::success(serde_json::json!([{"lat": 1.5}]));
        let response = into_lambda_response(reply).unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(body_text(&response), r#"[{"lat":1.5}]"#);
    }

    #[test]
    fn test_failure_response_conversion() {
        let response = into_lambda_response(HandlerResponse::failure()).unwrap();

        assert_eq!(response.status(), 500);
        assert!(response.headers().get("Access-Control-Allow-Origin").is_none());
        assert_eq!(body_text(&response), "Bad news, I'm broken");
    }
}
