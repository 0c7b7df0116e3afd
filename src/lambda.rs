#[cfg(feature = "lambda")]
use geo_lookup::adapters::lambda::{into_lambda_response, query_from_request};
#[cfg(feature = "lambda")]
use geo_lookup::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use geo_lookup::{build_handler, GeoHandler, ServiceConfig};
#[cfg(feature = "lambda")]
use lambda_http::{run, service_fn, Body, Error, Request, Response};

#[cfg(feature = "lambda")]
async fn function_handler(handler: &GeoHandler, event: Request) -> Result<Response<Body>, Error> {
    let query = query_from_request(&event);
    tracing::info!("Geocode request: city={:?} state={:?}", query.city, query.state);

    let reply = handler.handle(&query).await;
    tracing::info!("Responding with status {}", reply.status);

    into_lambda_response(reply)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入一次配置
    let config = ServiceConfig::from_env()?;
    config.validate()?;

    let handler = build_handler(&config);
    let handler = &handler;

    run(service_fn(move |event: Request| async move {
        function_handler(handler, event).await
    }))
    .await
}
