use std::{convert::Infallible, future::Future, net::SocketAddr, path::PathBuf};

use async_graphql::http::GraphiQLSource;
use async_graphql_warp::GraphQLResponse;
use tracing::{info, warn};
use warp::{http::Response, Filter};

use crate::api::Schema;

const GRAPHQL_PATH: &str = "graphql";

/// Resolves on Ctrl-C. Never resolves if the signal cannot be watched.
pub(crate) async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown requested"),
        Err(error) => {
            warn!("Cannot listen for the shutdown signal. {error}");
            std::future::pending::<()>().await;
        }
    }
}

/// Serves the GraphQL endpoint on `addr`, over TLS when `tls` holds a
/// certificate and key path, until `shutdown` resolves.
pub(crate) async fn serve(
    schema: Schema,
    addr: SocketAddr,
    tls: Option<(PathBuf, PathBuf)>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) {
    let graphql_post = warp::post()
        .and(warp::path(GRAPHQL_PATH))
        .and(warp::path::end())
        .and(async_graphql_warp::graphql(schema))
        .and_then(
            |(schema, request): (Schema, async_graphql::Request)| async move {
                Ok::<_, Infallible>(GraphQLResponse::from(schema.execute(request).await))
            },
        );
    let graphiql = warp::get()
        .and(warp::path(GRAPHQL_PATH))
        .and(warp::path::end())
        .map(|| {
            Response::builder()
                .header("content-type", "text/html")
                .body(GraphiQLSource::build().endpoint("/graphql").finish())
        });
    let routes = graphql_post.or(graphiql);

    if let Some((cert, key)) = tls {
        let (bound, server) = warp::serve(routes)
            .tls()
            .cert_path(cert)
            .key_path(key)
            .bind_with_graceful_shutdown(addr, shutdown);
        info!("Serving GraphQL on https://{bound}/{GRAPHQL_PATH}");
        server.await;
    } else {
        let (bound, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, shutdown);
        info!("Serving GraphQL on http://{bound}/{GRAPHQL_PATH}");
        server.await;
    }
    info!("Server stopped");
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::oneshot;

    use super::*;
    use crate::{api, database::Database};

    #[tokio::test]
    async fn serve_returns_after_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::connect(dir.path()).unwrap();
        let schema = api::schema(db, Duration::from_millis(10));
        let (stop, stopped) = oneshot::channel::<()>();

        let server = tokio::spawn(serve(
            schema,
            "127.0.0.1:0".parse().unwrap(),
            None,
            async move {
                stopped.await.ok();
            },
        ));
        stop.send(()).unwrap();
        tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
    }
}
