// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! One-shot HTTP source.
//!
//! The whole exchange happens before an [`Observable`] exists. A failure to connect, send or
//! read the body is returned to the caller and no stream is ever created. On success the
//! observable emits the full body once and completes.
//!
//! The status code is not interpreted: a `404` body is emitted like any other.

use reqwest::{Client, Method, Request, Url};
use rivulet_core::{Observable, Result, RivuletError};

/// Executes `request` with `client`, or with a default client when `None`, and wraps the
/// response body in a single-emission observable.
pub async fn fetch(client: Option<&Client>, request: Request) -> Result<Observable<Vec<u8>>> {
    let default_client;
    let client = match client {
        Some(client) => client,
        None => {
            default_client = Client::new();
            &default_client
        }
    };

    let url = request.url().clone();
    let response = client.execute(request).await.map_err(|error| {
        warn!(url = %url, "fetch request failed: {}", error);
        RivuletError::transport(format!("requesting {url}"), error)
    })?;
    debug!(url = %url, status = response.status().as_u16(), "fetch response received");

    let body = response.bytes().await.map_err(|error| {
        warn!(url = %url, "fetch body read failed: {}", error);
        RivuletError::transport(format!("reading body of {url}"), error)
    })?;
    debug!(url = %url, bytes = body.len(), "fetch completed");

    Ok(Observable::of(body.to_vec()))
}

/// GETs `url` with a default client. See [`fetch`].
pub async fn fetch_url(url: &str) -> Result<Observable<Vec<u8>>> {
    let url = Url::parse(url).map_err(|error| {
        warn!(url = url, "fetch url rejected: {}", error);
        RivuletError::transport(format!("parsing url {url}"), error)
    })?;
    fetch(None, Request::new(Method::GET, url)).await
}
