//! One-shot background requests, polled from the UI thread as `Promise`s.

use std::future::Future;

use eframe::egui::Context;
use poll_promise::Promise;

#[cfg(not(target_arch = "wasm32"))]
use {anyhow::Context as _, tokio::runtime::Runtime};

/// NATIVE: owns the tokio runtime the upstream requests run on.
#[cfg(not(target_arch = "wasm32"))]
pub struct TaskRunner {
    runtime: Runtime,
}

#[cfg(not(target_arch = "wasm32"))]
impl TaskRunner {
    pub fn new() -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("upstream-io")
            .enable_all()
            .build()
            .context("failed to create tokio runtime")?;
        Ok(Self { runtime })
    }

    /// Runs `future` to completion and wakes the UI when it is done.
    pub fn spawn<T, F>(&self, ctx: &Context, future: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + Send + 'static,
    {
        let _guard = self.runtime.enter();
        let ctx = ctx.clone();
        Promise::spawn_async(async move {
            let output = future.await;
            ctx.request_repaint();
            output
        })
    }
}

/// WASM: futures run on the browser's event loop.
#[cfg(target_arch = "wasm32")]
pub struct TaskRunner;

#[cfg(target_arch = "wasm32")]
impl TaskRunner {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self)
    }

    pub fn spawn<T, F>(&self, ctx: &Context, future: F) -> Promise<T>
    where
        T: Send + 'static,
        F: Future<Output = T> + 'static,
    {
        let ctx = ctx.clone();
        Promise::spawn_local(async move {
            let output = future.await;
            ctx.request_repaint();
            output
        })
    }
}
