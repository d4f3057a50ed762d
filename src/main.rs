#![allow(warnings)]
//! Task Manager Frontend Entry Point

mod app;
mod components;
mod context;
mod pages;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

/// Send `tracing` events (including the API client's request logs) to the browser console
fn init_logging() {
    // No clock in the browser sandbox for the default timer
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());
    tracing_subscriber::registry()
        .with(LevelFilter::DEBUG)
        .with(console_layer)
        .init();
}

fn main() {
    console_error_panic_hook::set_once();
    init_logging();
    mount_to_body(App);
}
