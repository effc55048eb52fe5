//! # folio lib

use std::{env, sync::LazyLock};

use tokio::sync::RwLock;

use crate::config::AppConfig;

pub mod api;
pub mod board;
pub mod error;
pub mod gallery;
pub mod gui;
pub mod profile;
pub mod utils;

pub static CHANNEL_BUFFER_DEFAULT: usize = 64;

pub static VERSION: &str = env!("CARGO_PKG_VERSION");

pub async fn init() {
    env_logger::Builder::new()
        .parse_filters(env::var("LOG").as_deref().unwrap_or("off"))
        .init();

    config::load().await;
}

mod config;
mod ds;

static CONFIG: LazyLock<RwLock<AppConfig>> = LazyLock::new(|| RwLock::new(AppConfig::default()));
