// img-alt-api - Image alt text generator backed by OpenAI vision models
// Author: kelexine (https://github.com/kelexine)

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod openai;
pub mod server;
pub mod utils;
pub mod vision;
