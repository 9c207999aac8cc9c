pub mod cli;
pub mod generator;
pub mod logging;
pub mod scrapers;
pub mod search;

pub use cli::{handle_command, GenerateArgs, GeneratorCommands};
pub use generator::{ArticleGenerator, GenerationRequest};
pub use logging::{init_logging, Logger};
pub use scrapers::{MainTextScraper, Scraper};
pub use search::{DuckDuckGoSearch, SearchEngine};

pub mod prelude {
    pub use super::generator::{ArticleGenerator, GenerationRequest};
    pub use super::scrapers::Scraper;
    pub use super::search::SearchEngine;
    pub use ng_core::{Article, Error, Result};
}
