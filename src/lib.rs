pub mod caption;
pub mod encode;
pub mod image;
pub mod options;
pub mod search;
pub mod select;

use std::path::Path;

use directories::ProjectDirs;
use isahc::config::RedirectPolicy;
use isahc::prelude::Configurable;
use isahc::HttpClient;
use miette::Diagnostic;
use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::caption::format_caption;
use crate::image::{image_url, markdown};
use crate::options::FrinkiacOptions;
use crate::search::{search, Fetch, SearchError, SearchResult};
use crate::select::select;

#[derive(Debug)]
pub struct Frinkiac {
    /// HTTP client.
    http_client: HttpClient,
    /// Configuration options of the session.
    options: FrinkiacOptions,
}

#[derive(Debug, Error, Diagnostic)]
pub enum FrinkiacError {
    #[error("Could not create HTTP client.")]
    HttpClient(#[from] isahc::Error),

    #[error("Could not load configuration file: {0}")]
    Options(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Search(#[from] SearchError),
}

impl Frinkiac {
    /// Create new session with given options.
    pub fn new(options: FrinkiacOptions) -> Result<Frinkiac, FrinkiacError> {
        let mut builder = HttpClient::builder().redirect_policy(RedirectPolicy::Follow);

        if let Some(timeout) = options.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Frinkiac {
            http_client: builder.build()?,
            options,
        })
    }

    /// Load options from `config`, or from the default configuration file
    /// when no path is given. Only an explicitly requested file has to exist.
    pub fn load_options(config: Option<&Path>) -> Result<FrinkiacOptions, FrinkiacError> {
        let options = match config {
            Some(path) => FrinkiacOptions::load(path, true),
            None => match ProjectDirs::from("com", "", "Frinkiac") {
                Some(dirs) => FrinkiacOptions::load(&dirs.config_dir().join("config.toml"), false),
                None => {
                    debug!("No configuration directory, using defaults.");
                    Ok(Default::default())
                }
            },
        };

        options.map_err(FrinkiacError::Options)
    }

    pub fn options(&self) -> &FrinkiacOptions {
        &self.options
    }

    /// Search for frames matching `query`.
    pub fn search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        search(&self.http_client, self.options.base_url(), query)
    }

    /// Find a random frame for `query` and return it as a markdown image,
    /// with `caption` drawn over it if given.
    pub fn meme<R>(
        &self,
        query: &str,
        caption: Option<&str>,
        rng: &mut R,
    ) -> Result<String, FrinkiacError>
    where
        R: Rng + ?Sized,
    {
        Ok(meme(
            &self.http_client,
            self.options.base_url(),
            query,
            caption,
            rng,
        )?)
    }
}

/// The whole pipeline: search, pick one result, build its image URL and wrap
/// it in markdown.
pub fn meme<F, R>(
    fetch: &F,
    base_url: &str,
    query: &str,
    caption: Option<&str>,
    rng: &mut R,
) -> Result<String, SearchError>
where
    F: Fetch + ?Sized,
    R: Rng + ?Sized,
{
    let results = search(fetch, base_url, query)?;

    let result = select(&results, rng).ok_or_else(|| SearchError::NotFound {
        query: query.to_string(),
    })?;

    debug!(
        id = result.id,
        episode = %result.episode,
        timestamp = result.timestamp,
        candidates = results.len(),
        "Selected frame."
    );

    let caption = caption.map(format_caption);
    let url = image_url(
        base_url,
        &result.episode,
        result.timestamp,
        caption.as_deref(),
    );

    Ok(markdown(&url))
}
