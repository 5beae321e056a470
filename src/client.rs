use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::StatusCode;
use reqwest::blocking::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::{Error, Result, classify_error_body};
use crate::query::{QueryOption, to_query_string};
use crate::util::{guess_filename_from_url, urljoin};

/// Base URL of the Data.gov.sg API.
pub const DEFAULT_BASE_URL: &str = "https://api.data.gov.sg";

/// Handle for the Data.gov.sg API.
///
/// Cloning is cheap: clones share the underlying HTTP connection pool.
/// All calls take `&self` and may run concurrently from several threads.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    progress: bool,

    http: HttpClient,
}

/// Builds a client for [`DEFAULT_BASE_URL`].
///
/// # Panics
///
/// Panics if the TLS backend cannot be initialized, like
/// [`reqwest::blocking::Client::new`]. Use [`Client::new`] to get an error
/// instead.
impl Default for Client {
    fn default() -> Self {
        Self::with_http_client(HttpClient::new(), DEFAULT_BASE_URL)
    }
}

impl Client {
    /// Creates a client for the public API at [`DEFAULT_BASE_URL`].
    ///
    /// The base URL is only ever changed through [`Client::with_base_url`]
    /// or [`Client::set_base_url`].
    pub fn new() -> anyhow::Result<Self> {
        let http = HttpClient::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self::with_http_client(http, DEFAULT_BASE_URL))
    }

    /// Wraps an existing HTTP client, sharing its connection pool.
    pub fn with_http_client(http: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            progress: false,
            http,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Shows a progress bar on stderr during [`Client::download`].
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Points the client at another host, e.g. a local mock server.
    pub fn set_base_url(&mut self, base_url: impl Into<String>) {
        self.base_url = base_url.into();
    }

    /// Builds the full URL for a resource path and its query options.
    pub fn resource_url(&self, path: &str, options: &[QueryOption]) -> Result<Url> {
        let mut url = Url::parse(&urljoin(&self.base_url, path))?;
        url.set_query(to_query_string(options).as_deref());
        Ok(url)
    }

    /// Executes a GET request and returns the raw body of a 200 response.
    ///
    /// Any other status is an error: the body is parsed as the API's
    /// `{code, message}` error and reported as [`Error::ResponseNotOk`], or as
    /// [`Error::ParseErrorMessageFailure`] with the raw body if it does not
    /// parse. Network failures are returned as [`Error::Transport`].
    pub fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        tracing::debug!(%url, "GET");
        let resp = self.http.get(url.as_str()).send()?;

        let status = resp.status();
        let body = resp.bytes()?.to_vec();
        tracing::debug!(%url, %status, len = body.len(), "response");

        if status != StatusCode::OK {
            tracing::warn!(%url, %status, "API request failed");
            return Err(classify_error_body(&body));
        }

        Ok(body)
    }

    pub(crate) fn get_resource<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        path: &str,
        options: &[QueryOption],
    ) -> Result<T> {
        let url = self.resource_url(path, options)?;
        let body = self.fetch(&url)?;
        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(resource, error = %source, "failed to decode response");
            Error::Decode { resource, source }
        })
    }

    /// Streams the body at `url` into `target` and returns the written path.
    ///
    /// An empty `target` means "name it after the URL" in the current
    /// directory. Non-200 responses are classified like [`Client::fetch`].
    ///
    /// The body is written to a `.part` file next to `target` and renamed
    /// once complete. On error nothing is left behind: neither the partial
    /// file nor any directory this call created.
    pub fn download(&self, url: &str, target: &Path) -> Result<PathBuf> {
        let target = if target.as_os_str().is_empty() {
            guess_filename_from_url(url)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("download"))
        } else {
            target.to_path_buf()
        };

        tracing::debug!(url, path = %target.display(), "download");
        let mut resp = self.http.get(url).send()?;
        if resp.status() != StatusCode::OK {
            tracing::warn!(url, status = %resp.status(), "download failed");
            let body = resp.bytes()?;
            return Err(classify_error_body(&body));
        }

        let created = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => create_missing_dirs(parent)?,
            _ => None,
        };
        let part = part_path(&target);

        let result = self
            .stream_to_file(&mut resp, &part)
            .and_then(|written| std::fs::rename(&part, &target).map(|()| written));
        match result {
            Ok(written) => {
                tracing::debug!(path = %target.display(), bytes = written, "download complete");
                Ok(target)
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "download interrupted");
                let _ = std::fs::remove_file(&part);
                if let Some(dir) = created {
                    let _ = std::fs::remove_dir_all(dir);
                }
                Err(err.into())
            }
        }
    }

    fn stream_to_file(
        &self,
        resp: &mut reqwest::blocking::Response,
        path: &Path,
    ) -> std::io::Result<u64> {
        let pb = if self.progress {
            let pb = ProgressBar::new(resp.content_length().unwrap_or(0));
            let style = ProgressStyle::with_template(
                "{spinner:.green} {bytes}/{total_bytes} ({bytes_per_sec}) {wide_bar} {eta}",
            )
            .map(|s| s.progress_chars("=>-"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
            pb.set_style(style);
            Some(pb)
        } else {
            None
        };

        let mut out = File::create(path)?;
        let mut buf = [0u8; 64 * 1024];
        let mut written: u64 = 0;
        loop {
            let n = resp.read(&mut buf)?;
            if n == 0 {
                break;
            }
            out.write_all(&buf[..n])?;
            written += n as u64;
            if let Some(pb) = &pb {
                pb.inc(n as u64);
            }
        }
        out.flush()?;

        if let Some(pb) = &pb {
            pb.finish_and_clear();
        }
        Ok(written)
    }
}

/// `dir/name` -> `dir/.name.part`.
fn part_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "download".to_string());
    target.with_file_name(format!(".{name}.part"))
}

/// Creates `dir` and its missing ancestors. Returns the outermost directory
/// that did not exist before, if any.
fn create_missing_dirs(dir: &Path) -> std::io::Result<Option<PathBuf>> {
    let outermost = dir
        .ancestors()
        .take_while(|p| !p.as_os_str().is_empty() && !p.exists())
        .last()
        .map(Path::to_path_buf);
    std::fs::create_dir_all(dir)?;
    Ok(outermost)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::default().with_base_url("http://localhost:3000/")
    }

    #[test]
    fn resource_url_without_options() {
        let url = client().resource_url("/v1/environment/psi/", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/v1/environment/psi/");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn resource_url_with_options() {
        let url = client()
            .resource_url("/v1/environment/psi/", &[QueryOption::date("2020-01-01")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/v1/environment/psi/?date=2020-01-01"
        );
    }

    #[test]
    fn malformed_base_url_is_invalid_url() {
        let mut c = client();
        c.set_base_url("not a url");
        let err = c.resource_url("/v1/environment/psi/", &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(err.is_transport());
    }

    #[test]
    fn default_points_at_public_api() {
        assert_eq!(Client::default().base_url(), DEFAULT_BASE_URL);
        assert_eq!(Client::new().unwrap().base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_ignores_working_directory_config_file() {
        // A config file in the working directory is not consulted.
        let rc = std::env::current_dir().unwrap().join(".datagovsgrc");
        assert!(!rc.exists());
        std::fs::write(&rc, "url: http://127.0.0.1:1\n").unwrap();
        let base = Client::new().map(|c| c.base_url().to_string());
        std::fs::remove_file(&rc).unwrap();

        assert_eq!(base.unwrap(), DEFAULT_BASE_URL);
    }

    #[test]
    fn base_url_changes_only_through_setters() {
        let mut c = Client::new().unwrap().with_base_url("http://127.0.0.1:8080");
        assert_eq!(c.base_url(), "http://127.0.0.1:8080");
        c.set_base_url("http://127.0.0.1:9090");
        assert_eq!(c.base_url(), "http://127.0.0.1:9090");
    }

    #[test]
    fn part_file_sits_next_to_target() {
        assert_eq!(
            part_path(Path::new("images/1001.jpg")),
            PathBuf::from("images/.1001.jpg.part")
        );
        assert_eq!(part_path(Path::new("1001.jpg")), PathBuf::from(".1001.jpg.part"));
    }

    #[test]
    fn create_missing_dirs_reports_outermost_new_dir() {
        let root = std::env::temp_dir().join(format!("datagovsg-dirs-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).unwrap();

        let created = create_missing_dirs(&root.join("a").join("b")).unwrap();
        assert_eq!(created, Some(root.join("a")));
        assert_eq!(create_missing_dirs(&root.join("a")).unwrap(), None);

        std::fs::remove_dir_all(&root).unwrap();
    }
}
