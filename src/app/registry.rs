//! Global HAPI server directory
//!
//! hapi-server.org publishes a community-maintained CSV directory of known
//! HAPI servers. The directory is a convenience layer over a small static
//! fallback table, so total failure here means "no servers known", never a
//! hard error: callers always have the fallback to offer.

use std::sync::Arc;

use tracing::{debug, warn};
use url::Url;

use crate::app::client::HapiClient;
use crate::app::models::Server;
use crate::constants::directory;
use crate::errors::{HapiError, HapiResult};

/// Client for the global server directory
#[derive(Debug, Clone)]
pub struct ServerRegistryClient {
    client: Arc<HapiClient>,
    directory_url: String,
}

impl ServerRegistryClient {
    /// Create a registry client against the default directory
    pub fn new(client: Arc<HapiClient>) -> Self {
        Self {
            client,
            directory_url: directory::SERVER_DIRECTORY_URL.to_string(),
        }
    }

    /// Point the client at a different directory URL
    pub fn with_directory_url(mut self, url: impl Into<String>) -> Self {
        self.directory_url = url.into();
        self
    }

    /// List the servers the directory knows about
    ///
    /// Any transport or parse failure yields an empty list. The directory
    /// is best-effort; an empty result tells the caller to fall back to
    /// [`fallback_servers`].
    pub async fn list_servers(&self) -> Vec<Server> {
        match self.fetch_directory().await {
            Ok(servers) => {
                debug!("server directory listed {} servers", servers.len());
                servers
            }
            Err(e) => {
                warn!("server directory fetch failed: {}", e);
                Vec::new()
            }
        }
    }

    async fn fetch_directory(&self) -> HapiResult<Vec<Server>> {
        let url = Url::parse(&self.directory_url).map_err(|_| HapiError::InvalidUrl {
            url: self.directory_url.clone(),
        })?;
        let body = self.client.handler().get_text(&url).await?;
        Ok(parse_server_directory(&body))
    }
}

/// Parse the directory's CSV body into server entries
///
/// Blank lines and `#` comments are skipped; fields are comma-separated
/// and trimmed; lines with fewer than 5 fields are dropped silently.
/// Field order is fixed: url, name, id, contact, email.
pub fn parse_server_directory(text: &str) -> Vec<Server> {
    let mut servers = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < directory::MIN_SERVER_FIELDS {
            debug!("skipping malformed server directory line: {}", line);
            continue;
        }

        servers.push(Server {
            url: fields[0].to_string(),
            name: fields[1].to_string(),
            id: fields[2].to_string(),
            contact: fields[3].to_string(),
            email: fields[4].to_string(),
        });
    }

    servers
}

/// The static fallback server table
///
/// Process-wide constant data offered to callers when the directory is
/// unreachable or empty.
pub fn fallback_servers() -> Vec<Server> {
    const FALLBACK: &[(&str, &str, &str)] = &[
        ("cdaweb", "CDAWeb", "https://cdaweb.gsfc.nasa.gov/hapi"),
        (
            "intermagnet",
            "INTERMAGNET",
            "https://imag-data.bgs.ac.uk/GIN_V1/hapi",
        ),
        ("lasp", "LASP", "https://lasp.colorado.edu/lisird/hapi"),
        ("knmi", "KNMI", "https://hapi.spaceweather.knmi.nl/hapi"),
        (
            "helioviewer",
            "Helioviewer",
            "https://api.helioviewer.org/hapi/Helioviewer/hapi",
        ),
    ];

    FALLBACK
        .iter()
        .map(|(id, name, url)| Server {
            url: url.to_string(),
            name: name.to_string(),
            id: id.to_string(),
            contact: String::new(),
            email: String::new(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_parsing_well_formed() {
        let body = "# HAPI server directory\n\
                    https://cdaweb.gsfc.nasa.gov/hapi, CDAWeb, cdaweb, Contact Person, contact@example.gov\n\
                    https://lasp.colorado.edu/lisird/hapi, LISIRD, lasp, Someone Else, someone@example.edu\n";

        let servers = parse_server_directory(body);
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].url, "https://cdaweb.gsfc.nasa.gov/hapi");
        assert_eq!(servers[0].name, "CDAWeb");
        assert_eq!(servers[0].id, "cdaweb");
        assert_eq!(servers[0].contact, "Contact Person");
        assert_eq!(servers[0].email, "contact@example.gov");
        // File order preserved
        assert_eq!(servers[1].id, "lasp");
    }

    #[test]
    fn test_directory_parsing_skips_comments_and_blanks() {
        let body = "# comment\n\n   \nhttps://a/hapi,A,a,c,e\n# another comment\n";
        let servers = parse_server_directory(body);
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].id, "a");
    }

    #[test]
    fn test_directory_parsing_drops_short_lines() {
        let body = "https://a/hapi,A,a,c,e\nhttps://broken/hapi,Broken\nhttps://b/hapi,B,b,c,e\n";
        let servers = parse_server_directory(body);
        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].id, "a");
        assert_eq!(servers[1].id, "b");
    }

    #[test]
    fn test_directory_parsing_extra_fields_tolerated() {
        // Lines with more than 5 fields keep the first five
        let body = "https://a/hapi,A,a,c,e,unexpected,more\n";
        let servers = parse_server_directory(body);
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].email, "e");
    }

    #[test]
    fn test_directory_parsing_empty_body() {
        assert!(parse_server_directory("").is_empty());
        assert!(parse_server_directory("# nothing here\n").is_empty());
    }

    #[test]
    fn test_fallback_servers_table() {
        let servers = fallback_servers();
        assert_eq!(servers.len(), 5);
        assert_eq!(servers[0].id, "cdaweb");
        assert!(servers.iter().all(|s| s.url.starts_with("https://")));
    }
}
