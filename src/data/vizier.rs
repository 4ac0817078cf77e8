//! VizieR catalog queries
//!
//! Queries are sent to the ASU-TSV interface of the VizieR service and the
//! tab-separated response is parsed into a [`CatalogTable`]. A response
//! looks like:
//!
//! ```text
//! #RESOURCE=yCat_5050
//! #Column	RAJ2000	(a10)	Hours RA, equinox J2000
//! ...
//! RAJ2000	DEJ2000	Vmag
//! "h:m:s"	"d:m:s"	mag
//! ----------	---------	-----
//! 00 05 09.9	+45 13 45	 6.70
//! ```

use log::{debug, info};
use reqwest::Url;
use std::time::Duration;

use super::CatalogSource;
use crate::catalogs::{CatalogTable, Cell};
use crate::config::ExportConfig;
use crate::CatalogError;
use crate::Result;

/// ASU-TSV endpoint of the VizieR service at CDS
pub const VIZIER_ASU_TSV_URL: &str = "https://vizier.cds.unistra.fr/viz-bin/asu-tsv";

/// VizieR filter expression that excludes empty values
const NOT_EMPTY: &str = "!=";

/// A single-catalog VizieR query
#[derive(Debug, Clone, PartialEq)]
pub struct VizierQuery {
    endpoint: String,
    catalog: String,
    columns: Vec<String>,
    sort: Option<String>,
    row_limit: Option<usize>,
    timeout: Duration,
}

impl VizierQuery {
    /// Query `columns` of `catalog`, rejecting rows where any of them is empty
    pub fn new(catalog: impl Into<String>, columns: Vec<String>) -> Self {
        Self {
            endpoint: VIZIER_ASU_TSV_URL.to_string(),
            catalog: catalog.into(),
            columns,
            sort: None,
            row_limit: None,
            timeout: Duration::from_secs(60),
        }
    }

    /// Build the query described by an export configuration
    pub fn from_config(config: &ExportConfig) -> Self {
        let columns = config
            .columns
            .names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        let mut query = Self::new(config.catalog.clone(), columns)
            .with_endpoint(config.endpoint.clone())
            .with_row_limit(config.row_limit)
            .with_timeout(Duration::from_secs(config.timeout_secs));
        if config.sort_by_magnitude {
            query = query.with_sort(config.columns.magnitude.clone());
        }
        query
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sort ascending by the given column
    pub fn with_sort(mut self, column: impl Into<String>) -> Self {
        self.sort = Some(column.into());
        self
    }

    /// Cap the number of rows; `None` requests every row
    pub fn with_row_limit(mut self, row_limit: Option<usize>) -> Self {
        self.row_limit = row_limit;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn catalog(&self) -> &str {
        &self.catalog
    }

    /// Render the ASU request URL
    pub fn url(&self) -> Result<Url> {
        let mut params: Vec<(String, String)> = vec![
            ("-source".to_string(), self.catalog.clone()),
            ("-out".to_string(), self.columns.join(",")),
        ];
        if let Some(sort) = &self.sort {
            params.push(("-sort".to_string(), sort.clone()));
        }
        let max = match self.row_limit {
            Some(limit) => limit.to_string(),
            None => "unlimited".to_string(),
        };
        params.push(("-out.max".to_string(), max));
        for column in &self.columns {
            params.push((column.clone(), NOT_EMPTY.to_string()));
        }

        Url::parse_with_params(&self.endpoint, &params)
            .map_err(|e| CatalogError::Config(format!("Invalid endpoint {}: {}", self.endpoint, e)))
    }
}

impl CatalogSource for VizierQuery {
    fn describe(&self) -> String {
        format!("VizieR catalog {} at {}", self.catalog, self.endpoint)
    }

    fn fetch(&self) -> Result<CatalogTable> {
        let url = self.url()?;
        info!("Querying {}", self.describe());
        debug!("Request URL: {}", url);

        // Create HTTP client with timeout
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| {
                CatalogError::UpstreamUnavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        let response = client.get(url).send().map_err(|e| {
            CatalogError::UpstreamUnavailable(format!("Failed to reach {}: {}", self.endpoint, e))
        })?;

        if !response.status().is_success() {
            return Err(CatalogError::UpstreamUnavailable(format!(
                "{} answered with status {}",
                self.endpoint,
                response.status()
            )));
        }

        let body = response.text().map_err(|e| {
            CatalogError::UpstreamUnavailable(format!("Failed to read response: {}", e))
        })?;
        debug!("Received {} bytes", body.len());

        parse_tsv(&self.catalog, &body)
    }
}

/// Parse an ASU-TSV response into a table in catalog units
///
/// Only the first table of the response is read. Blank cells become
/// [`Cell::Missing`]; short rows are padded with missing cells.
pub fn parse_tsv(catalog: &str, text: &str) -> Result<CatalogTable> {
    let lines: Vec<&str> = text.lines().collect();

    let Some(start) = lines
        .iter()
        .position(|line| !line.trim().is_empty() && !line.starts_with('#'))
    else {
        return Err(CatalogError::UpstreamUnavailable(no_table_message(
            catalog, &lines,
        )));
    };
    let block: Vec<&str> = lines[start..]
        .iter()
        .take_while(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .copied()
        .collect();
    let block = block.join("\n");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(block.as_bytes());

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()
        .map_err(|e| CatalogError::UpstreamUnavailable(format!("Unreadable response: {}", e)))?;

    let Some(header) = records.first() else {
        return Err(CatalogError::UpstreamUnavailable(no_table_message(
            catalog, &lines,
        )));
    };
    let columns: Vec<String> = header.iter().map(|name| name.trim().to_string()).collect();
    let width = columns.len();

    let is_separator = |index: usize| {
        records.get(index).is_some_and(|record| {
            record
                .iter()
                .all(|field| !field.is_empty() && field.trim().chars().all(|c| c == '-'))
        })
    };

    let (units, data_start) = if is_separator(1) {
        (vec![String::new(); width], 2)
    } else if is_separator(2) {
        let mut units: Vec<String> = records[1].iter().map(|u| u.trim().to_string()).collect();
        units.resize(width, String::new());
        (units, 3)
    } else {
        (vec![String::new(); width], 1)
    };

    let mut table = CatalogTable::new(catalog, columns).with_units(units)?;
    for record in records.iter().skip(data_start) {
        let mut row: Vec<Cell> = record.iter().map(Cell::from_raw).collect();
        if row.len() < width {
            row.resize(width, Cell::Missing);
        }
        table.push_row(row)?;
    }

    debug!(
        "Parsed {} rows with columns {:?} from {}",
        table.len(),
        table.columns(),
        catalog
    );
    Ok(table)
}

/// Explain a response without a table, quoting any VizieR error lines
fn no_table_message(catalog: &str, lines: &[&str]) -> String {
    let errors: Vec<&str> = lines
        .iter()
        .filter(|line| line.starts_with("#***"))
        .map(|line| line.trim_start_matches('#').trim_matches('*').trim())
        .collect();
    if errors.is_empty() {
        format!("No data returned for catalog {}", catalog)
    } else {
        format!(
            "No data returned for catalog {}: {}",
            catalog,
            errors.join("; ")
        )
    }
}
