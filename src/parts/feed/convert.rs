use tracing::{debug, info, instrument, warn};

use crate::parts::feed::aggregate::FeedAggregate;
use crate::parts::feed::config::{ConvertOptions, ParseErrorPolicy};
use crate::parts::feed::error::{Result, ToolError};
use crate::parts::feed::flatten::walk_vehicle;
use crate::parts::feed::io::json_read::JsonFolder;
use crate::parts::feed::io::xml_write;
use crate::parts::feed::shop::{ShopFeed, build_shop};

/// Counters describing a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Files opened, whether or not they were usable.
    pub files_seen: usize,
    pub files_processed: usize,
    pub files_skipped: usize,
    /// Distinct product codes in the feed.
    pub items: usize,
    /// Set when the test-mode ceiling ended the scan early.
    pub truncated: bool,
}

/// Converts every vendor document in the input folder into one XML feed.
#[instrument(
    level = "info",
    skip_all,
    fields(input = %options.input_dir.display(), output = %options.output.display())
)]
pub fn folder_to_xml(options: &ConvertOptions) -> Result<ConvertSummary> {
    let (shop, summary) = folder_to_shop(options)?;
    xml_write::write_shop(&options.output, &shop)?;
    info!(
        items = summary.items,
        files = summary.files_processed,
        skipped = summary.files_skipped,
        truncated = summary.truncated,
        "feed written"
    );
    Ok(summary)
}

/// Aggregates the input folder into a [`ShopFeed`] without writing it.
#[instrument(level = "debug", skip_all, fields(input = %options.input_dir.display()))]
pub fn folder_to_shop(options: &ConvertOptions) -> Result<(ShopFeed, ConvertSummary)> {
    let mut aggregate = FeedAggregate::new();
    let mut summary = ConvertSummary::default();
    let mut documents = JsonFolder::open(&options.input_dir)?;

    loop {
        if aggregate.reached(options.limit) {
            summary.truncated = documents.size_hint().0 > 0;
            break;
        }
        let Some((path, loaded)) = documents.next() else {
            break;
        };
        summary.files_seen += 1;

        match loaded {
            Ok(document) => {
                walk_vehicle(&document, &mut aggregate, options.limit);
                summary.files_processed += 1;
                debug!(
                    path = %path.display(),
                    aggregated = aggregate.len(),
                    "processed document"
                );
            }
            Err(error @ ToolError::InvalidShape { .. }) => {
                warn!("skipping file {error}");
                summary.files_skipped += 1;
            }
            Err(error) => match options.on_parse_error {
                ParseErrorPolicy::Abort => return Err(error),
                ParseErrorPolicy::Skip => {
                    warn!(path = %path.display(), %error, "skipping unreadable file");
                    summary.files_skipped += 1;
                }
            },
        }
    }

    summary.items = aggregate.len();
    Ok((build_shop(&aggregate), summary))
}
