use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{
    cli::Args,
    config::{Config, ConfigSource},
    error::{Error, Result},
    models::SearchRequest,
    output::render,
    prompt::{parse_keyword, parse_limit, read_keyword, read_limit},
    search::SearchClient,
};

/// Runs one search end to end: configuration, input, request, output.
///
/// Input is validated before the client is built, so a rejected keyword or
/// count never touches the network.
pub async fn run<R, W>(args: &Args, source: &dyn ConfigSource, input: &mut R, output: &mut W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let config = Config::load(source)?;
    debug!("Loaded {:?}", config);

    let query = match &args.query {
        Some(raw) => parse_keyword(raw)?,
        None => read_keyword(input, output)?,
    };

    let limit = match &args.limit {
        Some(raw) => parse_limit(raw)?,
        None => read_limit(input, output)?,
    };

    let request = SearchRequest::new(query, limit)?;
    let client = SearchClient::new(&config)?;

    info!("Searching for GIFs...");
    let result = client.search(&request).await?;

    render(output, &result, args.format)
}

/// Writes the fatal message for a failed run. Goes to stderr regardless of
/// the log filter, so a failing run is never silent.
pub fn report_failure<W: Write>(writer: &mut W, err: &Error) {
    let _ = writeln!(writer, "error: Failed to get GIFs: {}", err);
    let _ = writer.flush();
}
