// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! `behsse highlight`

use behsse_highlight::{highlight_all, OutputFormat, RenderOptions, Theme};
use owo_colors::OwoColorize;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use super::{read_sources, Source};
use crate::cli::HighlightArgs;
use crate::config::Config;
use crate::error::Result;

/// Output settings after command-line flags are laid over the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub format: OutputFormat,
    pub options: RenderOptions,
}

impl Settings {
    pub fn resolve(args: &HighlightArgs, config: &Config) -> Self {
        let format = args.format.unwrap_or(config.format);
        Self {
            format,
            options: RenderOptions {
                line_numbers: args.line_numbers || config.line_numbers,
                color: config.color && !args.no_color,
            },
        }
    }
}

/// Run the highlight command.
pub async fn run(args: &HighlightArgs, config: &Config) -> Result<()> {
    let settings = Settings::resolve(args, config);
    let sources = read_sources(&args.files).await?;
    info!(files = sources.len(), format = %settings.format, "highlighting");

    let theme = config.theme.clone();
    let output = tokio::task::spawn_blocking(move || render(&sources, settings, &theme)).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(output.as_bytes()).await?;
    stdout.flush().await?;
    Ok(())
}

/// Renders every source and joins the results. Several terminal outputs are
/// separated by `==> name <==` headers.
pub fn render(sources: &[Source], settings: Settings, theme: &Theme) -> String {
    let texts: Vec<&str> = sources.iter().map(|s| s.text.as_str()).collect();
    let rendered = highlight_all(&texts, settings.format, theme, &settings.options);
    debug!(outputs = rendered.len(), "rendered sources");

    let headers = sources.len() > 1 && settings.format == OutputFormat::Ansi;
    let mut out = String::new();
    for (i, (source, body)) in sources.iter().zip(rendered).enumerate() {
        if headers {
            if i > 0 {
                out.push('\n');
            }
            let header = format!("==> {} <==", source.name);
            if settings.options.color {
                out.push_str(&header.bold().to_string());
            } else {
                out.push_str(&header);
            }
            out.push('\n');
        }
        out.push_str(&body);
        if !body.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(name: &str, text: &str) -> Source {
        Source {
            name: name.to_string(),
            text: text.to_string(),
        }
    }

    fn plain(format: OutputFormat) -> Settings {
        Settings {
            format,
            options: RenderOptions {
                line_numbers: false,
                color: false,
            },
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = Config {
            line_numbers: false,
            ..Config::default()
        };
        let args = HighlightArgs {
            format: Some(OutputFormat::Html),
            line_numbers: true,
            no_color: true,
            ..HighlightArgs::default()
        };
        let settings = Settings::resolve(&args, &config);
        assert_eq!(settings.format, OutputFormat::Html);
        assert!(settings.options.line_numbers);
        assert!(!settings.options.color);
    }

    #[test]
    fn test_config_supplies_defaults() {
        let config = Config {
            format: OutputFormat::Json,
            color: false,
            ..Config::default()
        };
        let settings = Settings::resolve(&HighlightArgs::default(), &config);
        assert_eq!(settings.format, OutputFormat::Json);
        assert!(!settings.options.color);
    }

    #[test]
    fn test_single_plain_source_is_unchanged() {
        let out = render(
            &[source("a.ts", "const a = 1\n")],
            plain(OutputFormat::Ansi),
            &Theme::default(),
        );
        assert_eq!(out, "const a = 1\n");
    }

    #[test]
    fn test_multiple_sources_get_headers() {
        let out = render(
            &[source("a.ts", "a"), source("b.ts", "b")],
            plain(OutputFormat::Ansi),
            &Theme::default(),
        );
        assert_eq!(out, "==> a.ts <==\na\n\n==> b.ts <==\nb\n");
    }

    #[test]
    fn test_html_has_no_headers() {
        let out = render(
            &[source("a.ts", "a"), source("b.ts", "b")],
            plain(OutputFormat::Html),
            &Theme::default(),
        );
        assert!(!out.contains("==>"));
        assert_eq!(out.matches("<pre").count(), 2);
    }
}
