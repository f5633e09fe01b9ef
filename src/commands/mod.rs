// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright (c) 2025 Pegasus Heavy Industries, LLC

//! Command implementations for behsse.

pub mod highlight;
pub mod tokens;

use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;
use tracing::debug;

use crate::error::{BehsseError, Result};

/// A snippet read from a file or standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    /// Display name, `<stdin>` for standard input
    pub name: String,
    pub text: String,
}

/// Reads one source. `None` and `-` both mean standard input.
pub async fn read_source(path: Option<PathBuf>) -> Result<Source> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|source| BehsseError::FileRead {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), bytes = text.len(), "read source");
            Ok(Source {
                name: path.display().to_string(),
                text,
            })
        }
        _ => {
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(Source {
                name: "<stdin>".to_string(),
                text,
            })
        }
    }
}

/// Reads every path concurrently, keeping the order they were given in.
/// An empty list reads standard input.
pub async fn read_sources(paths: &[PathBuf]) -> Result<Vec<Source>> {
    if paths.is_empty() {
        return Ok(vec![read_source(None).await?]);
    }

    let handles: Vec<_> = paths
        .iter()
        .cloned()
        .map(|path| tokio::spawn(read_source(Some(path))))
        .collect();

    let mut sources = Vec::with_capacity(handles.len());
    for handle in handles {
        sources.push(handle.await??);
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_read_sources_keeps_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut paths = Vec::new();
        for (name, body) in [("b.tsx", "<B />"), ("a.ts", "const a = 1")] {
            let path = dir.path().join(name);
            std::fs::File::create(&path)
                .unwrap()
                .write_all(body.as_bytes())
                .unwrap();
            paths.push(path);
        }

        let sources = read_sources(&paths).await.unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].text, "<B />");
        assert_eq!(sources[1].text, "const a = 1");
        assert!(sources[1].name.ends_with("a.ts"));
    }

    #[tokio::test]
    async fn test_missing_file_is_reported_with_path() {
        let err = read_sources(&[PathBuf::from("/no/such/file.tsx")])
            .await
            .unwrap_err();
        assert!(matches!(err, BehsseError::FileRead { ref path, .. } if path.ends_with("file.tsx")));
    }
}
