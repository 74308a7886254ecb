//! Path glob compilation and segment-wise matching.
//!
//! Glob rules:
//! - literal segment: exact match,
//! - `*`: exactly one non-empty segment,
//! - `**`: zero or more remaining segments, legal only as the final segment.
//!
//! Candidate paths are normalized to their non-empty segments, so `""` and
//! `"/"` are both the empty path. An absent glob matches only the empty path.

use crate::error::{Result, SitewallError};

/// One compiled glob segment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// `*` — exactly one segment.
    Any,
    /// `**` — everything from here down, including nothing.
    Rest,
}

/// Compiled path glob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathGlob {
    segments: Vec<Segment>,
}

impl PathGlob {
    /// Compile a raw glob. `None` compiles to the empty-path-only glob.
    pub fn compile(pathname: Option<&str>) -> Result<Self> {
        let Some(raw) = pathname else {
            return Ok(Self { segments: Vec::new() });
        };

        if !raw.starts_with('/') {
            return Err(SitewallError::InvalidPattern(format!(
                "pathname {raw} must start with `/`"
            )));
        }

        let parts: Vec<&str> = raw.split('/').filter(|s| !s.is_empty()).collect();

        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let seg = match *part {
                "**" => {
                    if i + 1 != parts.len() {
                        return Err(SitewallError::InvalidPattern(format!(
                            "pathname {raw}: `**` is only allowed as the final segment"
                        )));
                    }
                    Segment::Rest
                }
                "*" => Segment::Any,
                lit => {
                    if lit.contains('*') {
                        return Err(SitewallError::InvalidPattern(format!(
                            "pathname {raw}: partial wildcard in segment {lit}"
                        )));
                    }
                    Segment::Literal(lit.to_string())
                }
            };
            segments.push(seg);
        }

        Ok(Self { segments })
    }

    /// Test a candidate path (leading slash optional, empty segments ignored).
    pub fn matches(&self, path: &str) -> bool {
        let mut candidate = path.split('/').filter(|s| !s.is_empty());

        for seg in &self.segments {
            match seg {
                Segment::Rest => return true,
                Segment::Any => {
                    if candidate.next().is_none() {
                        return false;
                    }
                }
                Segment::Literal(lit) => match candidate.next() {
                    Some(c) if c == lit => {}
                    _ => return false,
                },
            }
        }

        // No trailing `**`: the candidate must be fully consumed.
        candidate.next().is_none()
    }
}
