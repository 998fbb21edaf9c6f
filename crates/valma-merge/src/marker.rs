//! Router block appended to `studentScript.js` by merge.
//!
//! The block starts with a marker comment. The marker carries a version so a
//! later revert (or a second merge) can recognise code injected by any
//! release, including the legacy `merge_students.js` helper (version 0).

use serde::Serialize;

const MARKER_PREFIX: &str = "/* ROUTER ADDED BY ";
const MARKER_SUFFIX: &str = " */";
const LEGACY_TOOL: &str = "merge_students.js";
const TOOL: &str = "valma merge v";

/// Blank line merge puts between the original script and the block.
const SEPARATOR: &str = "\n\n";

/// Hash router installed into the shared script.
///
/// Shows the `.page` section named by the URL hash, `home` by default.
pub const ROUTER_BODY: &str = r"function showSection(id) {
  document.querySelectorAll('.page').forEach(s => s.style.display = 'none');
  const el = document.getElementById(id);
  if (el) el.style.display = 'block';
}

function initRouter() {
  function route() {
    const hash = (location.hash || '#home').replace('#','');
    showSection(hash || 'home');
  }
  window.addEventListener('hashchange', route);
  route();
}

if (document.readyState === 'loading') {
  document.addEventListener('DOMContentLoaded', initRouter);
} else {
  initRouter();
}
";

/// Marker comment that opens a router block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouterMarker {
    pub version: u32,
}

impl RouterMarker {
    /// Marker written by this release.
    pub const CURRENT: Self = Self { version: 1 };
    /// Marker written by the legacy `merge_students.js` helper.
    pub const LEGACY: Self = Self { version: 0 };

    #[must_use]
    pub fn render(self) -> String {
        if self.version == 0 {
            format!("{MARKER_PREFIX}{LEGACY_TOOL}{MARKER_SUFFIX}")
        } else {
            format!("{MARKER_PREFIX}{TOOL}{}{MARKER_SUFFIX}", self.version)
        }
    }

    /// Parse a full marker comment.
    #[must_use]
    pub fn parse(comment: &str) -> Option<Self> {
        let tool = comment
            .strip_prefix(MARKER_PREFIX)?
            .strip_suffix(MARKER_SUFFIX)?;
        if tool == LEGACY_TOOL {
            return Some(Self::LEGACY);
        }
        tool.strip_prefix(TOOL)?
            .parse::<u32>()
            .ok()
            .filter(|version| *version > 0)
            .map(|version| Self { version })
    }

    /// Earliest recognised marker in `script` and its byte offset.
    #[must_use]
    pub fn find(script: &str) -> Option<(usize, Self)> {
        script.match_indices(MARKER_PREFIX).find_map(|(start, _)| {
            let rest = &script[start..];
            let end = rest.find(MARKER_SUFFIX)? + MARKER_SUFFIX.len();
            Self::parse(&rest[..end]).map(|marker| (start, marker))
        })
    }
}

/// Whether `script` already carries a router block of any version.
#[must_use]
pub fn has_router(script: &str) -> bool {
    RouterMarker::find(script).is_some()
}

/// Append the current router block.
///
/// Returns `None` when a router block is already present, so callers can
/// skip the write.
#[must_use]
pub fn append_router(script: &str) -> Option<String> {
    if has_router(script) {
        return None;
    }
    Some(format!(
        "{script}{SEPARATOR}{}\n{ROUTER_BODY}",
        RouterMarker::CURRENT.render()
    ))
}

/// Drop everything from the first router marker on.
///
/// Returns `None` when the script has no marker and must be left unchanged.
#[must_use]
pub fn strip_router(script: &str) -> Option<String> {
    let (start, _) = RouterMarker::find(script)?;
    let before = &script[..start];
    Some(before.strip_suffix(SEPARATOR).unwrap_or(before).to_string())
}
