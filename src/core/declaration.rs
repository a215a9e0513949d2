//! Build configuration declaration scanning
//!
//! Finds and rewrites single-line `key = value` declarations in the build
//! configuration source without touching any other byte of the file.

use crate::core::version::{BuildNumber, VERSION_CODE_KEY, VERSION_NAME_KEY, VersionRecord};
use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::ops::Range;
use tracing::{debug, instrument};

/// A declaration line located in the configuration source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    /// 1-based line number
    pub line: usize,
    /// Byte range of the line, excluding its line ending
    pub span: Range<usize>,
    /// Everything before the assignment: indentation, modifiers, key, type
    pub head: &'a str,
    /// Raw value after the assignment, trailing whitespace removed
    pub value: &'a str,
}

/// Line-oriented scanner for the `versionName` and `versionCode` declarations
#[derive(Debug)]
pub struct DeclarationScanner {
    /// Regex for the `versionName` line
    re_version_name: Regex,
    /// Regex for the `versionCode` line
    re_version_code: Regex,
}

impl DeclarationScanner {
    /// Create a new scanner
    pub fn new() -> Result<Self> {
        Ok(Self {
            re_version_name: declaration_regex(VERSION_NAME_KEY)?,
            re_version_code: declaration_regex(VERSION_CODE_KEY)?,
        })
    }

    fn regex_for(&self, key: &str) -> Result<&Regex> {
        match key {
            VERSION_NAME_KEY => Ok(&self.re_version_name),
            VERSION_CODE_KEY => Ok(&self.re_version_code),
            other => Err(ReleaseError::validation(format!(
                "Unsupported declaration key: {other}"
            ))),
        }
    }

    /// Locate the single declaration of `key`.
    ///
    /// Fails with [`ReleaseError::MalformedDeclaration`] when the key is
    /// absent or declared more than once.
    pub fn find<'a>(&self, content: &'a str, key: &str) -> Result<Declaration<'a>> {
        let re = self.regex_for(key)?;

        let mut found = re.captures_iter(content).filter_map(|caps| {
            let whole = caps.get(0)?;
            let head = caps.name("head")?;
            let value = caps.name("value")?;
            Some(Declaration {
                line: line_number(content, whole.start()),
                span: whole.range(),
                head: head.as_str().trim_end(),
                value: value.as_str(),
            })
        });

        let first = found
            .next()
            .ok_or_else(|| ReleaseError::malformed(key, "declaration not found"))?;

        let extra: Vec<usize> = found.map(|d| d.line).collect();
        if !extra.is_empty() {
            let lines: Vec<String> = std::iter::once(first.line)
                .chain(extra)
                .map(|l| l.to_string())
                .collect();
            return Err(ReleaseError::malformed(
                key,
                format!("declared more than once (lines {})", lines.join(", ")),
            ));
        }

        debug!("Found {} on line {}: {:?}", key, first.line, first.value);
        Ok(first)
    }

    /// Extract the version name with surrounding whitespace and quotes removed
    pub fn version_name(&self, content: &str) -> Result<String> {
        let decl = self.find(content, VERSION_NAME_KEY)?;
        let name = decl.value.trim().trim_matches('"').trim();

        if name.is_empty() {
            return Err(ReleaseError::malformed(
                VERSION_NAME_KEY,
                format!("empty value on line {}", decl.line),
            ));
        }

        Ok(name.to_string())
    }

    /// Extract the build number
    pub fn version_code(&self, content: &str) -> Result<BuildNumber> {
        let decl = self.find(content, VERSION_CODE_KEY)?;

        decl.value.parse::<BuildNumber>().map_err(|_| {
            ReleaseError::malformed(
                VERSION_CODE_KEY,
                format!(
                    "'{}' on line {} is not a positive integer",
                    decl.value, decl.line
                ),
            )
        })
    }

    /// Read both version fields
    #[instrument(skip(self, content))]
    pub fn read_record(&self, content: &str) -> Result<VersionRecord> {
        Ok(VersionRecord {
            name: self.version_name(content)?,
            code: self.version_code(content)?,
        })
    }

    /// Replace the value of `key`, keeping every other byte of `content`.
    ///
    /// The declaration is re-rendered as `<head> = <value>`; indentation,
    /// modifiers and the line ending are preserved.
    pub fn replace(&self, content: &str, key: &str, new_value: &str) -> Result<String> {
        let decl = self.find(content, key)?;
        let rendered = format!("{} = {}", decl.head, new_value);

        let mut updated = String::with_capacity(content.len() + new_value.len());
        updated.push_str(&content[..decl.span.start]);
        updated.push_str(&rendered);
        updated.push_str(&content[decl.span.end..]);

        debug!(
            "Line {}: {:?} -> {:?}",
            decl.line,
            &content[decl.span.clone()],
            rendered
        );
        Ok(updated)
    }

    /// Replace the `versionCode` declaration with `code`
    pub fn replace_version_code(&self, content: &str, code: BuildNumber) -> Result<String> {
        self.replace(content, VERSION_CODE_KEY, &code.to_string())
    }
}

/// Build the line regex for one key.
///
/// Accepts Gradle (`versionCode = 42`) and Kotlin (`const val versionCode: Int = 42`)
/// forms. The key must be a whole word, so `minVersionCode` or `Config.versionCode`
/// never match. `R` mode keeps `\r` out of the match on CRLF files.
fn declaration_regex(key: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?mR)^(?P<head>[ \t]*(?:[A-Za-z_][A-Za-z0-9_]*[ \t]+)*{}[ \t]*(?::[ \t]*[A-Za-z_][A-Za-z0-9_.?<>]*[ \t]*)?)=[ \t]*(?P<value>[^\r\n]*?)[ \t]*$",
        regex::escape(key)
    );
    Regex::new(&pattern)
        .map_err(|e| ReleaseError::validation(format!("Failed to compile regex: {e}")))
}

fn line_number(content: &str, offset: usize) -> usize {
    content[..offset].matches('\n').count() + 1
}
