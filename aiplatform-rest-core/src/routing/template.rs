//! # URL Templates
//!
//! Parses and evaluates the path templates used by HTTP rules, e.g.
//! `/{parent=projects/*/locations/*}/ragCorpora` or `/{name=projects/**}:cancel`.
//!
//! A template is a sequence of segments. Each segment is a literal, an anonymous `*` (one
//! segment) or `**` (the rest of the path), or a variable `{field.path=pattern}` whose
//! pattern is itself a sequence of literal, `*` and `**` segments (`*` when omitted).
//! `**` may only appear as the last segment of a pattern. A template may end with a
//! `:verb` suffix.
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Template '{0}' must start with '/'")]
    MissingLeadingSlash(String),
    #[error("Template '{0}' has unbalanced braces")]
    UnbalancedBraces(String),
    #[error("Template '{0}' has an empty segment")]
    EmptySegment(String),
    #[error("Template '{0}' has a variable without a field path")]
    EmptyFieldPath(String),
    #[error("Template '{0}' uses '**' before the end of a pattern")]
    MisplacedMultiWildcard(String),
}

/// One segment of a variable pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glob {
    Literal(String),
    /// `*`: exactly one non-empty segment.
    Single,
    /// `**`: zero or more segments.
    Multi,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// Proto field names from the request root to the bound leaf.
    pub field_path: Vec<String>,
    pub pattern: Vec<Glob>,
}

impl Variable {
    /// The dotted field path, e.g. `rag_corpus.name`.
    pub fn field(&self) -> String {
        self.field_path.join(".")
    }

    /// Whether `value` is accepted by the variable's pattern.
    pub fn matches(&self, value: &str) -> bool {
        let segments: Vec<&str> = value.split('/').collect();
        glob_match(&self.pattern, &segments)
    }

    /// Whether the value is substituted as a single path segment (slashes escaped).
    pub fn is_single_segment(&self) -> bool {
        self.pattern == [Glob::Single]
    }

    /// The number of literal segments in the pattern.
    pub fn concrete_len(&self) -> usize {
        self.pattern
            .iter()
            .filter(|glob| matches!(glob, Glob::Literal(_)))
            .count()
    }
}

fn glob_match(pattern: &[Glob], segments: &[&str]) -> bool {
    match (pattern.first(), segments.first()) {
        (None, None) => true,
        (Some(Glob::Multi), _) => true,
        (None, Some(_)) | (Some(_), None) => false,
        (Some(Glob::Single), Some(segment)) => {
            !segment.is_empty() && glob_match(&pattern[1..], &segments[1..])
        }
        (Some(Glob::Literal(literal)), Some(segment)) => {
            literal == segment && glob_match(&pattern[1..], &segments[1..])
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Wildcard(Glob),
    Variable(Variable),
}

/// A parsed URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
    verb: Option<String>,
}

impl PathTemplate {
    pub fn parse(template: &str) -> Result<Self, TemplateError> {
        let error = |make: fn(String) -> TemplateError| make(template.to_string());

        let rest = template
            .strip_prefix('/')
            .ok_or_else(|| error(TemplateError::MissingLeadingSlash))?;

        let mut raw_segments = Vec::new();
        let mut depth = 0usize;
        let mut current = String::new();
        let mut verb = None;
        for (index, c) in rest.char_indices() {
            match c {
                '{' => {
                    depth += 1;
                    current.push(c);
                }
                '}' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or_else(|| error(TemplateError::UnbalancedBraces))?;
                    current.push(c);
                }
                '/' if depth == 0 => raw_segments.push(std::mem::take(&mut current)),
                ':' if depth == 0 && !rest[index + 1..].contains('/') => {
                    verb = Some(rest[index + 1..].to_string());
                    break;
                }
                _ => current.push(c),
            }
        }
        if depth != 0 {
            return Err(error(TemplateError::UnbalancedBraces));
        }
        raw_segments.push(current);

        let mut segments = Vec::with_capacity(raw_segments.len());
        for raw in raw_segments {
            if raw.is_empty() {
                return Err(error(TemplateError::EmptySegment));
            }
            let variable = raw.strip_prefix('{').and_then(|s| s.strip_suffix('}'));
            let segment = match (raw.as_str(), variable) {
                ("*", _) => Segment::Wildcard(Glob::Single),
                ("**", _) => Segment::Wildcard(Glob::Multi),
                (_, Some(inner)) => Segment::Variable(parse_variable(template, inner)?),
                (literal, None) if literal.contains(['{', '}']) => {
                    return Err(error(TemplateError::UnbalancedBraces));
                }
                (literal, None) => Segment::Literal(literal.to_string()),
            };
            segments.push(segment);
        }

        Ok(Self {
            source: template.to_string(),
            segments,
            verb,
        })
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The custom verb after the final `:`, if any.
    pub fn verb(&self) -> Option<&str> {
        self.verb.as_deref()
    }

    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Variable(variable) => Some(variable),
            _ => None,
        })
    }

    /// Substitutes variable values (in declaration order) and returns the raw path segments.
    ///
    /// Values bound to a single `*` stay one segment; other values are split on `/`. The
    /// verb is appended to the last segment. Anonymous wildcards cannot be expanded and
    /// yield `None`, as does a missing value.
    pub fn expand(&self, values: &[&str]) -> Option<Vec<String>> {
        let mut values = values.iter();
        let mut out = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => out.push(literal.clone()),
                Segment::Wildcard(_) => return None,
                Segment::Variable(variable) => {
                    let value = values.next()?;
                    if variable.is_single_segment() {
                        out.push(value.to_string());
                    } else {
                        out.extend(value.split('/').map(str::to_string));
                    }
                }
            }
        }
        if let (Some(verb), Some(last)) = (&self.verb, out.last_mut()) {
            last.push(':');
            last.push_str(verb);
        }
        Some(out)
    }
}

impl fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn parse_variable(template: &str, inner: &str) -> Result<Variable, TemplateError> {
    let (path, pattern) = inner.split_once('=').unwrap_or((inner, "*"));
    if path.is_empty() || path.split('.').any(str::is_empty) {
        return Err(TemplateError::EmptyFieldPath(template.to_string()));
    }

    let mut globs = Vec::new();
    for part in pattern.split('/') {
        let glob = match part {
            "" => return Err(TemplateError::EmptySegment(template.to_string())),
            "*" => Glob::Single,
            "**" => Glob::Multi,
            literal => Glob::Literal(literal.to_string()),
        };
        globs.push(glob);
    }
    if globs[..globs.len() - 1].contains(&Glob::Multi) {
        return Err(TemplateError::MisplacedMultiWildcard(template.to_string()));
    }

    Ok(Variable {
        field_path: path.split('.').map(str::to_string).collect(),
        pattern: globs,
    })
}
