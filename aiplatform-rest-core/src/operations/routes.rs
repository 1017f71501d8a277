//! # Operation URL Families
//!
//! Operations are addressed through one URL family per logical verb. Each family lists
//! one template per parent resource kind that owns operations, e.g.
//! `/{name=projects/*/locations/*/ragCorpora/*/operations/*}` for `Get`.
//!
//! Tables are built from the list of parent resource patterns, once per API surface.
use crate::{
    error::{Error, ErrorKind},
    routing::{PathTemplate, TemplateError, Verb},
};
use std::fmt;

/// The logical operation verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationVerb {
    Get,
    List,
    Cancel,
    Delete,
    Wait,
}

impl OperationVerb {
    pub const ALL: [OperationVerb; 5] = [
        OperationVerb::Get,
        OperationVerb::List,
        OperationVerb::Cancel,
        OperationVerb::Delete,
        OperationVerb::Wait,
    ];

    pub fn http_verb(&self) -> Verb {
        match self {
            OperationVerb::Get | OperationVerb::List => Verb::Get,
            OperationVerb::Cancel | OperationVerb::Wait => Verb::Post,
            OperationVerb::Delete => Verb::Delete,
        }
    }

    /// Whether a failed attempt may be repeated.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, OperationVerb::Cancel)
    }

    /// The RPC name reported on errors.
    pub fn rpc(&self) -> &'static str {
        match self {
            OperationVerb::Get => "GetOperation",
            OperationVerb::List => "ListOperations",
            OperationVerb::Cancel => "CancelOperation",
            OperationVerb::Delete => "DeleteOperation",
            OperationVerb::Wait => "WaitOperation",
        }
    }

    fn template(&self, parent: &str) -> String {
        match self {
            OperationVerb::Get | OperationVerb::Delete => {
                format!("/{{name={parent}/operations/*}}")
            }
            OperationVerb::List => format!("/{{name={parent}}}/operations"),
            OperationVerb::Cancel => format!("/{{name={parent}/operations/*}}:cancel"),
            OperationVerb::Wait => format!("/{{name={parent}/operations/*}}:wait"),
        }
    }
}

impl fmt::Display for OperationVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.rpc())
    }
}

/// Per-verb ordered template lists.
#[derive(Debug, Clone, Default)]
pub struct OperationRoutes {
    families: Vec<(OperationVerb, Vec<PathTemplate>)>,
}

impl OperationRoutes {
    /// Builds every family from parent resource patterns such as
    /// `projects/*/locations/*/featurestores/*/entityTypes/*`.
    pub fn try_new(parents: &[&str]) -> Result<Self, TemplateError> {
        let mut families = Vec::with_capacity(OperationVerb::ALL.len());
        for verb in OperationVerb::ALL {
            let templates = parents
                .iter()
                .map(|parent| PathTemplate::parse(&verb.template(parent)))
                .collect::<Result<Vec<_>, _>>()?;
            families.push((verb, templates));
        }
        Ok(Self { families })
    }

    /// Like [`OperationRoutes::try_new`], dropping (and logging) malformed patterns.
    pub fn new(parents: &[&str]) -> Self {
        let families = OperationVerb::ALL
            .into_iter()
            .map(|verb| {
                let templates = parents
                    .iter()
                    .filter_map(|parent| match PathTemplate::parse(&verb.template(parent)) {
                        Ok(template) => Some(template),
                        Err(e) => {
                            tracing::error!(error = %e, "Skipping malformed operation route");
                            None
                        }
                    })
                    .collect();
                (verb, templates)
            })
            .collect();
        Self { families }
    }

    pub fn family(&self, verb: OperationVerb) -> &[PathTemplate] {
        self.families
            .iter()
            .find(|(v, _)| *v == verb)
            .map(|(_, templates)| templates.as_slice())
            .unwrap_or_default()
    }

    /// Every template of `verb` whose `name` pattern accepts `name`.
    pub fn matching(&self, verb: OperationVerb, name: &str) -> Vec<&PathTemplate> {
        self.family(verb)
            .iter()
            .filter(|template| name_variable_matches(template, name))
            .collect()
    }

    /// Picks the template for `name`: the match with the longest concrete prefix, the
    /// earliest declared one on ties.
    pub fn resolve(&self, verb: OperationVerb, name: &str) -> Result<&PathTemplate, Error> {
        let mut best: Option<(&PathTemplate, usize)> = None;
        for template in self.matching(verb, name) {
            let concrete = concrete_len(template);
            if best.is_none_or(|(_, len)| concrete > len) {
                best = Some((template, concrete));
            }
        }

        best.map(|(template, _)| template).ok_or_else(|| {
            Error::new(
                ErrorKind::UnroutableOperation,
                format!("no {verb} URL template matches operation '{name}'"),
            )
            .with_rpc(verb.rpc())
        })
    }

    /// Resolves `name` and returns the unescaped path segments of the call.
    pub fn path(&self, verb: OperationVerb, name: &str) -> Result<Vec<String>, Error> {
        let template = self.resolve(verb, name)?;
        template.expand(&[name]).ok_or_else(|| {
            Error::new(
                ErrorKind::UnroutableOperation,
                format!("template '{template}' cannot address operation '{name}'"),
            )
            .with_rpc(verb.rpc())
        })
    }
}

fn name_variable_matches(template: &PathTemplate, name: &str) -> bool {
    let mut variables = template.variables();
    match (variables.next(), variables.next()) {
        (Some(variable), None) => variable.field() == "name" && variable.matches(name),
        _ => false,
    }
}

fn concrete_len(template: &PathTemplate) -> usize {
    template.variables().map(|variable| variable.concrete_len()).sum()
}
