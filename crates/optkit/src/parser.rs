use indexmap::IndexMap;

use crate::error::{OptionError, Result};
use crate::help;
use crate::normalize::normalize;
use crate::spec::OptionSpec;
use crate::trigger::{Trigger, is_option_token};

/// A set of option definitions that argument vectors are parsed against.
///
/// Every parser accepts `-h`/`--help`: the built-in help option is appended
/// unless an equal definition was supplied.
#[derive(Debug, Clone)]
pub struct Parser {
    definitions: Vec<OptionSpec>,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Parser {
    pub fn new(definitions: Vec<OptionSpec>) -> Self {
        let mut parser = Self { definitions };
        parser.push_unique(Self::help_option());
        parser
    }

    /// The built-in `[-h|--help]` option, zero parameters.
    pub fn help_option() -> OptionSpec {
        OptionSpec::new(Trigger::mixed('h', "help")).with_help("Show help information")
    }

    /// A new parser with `spec` appended. Adding an existing definition is a no-op.
    pub fn with_definition(&self, spec: OptionSpec) -> Self {
        let mut parser = self.clone();
        parser.push_unique(spec);
        parser
    }

    pub fn definitions(&self) -> &[OptionSpec] {
        &self.definitions
    }

    /// Usage text for `command_name` built from this parser's definitions.
    pub fn help_text(&self, command_name: &str) -> String {
        help::help_text(command_name, &self.definitions)
    }

    fn push_unique(&mut self, spec: OptionSpec) {
        if !self.definitions.contains(&spec) {
            self.definitions.push(spec);
        }
    }

    fn lookup(&self, token: &str) -> Option<&OptionSpec> {
        self.definitions.iter().find(|spec| spec.matches(token))
    }

    /// Split `tokens` (program name excluded) into options and positionals.
    ///
    /// Fails on the first option token that matches no definition, or when an
    /// option is followed by fewer parameters than it requires.
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Parsed> {
        let tokens = normalize(tokens);
        tracing::debug!(tokens = tokens.len(), "parsing arguments");

        let state = tokens
            .into_iter()
            .try_fold(ParseState::default(), |state, token| self.step(state, token))
            .inspect_err(|err| tracing::debug!(error = %err, "argument parsing failed"))?;

        state.finish().inspect_err(|err| {
            tracing::debug!(error = %err, "argument parsing failed");
        })
    }

    fn step<'d>(&'d self, mut state: ParseState<'d>, token: String) -> Result<ParseState<'d>> {
        if let Some(pending) = state.pending.last_mut()
            && pending.needs_parameters()
        {
            if is_option_token(&token) {
                return Err(OptionError::unmet_arity(
                    pending.spec,
                    &pending.parameters,
                    Some(&token),
                ));
            }
            tracing::trace!(option = %pending.spec, parameter = %token, "parameter");
            pending.parameters.push(token);
            return Ok(state);
        }

        if !is_option_token(&token) {
            tracing::trace!(positional = %token, "positional");
            state.positionals.push(token);
            return Ok(state);
        }

        let Some(spec) = self.lookup(&token) else {
            return Err(OptionError::unknown_option(&token));
        };
        tracing::trace!(option = %spec, "option");
        state.pending.push(Occurrence {
            spec,
            parameters: Vec::new(),
        });
        Ok(state)
    }
}

#[derive(Debug, Default)]
struct ParseState<'d> {
    pending: Vec<Occurrence<'d>>,
    positionals: Vec<String>,
}

#[derive(Debug)]
struct Occurrence<'d> {
    spec: &'d OptionSpec,
    parameters: Vec<String>,
}

impl Occurrence<'_> {
    fn needs_parameters(&self) -> bool {
        self.parameters.len() < self.spec.required_parameters()
    }
}

impl ParseState<'_> {
    fn finish(self) -> Result<Parsed> {
        if let Some(last) = self.pending.last()
            && last.parameters.len() != last.spec.required_parameters()
        {
            return Err(OptionError::unmet_arity(last.spec, &last.parameters, None));
        }

        let occurrences: Vec<ParsedOption> = self
            .pending
            .into_iter()
            .map(|o| ParsedOption {
                spec: o.spec.clone(),
                parameters: o.parameters,
            })
            .collect();

        let mut options = IndexMap::new();
        for o in &occurrences {
            options.insert(o.spec.clone(), o.parameters.clone());
        }

        Ok(Parsed {
            options,
            occurrences,
            positionals: self.positionals,
        })
    }
}

/// One occurrence of an option in the input, with the parameters it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOption {
    pub spec: OptionSpec,
    pub parameters: Vec<String>,
}

/// Result of a successful [`Parser::parse`].
#[derive(Debug, Clone, Default)]
pub struct Parsed {
    options: IndexMap<OptionSpec, Vec<String>>,
    occurrences: Vec<ParsedOption>,
    positionals: Vec<String>,
}

impl Parsed {
    /// Options keyed by definition, in first-seen order.
    ///
    /// When an option occurs more than once, its value is the parameter list of
    /// the last occurrence.
    pub fn options(&self) -> &IndexMap<OptionSpec, Vec<String>> {
        &self.options
    }

    /// Parameters of `spec`'s last occurrence.
    pub fn get(&self, spec: &OptionSpec) -> Option<&[String]> {
        self.options.get(spec).map(|v| v.as_slice())
    }

    pub fn is_present(&self, spec: &OptionSpec) -> bool {
        self.options.contains_key(spec)
    }

    /// Every option occurrence in input order, duplicates included.
    pub fn occurrences(&self) -> &[ParsedOption] {
        &self.occurrences
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Whether the built-in `-h`/`--help` option was given.
    pub fn help_requested(&self) -> bool {
        self.is_present(&Parser::help_option())
    }

    pub fn into_parts(self) -> (IndexMap<OptionSpec, Vec<String>>, Vec<String>) {
        (self.options, self.positionals)
    }
}
