use thiserror::Error;

use crate::spec::OptionSpec;

/// Why an argument vector was rejected.
///
/// There is one kind; the description says which token or which under-filled
/// option caused it and is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
    #[error("{description}")]
    InvalidOption { description: String },
}

impl OptionError {
    pub fn description(&self) -> &str {
        match self {
            Self::InvalidOption { description } => description.as_str(),
        }
    }

    pub(crate) fn unknown_option(token: &str) -> Self {
        Self::InvalidOption {
            description: format!("Invalid option: {token}"),
        }
    }

    /// `spec` still wanted parameters when `preempted_by` (another option
    /// token) arrived, or when input ran out if `preempted_by` is `None`.
    pub(crate) fn unmet_arity(
        spec: &OptionSpec,
        given: &[String],
        preempted_by: Option<&str>,
    ) -> Self {
        let mut description = format!(
            "{} requires {} parameters, parameters {:?} are given",
            spec.trigger(),
            spec.required_parameters(),
            given
        );
        if let Some(token) = preempted_by {
            description.push_str(&format!(" before option {token} was declared"));
        }
        Self::InvalidOption { description }
    }
}

pub type Result<T> = std::result::Result<T, OptionError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigger::Trigger;

    #[test]
    fn unknown_option_message() {
        let err = OptionError::unknown_option("--nope");
        assert_eq!(err.description(), "Invalid option: --nope");
        assert_eq!(err.to_string(), "Invalid option: --nope");
    }

    #[test]
    fn unmet_arity_lists_collected_parameters() {
        let spec = OptionSpec::new(Trigger::mixed('h', "hello")).with_parameters(3);
        let given = vec!["world".to_string(), "of".to_string()];
        let err = OptionError::unmet_arity(&spec, &given, None);
        assert_eq!(
            err.description(),
            "[-h|--hello] requires 3 parameters, parameters [\"world\", \"of\"] are given"
        );
    }

    #[test]
    fn unmet_arity_names_preempting_token() {
        let spec = OptionSpec::new(Trigger::short('n')).with_parameters(2);
        let err = OptionError::unmet_arity(&spec, &[], Some("-w"));
        assert_eq!(
            err.description(),
            "-n requires 2 parameters, parameters [] are given before option -w was declared"
        );
    }
}
