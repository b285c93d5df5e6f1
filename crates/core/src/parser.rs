use crate::argument_info::ArgumentInfo;
use crate::format_options::ArgumentFormatOptions;
use crate::parsed_arguments::ParsedArguments;

/// Turns raw argument tokens into [`ParsedArguments`].
pub trait ArgumentParser {
    fn parse_arguments(&self, arguments: &[String]) -> ParsedArguments;
}

/// Parser that accepts every name appearing in its input.
///
/// Declarations are derived from the arguments themselves with
/// [`ArgumentInfo::from_args`], so only malformed tokens produce errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultArgumentParser {
    options: ArgumentFormatOptions,
}

impl DefaultArgumentParser {
    #[must_use]
    pub fn new(options: ArgumentFormatOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &ArgumentFormatOptions {
        &self.options
    }
}

impl ArgumentParser for DefaultArgumentParser {
    fn parse_arguments(&self, arguments: &[String]) -> ParsedArguments {
        let valid_arguments = ArgumentInfo::from_args(&self.options, arguments, true);
        ParsedArguments::parse(&self.options, arguments, &valid_arguments)
    }
}
