//! Command tree data model.
//!
//! Commands are declared by the documented program (or its manifest) and
//! only read here. Child registries are a closed set of shapes so every
//! consumer enumerates through [`Command::children`] instead of probing
//! capabilities per call site.
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A flag declaration on a command.
#[derive(Debug, Clone, Default)]
pub struct OptionSpec {
    /// Flag spellings in declared order, e.g. `-v` then `--verbose`.
    pub flags: Vec<String>,
    /// Placeholder for the option's value, absent for bare switches.
    pub metavar: Option<String>,
    pub help: Option<String>,
    pub default: Option<String>,
    /// Hidden options are listed only when a request opts in.
    pub hidden: bool,
}

impl OptionSpec {
    /// Declare an option with a single flag spelling.
    pub fn new(flag: impl Into<String>) -> Self {
        Self {
            flags: vec![flag.into()],
            ..Self::default()
        }
    }

    /// Add an alternative flag spelling.
    pub fn with_alias(mut self, flag: impl Into<String>) -> Self {
        self.flags.push(flag.into());
        self
    }

    pub fn with_metavar(mut self, metavar: impl Into<String>) -> Self {
        self.metavar = Some(metavar.into());
        self
    }

    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Flag spellings joined the way a help listing shows them, with the
    /// metavar appended when the option takes a value.
    pub(crate) fn flag_label(&self) -> String {
        let mut label = self.flags.join(", ");
        if let Some(metavar) = &self.metavar {
            label.push(' ');
            label.push_str(metavar);
        }
        label
    }
}

/// A positional parameter declaration on a command.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    /// Placeholder shown in usage lines, conventionally upper-case.
    pub metavar: String,
    pub required: bool,
    /// Variadic parameters accept any number of trailing values.
    pub variadic: bool,
}

impl ArgSpec {
    pub fn required(metavar: impl Into<String>) -> Self {
        Self {
            metavar: metavar.into(),
            required: true,
            variadic: false,
        }
    }

    pub fn optional(metavar: impl Into<String>) -> Self {
        Self {
            metavar: metavar.into(),
            required: false,
            variadic: false,
        }
    }

    pub fn variadic(mut self) -> Self {
        self.variadic = true;
        self
    }

    /// Usage placeholder: required metavars appear bare, optional ones in
    /// brackets, variadic ones with a trailing ellipsis.
    pub(crate) fn usage_piece(&self) -> String {
        let mut piece = if self.required {
            self.metavar.clone()
        } else {
            format!("[{}]", self.metavar)
        };
        if self.variadic {
            piece.push_str("...");
        }
        piece
    }
}

/// Child registry of a command.
#[derive(Debug, Clone)]
pub enum Subcommands {
    /// Leaf command with no children.
    None,
    /// Children registered up front, keyed by name.
    Eager(BTreeMap<String, Command>),
    /// Children materialized on demand from declared names.
    Lazy(LazySubcommands),
}

/// Declared child names plus a per-name getter, for programs that register
/// subcommands on demand.
#[derive(Clone)]
pub struct LazySubcommands {
    names: Vec<String>,
    resolve: Rc<dyn Fn(&str) -> Option<Command>>,
}

impl LazySubcommands {
    pub fn new(
        names: Vec<String>,
        resolve: impl Fn(&str) -> Option<Command> + 'static,
    ) -> Self {
        Self {
            names,
            resolve: Rc::new(resolve),
        }
    }

    /// Names the registry claims to provide, in declared order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    fn resolve_all(&self, parent: &str) -> BTreeMap<String, Command> {
        let mut resolved = BTreeMap::new();
        for name in &self.names {
            let command = (self.resolve)(name).unwrap_or_else(|| {
                panic!("declared subcommand '{name}' of '{parent}' did not resolve")
            });
            resolved.insert(name.clone(), command);
        }
        resolved
    }
}

impl fmt::Debug for LazySubcommands {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySubcommands")
            .field("names", &self.names)
            .finish_non_exhaustive()
    }
}

/// A named command in the documented program's tree.
#[derive(Debug, Clone)]
pub struct Command {
    pub name: String,
    /// Full help text; the first source for the rendered description.
    pub help: Option<String>,
    /// Abbreviated help, used when no full help text exists.
    pub short_help: Option<String>,
    pub options: Vec<OptionSpec>,
    pub args: Vec<ArgSpec>,
    pub subcommands: Subcommands,
    /// Whether the program adds an implicit `--help` flag to this command.
    pub help_flag: bool,
    /// Hidden commands render only when a request opts in.
    pub hidden: bool,
}

impl Command {
    /// Declare a leaf command.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: None,
            short_help: None,
            options: Vec::new(),
            args: Vec::new(),
            subcommands: Subcommands::None,
            help_flag: true,
            hidden: false,
        }
    }

    /// Declare a group: a command that dispatches to subcommands, even
    /// before any are registered.
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            subcommands: Subcommands::Eager(BTreeMap::new()),
            ..Self::new(name)
        }
    }

    pub fn with_help(mut self, text: impl Into<String>) -> Self {
        self.help = Some(text.into());
        self
    }

    pub fn with_short_help(mut self, text: impl Into<String>) -> Self {
        self.short_help = Some(text.into());
        self
    }

    pub fn with_option(mut self, option: OptionSpec) -> Self {
        self.options.push(option);
        self
    }

    pub fn with_arg(mut self, arg: ArgSpec) -> Self {
        self.args.push(arg);
        self
    }

    /// Register an eager subcommand, keyed by its own name. Mixing this
    /// with a lazily resolved registry is a definition defect.
    pub fn with_subcommand(mut self, command: Command) -> Self {
        let mut children = match std::mem::replace(&mut self.subcommands, Subcommands::None) {
            Subcommands::None => BTreeMap::new(),
            Subcommands::Eager(children) => children,
            Subcommands::Lazy(_) => {
                panic!("cannot register an eager subcommand on a lazily resolved group")
            }
        };
        children.insert(command.name.clone(), command);
        self.subcommands = Subcommands::Eager(children);
        self
    }

    /// Replace the child registry with a lazily resolved one.
    pub fn with_lazy_subcommands(mut self, lazy: LazySubcommands) -> Self {
        self.subcommands = Subcommands::Lazy(lazy);
        self
    }

    pub fn without_help_flag(mut self) -> Self {
        self.help_flag = false;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Whether this command dispatches to subcommands. Groups keep their
    /// dispatch shape even when the registry is currently empty.
    pub fn is_group(&self) -> bool {
        !matches!(self.subcommands, Subcommands::None)
    }

    /// Options that appear in rendered listings. The implicit help flag is
    /// never listed; hidden options only when the caller opts in.
    pub fn listable_options(&self, show_hidden: bool) -> Vec<&OptionSpec> {
        self.options
            .iter()
            .filter(|option| show_hidden || !option.hidden)
            .collect()
    }

    /// Usage tokens that follow the invocation path: `[OPTIONS]` whenever
    /// any option exists (the implicit help flag counts), then positional
    /// placeholders, then the subcommand placeholder for groups.
    pub fn usage_pieces(&self) -> Vec<String> {
        let mut pieces = Vec::new();
        if self.help_flag || !self.options.is_empty() {
            pieces.push("[OPTIONS]".to_string());
        }
        for arg in &self.args {
            pieces.push(arg.usage_piece());
        }
        if self.is_group() {
            pieces.push("COMMAND [ARGS]...".to_string());
        }
        pieces
    }

    /// Enumerate child commands keyed by declared name, in name order.
    ///
    /// Eager registries are used as-is. Lazy registries resolve every
    /// declared name on each call; a declared name that fails to resolve is
    /// a defect in the command definition and aborts generation.
    pub fn children(&self) -> BTreeMap<String, Command> {
        match &self.subcommands {
            Subcommands::None => BTreeMap::new(),
            Subcommands::Eager(children) => children.clone(),
            Subcommands::Lazy(lazy) => lazy.resolve_all(&self.name),
        }
    }
}
