//! Project kinds, creation strategy tags and editor choices

use serde::{Deserialize, Serialize};

/// Supported project kinds
///
/// The declaration order of [`ProjectKind::ALL`] is the precedence order used
/// when more than one kind flag is set on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    Python,
    Java,
    Go,
    Bash,
    Cpp,
    CLang,
    Php,
    Lua,
    Rust,
    Ruby,
    Ocaml,
    Vlang,
    Web,
    NonSpecific,
}

impl ProjectKind {
    /// Every kind, in flag precedence order
    pub const ALL: [ProjectKind; 14] = [
        ProjectKind::Python,
        ProjectKind::Java,
        ProjectKind::Go,
        ProjectKind::Bash,
        ProjectKind::Cpp,
        ProjectKind::CLang,
        ProjectKind::Php,
        ProjectKind::Lua,
        ProjectKind::Rust,
        ProjectKind::Ruby,
        ProjectKind::Ocaml,
        ProjectKind::Vlang,
        ProjectKind::Web,
        ProjectKind::NonSpecific,
    ];

    /// Top-level key of this kind's section in the configuration file
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Java => "java",
            Self::Go => "go",
            Self::Bash => "bash",
            Self::Cpp => "cpp",
            Self::CLang => "c_lang",
            Self::Php => "php",
            Self::Lua => "lua",
            Self::Rust => "rust",
            Self::Ruby => "ruby",
            Self::Ocaml => "ocaml",
            Self::Vlang => "vlang",
            Self::Web => "web",
            Self::NonSpecific => "non_specific",
        }
    }

    /// Creation strategy used for this kind
    pub fn strategy_tag(&self) -> StrategyTag {
        match self {
            Self::Rust | Self::Ruby | Self::Ocaml | Self::Vlang => StrategyTag::Delegated,
            Self::Web => StrategyTag::MultiFile,
            _ => StrategyTag::Templated,
        }
    }

    /// Starter file name used when the configuration does not name one
    ///
    /// `{project_name}` is substituted at creation time.
    pub fn default_file_name(&self) -> Option<&'static str> {
        match self {
            Self::Python => Some("{project_name}.py"),
            Self::Java => Some("Main.java"),
            Self::Go => Some("main.go"),
            Self::Bash => Some("{project_name}.sh"),
            Self::Cpp => Some("main.cpp"),
            Self::CLang => Some("main.c"),
            Self::Php => Some("index.php"),
            Self::Lua => Some("main.lua"),
            _ => None,
        }
    }

    /// External generator used when the configuration does not name one
    ///
    /// Returns the program and the arguments placed before the project path.
    pub fn default_command(&self) -> Option<(&'static str, &'static [&'static str])> {
        match self {
            Self::Rust => Some(("cargo", &["new"])),
            Self::Ruby => Some(("bundler", &["gem"])),
            Self::Ocaml => Some(("dune", &["init", "project"])),
            Self::Vlang => Some(("v", &["new"])),
            _ => None,
        }
    }

    /// Runtime environment provisioned for templated projects of this kind
    pub fn runtime_env(&self) -> Option<RuntimeEnv> {
        match self {
            Self::Python => Some(RuntimeEnv::PythonVenv),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Python => write!(f, "Python"),
            Self::Java => write!(f, "Java"),
            Self::Go => write!(f, "Go"),
            Self::Bash => write!(f, "Bash"),
            Self::Cpp => write!(f, "C++"),
            Self::CLang => write!(f, "C"),
            Self::Php => write!(f, "PHP"),
            Self::Lua => write!(f, "Lua"),
            Self::Rust => write!(f, "Rust"),
            Self::Ruby => write!(f, "Ruby"),
            Self::Ocaml => write!(f, "OCaml"),
            Self::Vlang => write!(f, "V"),
            Self::Web => write!(f, "Web"),
            Self::NonSpecific => write!(f, "Non-specific"),
        }
    }
}

/// The three creation algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyTag {
    /// Starter file, README and ignore file written by the tool itself
    Templated,
    /// An external generator owns file creation
    Delegated,
    /// Several files across subdirectories
    MultiFile,
}

impl std::fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Templated => write!(f, "templated"),
            Self::Delegated => write!(f, "delegated"),
            Self::MultiFile => write!(f, "multi-file"),
        }
    }
}

/// Language runtime environments the tool can provision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeEnv {
    /// Python virtual environment in `<project>/venv`
    PythonVenv,
}

impl RuntimeEnv {
    /// Directory created inside the project
    pub fn dir_name(&self) -> &'static str {
        match self {
            Self::PythonVenv => "venv",
        }
    }
}

/// Editors a new project can be opened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorChoice {
    Code,
    Pycharm,
    Idea,
}

impl EditorChoice {
    /// Every editor, in flag precedence order
    pub const ALL: [EditorChoice; 3] = [
        EditorChoice::Code,
        EditorChoice::Pycharm,
        EditorChoice::Idea,
    ];

    /// Executable launched to open a directory
    pub fn command(&self) -> &'static str {
        match self {
            Self::Code => "code",
            Self::Pycharm => "pycharm",
            Self::Idea => "idea",
        }
    }
}

impl std::fmt::Display for EditorChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Code => write!(f, "VS Code"),
            Self::Pycharm => write!(f, "PyCharm"),
            Self::Idea => write!(f, "IntelliJ IDEA"),
        }
    }
}
