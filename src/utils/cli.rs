//! Command-line argument parsing and help for glimpse.
//!
//! Flags map onto [Overrides], which are applied on top of the loaded config file.
//!
//! When invoked with no args/flags (gls), glimpse lists the current directory.

use crate::config::Config;

/// Command-line values that take precedence over glimpse.toml.
/// `None` keeps whatever the config file (or the internal default) says.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Overrides {
    pub show_dotfiles: Option<bool>,
    pub permissions: Option<bool>,
    pub size: Option<bool>,
    pub vcs_status: Option<bool>,
    pub content_summary: Option<bool>,
}

/// What to list and how.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub path: Option<String>,
    pub overrides: Overrides,
    pub verbose: bool,
}

/// Parsed command line, before any side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List(ListRequest),
    Help,
    Version,
    ConfigHelp,
    Init,
    Unknown(String),
    ExtraPath(String),
}

/// What `main` should do after [handle_args] ran.
pub enum CliAction {
    List(ListRequest),
    Exit,
}

/// Parse arguments (without the program name).
///
/// Short flags may be bundled: `-al` is `-a -l`. Informational flags
/// (help, version, init) win as soon as they are seen.
pub fn parse_args<I, S>(args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut request = ListRequest::default();

    for arg in args {
        let arg = arg.as_ref();
        match arg {
            "-h" | "--help" => return Command::Help,
            "-V" | "--version" => return Command::Version,
            "--config-help" => return Command::ConfigHelp,
            "--init" => return Command::Init,
            "--no-vcs" => request.overrides.vcs_status = Some(false),
            "--no-summary" => request.overrides.content_summary = Some(false),
            "--all" => request.overrides.show_dotfiles = Some(true),
            "--long" => {
                request.overrides.permissions = Some(true);
                request.overrides.size = Some(true);
            }
            "--perms" => request.overrides.permissions = Some(true),
            "--size" => request.overrides.size = Some(true),
            "--verbose" => request.verbose = true,
            short if short.starts_with('-') && !short.starts_with("--") && short.len() > 1 => {
                for flag in short.chars().skip(1) {
                    match flag {
                        'h' => return Command::Help,
                        'V' => return Command::Version,
                        'a' => request.overrides.show_dotfiles = Some(true),
                        'l' => {
                            request.overrides.permissions = Some(true);
                            request.overrides.size = Some(true);
                        }
                        'p' => request.overrides.permissions = Some(true),
                        's' => request.overrides.size = Some(true),
                        'v' => request.verbose = true,
                        _ => return Command::Unknown(arg.to_string()),
                    }
                }
            }
            path if !path.starts_with('-') && !path.trim().is_empty() => {
                if request.path.is_some() {
                    return Command::ExtraPath(path.to_string());
                }
                request.path = Some(path.to_string());
            }
            other => return Command::Unknown(other.to_string()),
        }
    }
    Command::List(request)
}

/// Parse the process arguments and run the informational commands.
pub fn handle_args() -> CliAction {
    let command = parse_args(std::env::args().skip(1));

    match command {
        Command::List(request) => CliAction::List(request),
        Command::Help => {
            print_help();
            CliAction::Exit
        }
        Command::Version => {
            print_version();
            CliAction::Exit
        }
        Command::ConfigHelp => {
            print_config_help();
            CliAction::Exit
        }
        Command::Init => {
            if let Err(e) = Config::generate_default(&Config::default_path()) {
                eprintln!("Error: {}", e);
            }
            CliAction::Exit
        }
        Command::Unknown(arg) => {
            eprintln!("Unknown argument: {}", arg);
            eprintln!("Try --help for available options");
            CliAction::Exit
        }
        Command::ExtraPath(arg) => {
            eprintln!("Error: glimpse lists one directory at a time (extra path {}).", arg);
            eprintln!("Usage: gls [OPTIONS] [PATH]");
            CliAction::Exit
        }
    }
}

fn print_version() {
    println!("glimpse {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"glimpse - A directory listing that shows what is inside every entry

USAGE:
  gls [OPTIONS] [PATH]

PATH:
  Directory to list (defaults to current directory)

OPTIONS:
  -a, --all               Show dotfiles
  -l, --long              Show permissions and sizes
  -p, --perms             Show the permission triad
  -s, --size              Show sizes
      --no-vcs            Do not query git
      --no-summary        Do not show contents
  -v, --verbose           Log debug information to stderr
      --init              Generate a default configuration
      --config-help       Display all the configuration options
  -h, --help              Print help information
  -V, --version           Display the current installed version of glimpse

ENVIRONMENT:
  GLIMPSE_CONFIG          Override the default config path
  RUST_LOG                Log filter (e.g. "debug")
  NO_COLOR                Disable colours
"#
    );
}

fn print_config_help() {
    let help_text = r##"
glimpse - Full Configuration Guide (glimpse.toml)

=========================
 General Settings
=========================
[general]
  show_dotfiles              List entries whose name starts with '.' [default: true]
  dirs_first                 Sort directories before files [default: true]
  symlink_depth              How many links of a symlink chain are followed (1-8) [default: 1]
  hidden_names               Names never listed [default: [".DS_Store", ".git", ".gitignore"]]

=========================
 Display Settings
=========================
[display]
  owner_permissions          Show the owner permission digit
  group_permissions          Show the group permission digit
  other_permissions          Show the other permission digit
  size                       Show the size column
  vcs_status                 Show git status codes and the branch header [default: true]
  content_summary            Show directory children and file contents [default: true]
  fallback_width             Columns used when the terminal size is unknown [default: 80]

=========================
 Theme Configuration
=========================
[theme]
Colors are terminal names ("Red", "Blue", "darkgray") or hex "#RRGGBB".

  directory                  Directory names
  symlink                    Symlink names
  executable                 Executable files
  text                       Text files (.txt, .md, ...)
  program                    Source files (.rs, .py, ...)
  makefile                   Makefiles and build scripts
  dotfile                    Dotfiles
  unresolved                 Symlink targets that could not be resolved
  badge                      The "(git repo)" badge
  branch                     Branch name in the header line
"##;

    println!("{}", help_text);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(args: &[&str]) -> ListRequest {
        match parse_args(args) {
            Command::List(request) => request,
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn no_args_lists_cwd_with_config_defaults() {
        let request = list(&[]);
        assert_eq!(request.path, None);
        assert_eq!(request.overrides, Overrides::default());
        assert!(!request.verbose);
    }

    #[test]
    fn long_flags_set_overrides() {
        let request = list(&["--long", "--no-vcs", "--no-summary", "src"]);
        assert_eq!(request.path.as_deref(), Some("src"));
        assert_eq!(request.overrides.permissions, Some(true));
        assert_eq!(request.overrides.size, Some(true));
        assert_eq!(request.overrides.vcs_status, Some(false));
        assert_eq!(request.overrides.content_summary, Some(false));
        assert_eq!(request.overrides.show_dotfiles, None);
    }

    #[test]
    fn bundled_short_flags() {
        let request = list(&["-av", "-s"]);
        assert_eq!(request.overrides.show_dotfiles, Some(true));
        assert_eq!(request.overrides.size, Some(true));
        assert_eq!(request.overrides.permissions, None);
        assert!(request.verbose);
    }

    #[test]
    fn informational_flags_short_circuit() {
        assert_eq!(parse_args(["-l", "--help"]), Command::Help);
        assert_eq!(parse_args(["-V"]), Command::Version);
        assert_eq!(parse_args(["-ah"]), Command::Help);
        assert_eq!(parse_args(["--init"]), Command::Init);
        assert_eq!(parse_args(["--config-help"]), Command::ConfigHelp);
    }

    #[test]
    fn rejects_unknown_and_extra_paths() {
        assert_eq!(
            parse_args(["--colour"]),
            Command::Unknown("--colour".to_string())
        );
        assert_eq!(parse_args(["-ax"]), Command::Unknown("-ax".to_string()));
        assert_eq!(parse_args(["a", "b"]), Command::ExtraPath("b".to_string()));
        assert_eq!(parse_args(["-"]), Command::Unknown("-".to_string()));
    }
}
