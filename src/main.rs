use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gitpip::areas::installer::Installer;
use gitpip::artifacts::core::{configure_colors, init_tracing};
use gitpip::artifacts::invocation::install_flags::InstallFlags;
use gitpip::artifacts::reference::package_name::PackageName;
use gitpip::artifacts::reference::package_reference::PackageReference;
use gitpip::artifacts::reference::ref_name::RefSelector;
use gitpip::artifacts::reference::requirement::EntryStyle;
use gitpip::config::Settings;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "gitpip",
    version = "0.1.0",
    about = "Install Python packages straight from git branches and tags",
    long_about = "gitpip composes git+<url>@<ref> addresses and hands them to pip \
    (or another configured package manager). Output and exit status of the \
    package manager are passed through unchanged.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true, env = "GITPIP_CONFIG", help = "Path to a gitpip.toml file")]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        env = "GITPIP_PACKAGE_MANAGER",
        help = "Package manager preset (pip, pip3, python, python3, uv) or command line"
    )]
    package_manager: Option<String>,

    #[arg(long, global = true, help = "Print the command instead of running it")]
    dry_run: bool,

    #[arg(short, long, global = true, help = "Log what gitpip does to stderr")]
    verbose: bool,
}

#[derive(Args)]
struct TargetArgs {
    #[arg(
        index = 1,
        help = "Repository URL, optionally followed by @<ref> (git+ prefix is optional)"
    )]
    target: String,
    #[arg(short, long, help = "Branch to install from")]
    branch: Option<String>,
    #[arg(short, long, help = "Tag to install from")]
    tag: Option<String>,
}

impl TargetArgs {
    fn to_reference(&self, name: Option<&str>) -> Result<PackageReference> {
        let selector = RefSelector::from_options(self.branch.as_deref(), self.tag.as_deref())?;
        let reference = PackageReference::try_parse(&self.target, selector)?;

        Ok(match name {
            Some(name) => reference.with_name(PackageName::try_parse(name)?),
            None => reference,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "install",
        about = "Install a package from a git branch or tag",
        long_about = "This command runs `<package manager> install git+<url>@<ref>`. \
        Without a ref the repository's default branch is installed."
    )]
    Install {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(short, long, help = "Package name, sent as #egg=<name>")]
        name: Option<String>,
        #[arg(short = 'U', long, help = "Upgrade the package if already installed")]
        upgrade: bool,
        #[arg(long, help = "Reinstall even if the version is unchanged")]
        force_reinstall: bool,
        #[arg(long, help = "Do not install dependencies")]
        no_deps: bool,
    },
    #[command(
        name = "upgrade",
        about = "Reinstall a package from the latest commit of a branch",
        long_about = "Shorthand for `install --upgrade --force-reinstall`. \
        Useful after new commits were pushed to the branch."
    )]
    Upgrade {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(short, long, help = "Package name, sent as #egg=<name>")]
        name: Option<String>,
        #[arg(long, help = "Do not install dependencies")]
        no_deps: bool,
    },
    #[command(
        name = "uninstall",
        about = "Uninstall a package by name",
        long_about = "This command runs `<package manager> uninstall <name>`. \
        The name is the installed package name, not the repository URL."
    )]
    Uninstall {
        #[arg(index = 1, help = "The installed package name")]
        name: String,
        #[arg(short, long, help = "Do not ask for confirmation")]
        yes: bool,
    },
    #[command(
        name = "requirement",
        about = "Print or record a dependency file entry",
        long_about = "This command prints `git+<url>@<ref>#egg=<name>`. With --write the entry \
        replaces the git entry of the same package in the dependency file, or is appended."
    )]
    Requirement {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(short, long, help = "Package name")]
        name: String,
        #[arg(long, help = "Use the `<name> @ git+<url>@<ref>` form")]
        pep508: bool,
        #[arg(short, long, help = "Write the entry to the dependency file")]
        write: bool,
        #[arg(short, long, help = "Dependency file to write")]
        file: Option<PathBuf>,
    },
    #[command(
        name = "requirements",
        about = "List the git entries of a dependency file"
    )]
    Requirements {
        #[arg(short, long, help = "Dependency file to read")]
        file: Option<PathBuf>,
    },
    #[command(
        name = "address",
        about = "Print the composed <url>@<ref> address"
    )]
    Address {
        #[command(flatten)]
        target: TargetArgs,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);
    configure_colors();

    let pwd = std::env::current_dir()?;
    let requirements_file = match &cli.command {
        Commands::Requirement { file, .. } | Commands::Requirements { file } => file.clone(),
        _ => None,
    };
    let assume_yes = matches!(cli.command, Commands::Uninstall { yes: true, .. });
    let settings = Settings::load(cli.config.as_deref(), &pwd)?.with_overrides(
        cli.package_manager.clone(),
        assume_yes,
        requirements_file,
    );

    let installer = Installer::new(&pwd, settings, cli.dry_run, Box::new(std::io::stdout()));

    let code = match &cli.command {
        Commands::Install {
            target,
            name,
            upgrade,
            force_reinstall,
            no_deps,
        } => {
            let reference = target.to_reference(name.as_deref())?;
            let flags = InstallFlags::from_options(*upgrade, *force_reinstall, *no_deps);
            installer.install(&reference, flags).await?
        }
        Commands::Upgrade {
            target,
            name,
            no_deps,
        } => {
            let reference = target.to_reference(name.as_deref())?;
            let flags = InstallFlags::from_options(false, false, *no_deps);
            installer.upgrade(&reference, flags).await?
        }
        Commands::Uninstall { name, yes } => installer.uninstall(name, *yes).await?,
        Commands::Requirement {
            target,
            name,
            pep508,
            write,
            ..
        } => {
            let reference = target.to_reference(Some(name.as_str()))?;
            let style = if *pep508 {
                EntryStyle::Pep508
            } else {
                EntryStyle::Egg
            };
            installer.requirement(&reference, style, *write)?;
            0
        }
        Commands::Requirements { .. } => {
            installer.requirements()?;
            0
        }
        Commands::Address { target } => {
            installer.address(&target.to_reference(None)?)?;
            0
        }
    };

    Ok(ExitCode::from(code))
}
