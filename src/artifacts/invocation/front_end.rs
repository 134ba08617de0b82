use crate::artifacts::invocation::Invocation;
use crate::artifacts::invocation::install_flags::InstallFlags;
use crate::artifacts::reference::package_name::PackageName;
use crate::artifacts::reference::package_reference::PackageReference;
use anyhow::Context;
use is_executable::IsExecutable;
use std::path::Path;

/// Known package manager command lines, by the name users configure.
pub const PRESETS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "pip" => "pip",
    "pip3" => "pip3",
    "python" => "python -m pip",
    "python3" => "python3 -m pip",
    "uv" => "uv pip",
};

/// `uv pip uninstall` never prompts and has no `-y`.
const NON_PROMPTING_PRESETS: [&str; 1] = ["uv"];

/// The command line `gitpip` prefixes to `install` / `uninstall`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    program: String,
    base_args: Vec<String>,
    prompts_on_uninstall: bool,
}

impl PackageManager {
    /// Resolves a preset name, or splits anything else on whitespace and
    /// uses it verbatim.
    pub fn resolve(spec: &str) -> anyhow::Result<Self> {
        let spec = spec.trim();

        let (command_line, prompts_on_uninstall) = match PRESETS.get(spec) {
            Some(command_line) => (*command_line, !NON_PROMPTING_PRESETS.contains(&spec)),
            None => (spec, true),
        };

        let mut words = command_line.split_whitespace().map(str::to_string);
        let program = words.next().context("package manager command cannot be empty")?;

        if program.contains(std::path::MAIN_SEPARATOR) || program.contains('/') {
            let path = Path::new(&program);
            if !path.exists() {
                anyhow::bail!("package manager not found at {}", path.display());
            }
            if !path.is_executable() {
                anyhow::bail!("package manager at {} is not executable", path.display());
            }
        }

        Ok(Self {
            program,
            base_args: words.collect(),
            prompts_on_uninstall,
        })
    }

    pub fn install(&self, reference: &PackageReference, flags: InstallFlags) -> Invocation {
        let mut args = self.base_args.clone();
        args.push("install".to_string());
        args.extend(flags.to_args().into_iter().map(str::to_string));
        args.push(reference.install_target());

        Invocation::new(self.program.clone(), args)
    }

    pub fn uninstall(&self, name: &PackageName, assume_yes: bool) -> Invocation {
        let mut args = self.base_args.clone();
        args.push("uninstall".to_string());
        if assume_yes && self.prompts_on_uninstall {
            args.push("-y".to_string());
        }
        args.push(name.to_string());

        Invocation::new(self.program.clone(), args)
    }
}
